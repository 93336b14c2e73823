//! Geographic globe layout: particles on a rotating sphere.

use super::PositionMap;
use crate::config::GlobeParams;
use crate::jitter::{entity_seed, signed_unit, unit_f32};
use crate::particle::Particle;
use orrery_geo::sphere_from_lat_lon;

const SALT_LAT: u64 = 0x676c_6f62_655f_6c61;
const SALT_LON: u64 = 0x676c_6f62_655f_6c6f;
const SALT_SPREAD_LAT: u64 = 0x7370_7265_6164_5f61;
const SALT_SPREAD_LON: u64 = 0x7370_7265_6164_5f6f;

/// Compute globe positions for all particles at `time_s`: each entity's
/// coordinate goes onto a sphere of fixed radius, then the whole sphere
/// rotates about +Y proportional to elapsed time.
pub fn positions(particles: &[Particle], cfg: &GlobeParams, time_s: f64) -> PositionMap {
    let spin = time_s * f64::from(cfg.rotation_rad_per_s);
    let (s, c) = ((spin.sin()) as f32, (spin.cos()) as f32);
    let mut out = PositionMap::with_capacity(particles.len());
    for (index, q) in particles.iter().enumerate() {
        let [lat, lon] = coordinate(q, index, cfg);
        let p = sphere_from_lat_lon(lat, lon, cfg.radius);
        // Rotate about the vertical axis.
        let x = p[0] * c + p[2] * s;
        let z = -p[0] * s + p[2] * c;
        out.insert(q.node_id.clone(), [x, p[1], z]);
    }
    out
}

/// Coordinate used for one particle: its own lat/lon, its region's
/// representative coordinate (spread slightly so region-mates do not
/// stack), or a stable hash-derived fallback.
fn coordinate(q: &Particle, index: usize, cfg: &GlobeParams) -> [f64; 2] {
    if let Some(ll) = q.lat_lon {
        return ll;
    }
    let seed = entity_seed(index, &q.node_id);
    if let Some(rep) = q.region.as_deref().and_then(|r| cfg.region_coordinate(r)) {
        let lat = rep[0] + f64::from(signed_unit(seed, SALT_SPREAD_LAT)) * cfg.region_spread_deg;
        let lon = rep[1] + f64::from(signed_unit(seed, SALT_SPREAD_LON)) * cfg.region_spread_deg;
        return [lat.clamp(-89.0, 89.0), lon];
    }
    [
        f64::from(unit_f32(seed, SALT_LAT)) * 120.0 - 60.0,
        f64::from(unit_f32(seed, SALT_LON)) * 360.0 - 180.0,
    ]
}
