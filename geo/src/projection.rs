//! Spherical placement and the Van der Grinten IV compromise projection.
//!
//! The projection trades area and shape fidelity for curved-meridian
//! aesthetics; it exists to unfold the globe into a flat map, not to
//! navigate by. Inputs are degrees; callers are responsible for supplying
//! latitudes in [-90, 90] and longitudes in [-180, 180]. Out-of-range
//! values are not validated or wrapped.

use crate::math::{lerp3, smoothstep};
use std::f64::consts::{FRAC_PI_2, PI};

/// Singularity guard for the closed-form projection.
const TOL: f64 = 1e-10;
const TWO_OVER_PI: f64 = 2.0 / PI;

/// Placement of the unfolded map plane in world space.
///
/// Projected `x` grows toward +X and northern latitudes extend toward -Z,
/// so the map reads north-up from a camera above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneConfig {
    /// World-space height (Y) at which the plane sits.
    pub height: f32,
    /// Uniform scale applied to projected coordinates.
    pub scale: f32,
    /// Plane center offset in the XZ plane.
    pub center: [f32; 2],
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self { height: 0.0, scale: 2.0, center: [0.0, 0.0] }
    }
}

/// Map (latitude, longitude) in degrees onto a sphere of the given radius.
///
/// Latitude 90° maps to the +Y pole; longitude is measured through a fixed
/// reference meridian so that lon 0° faces -X at time zero. Total over all
/// real inputs.
pub fn sphere_from_lat_lon(lat_deg: f64, lon_deg: f64, radius: f32) -> [f32; 3] {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();
    let r = f64::from(radius);
    let x = -r * phi.sin() * theta.cos();
    let y = r * phi.cos();
    let z = r * phi.sin() * theta.sin();
    [x as f32, y as f32, z as f32]
}

/// Van der Grinten IV forward projection.
///
/// Returns `[x, y]` with `x` clamped into [-π, π] and `y` into [-π/2, π/2].
/// Special cases: the equator maps to `(λ, 0)`, the central meridian and
/// the poles map to `(0, φ)`. Near-singular denominators fall back to a
/// boundary value instead of producing NaN/∞.
pub fn compromise_projection(lat_deg: f64, lon_deg: f64) -> [f32; 2] {
    let phi = lat_deg.to_radians();
    let lam = lon_deg.to_radians();

    if phi.abs() < TOL {
        return [lam.clamp(-PI, PI) as f32, 0.0];
    }
    if lam.abs() < TOL || (phi.abs() - FRAC_PI_2).abs() < TOL {
        return [0.0, phi.clamp(-FRAC_PI_2, FRAC_PI_2) as f32];
    }

    let bt = (TWO_OVER_PI * phi).abs();
    let bt2 = bt * bt;
    // bt == 1 only at the poles, which are handled above.
    let ct = 0.5 * (bt * (8.0 - bt * (2.0 + bt2)) - 5.0) / (bt2 * (bt - 1.0));
    let ct2 = ct * ct;
    let mut dt = TWO_OVER_PI * lam;
    dt += 1.0 / dt;
    dt = (dt * dt - 4.0).max(0.0).sqrt();
    if lam.abs() - FRAC_PI_2 < 0.0 {
        dt = -dt;
    }
    let dt2 = dt * dt;
    let mut x1 = bt + ct;
    x1 *= x1;
    let t = bt + 3.0 * ct;
    let ft = x1 * (bt2 + ct2 * dt2 - 1.0)
        + (1.0 - bt2) * (bt2 * (t * t + 4.0 * ct2) + ct2 * (12.0 * bt * ct + 4.0 * ct2));
    let den = 4.0 * x1 + dt2;
    if den.abs() < TOL {
        // Degenerate closed form; collapse to the central-meridian value.
        return [0.0, phi.clamp(-FRAC_PI_2, FRAC_PI_2) as f32];
    }
    let x1 = (dt * (x1 + ct2 - 1.0) + 2.0 * ft.max(0.0).sqrt()) / den;
    let mut x = FRAC_PI_2 * x1;
    let mut y = FRAC_PI_2 * (1.0 + dt * x1.abs() - x1 * x1).max(0.0).sqrt();
    if lam < 0.0 {
        x = -x;
    }
    if phi < 0.0 {
        y = -y;
    }
    [x.clamp(-PI, PI) as f32, y.clamp(-FRAC_PI_2, FRAC_PI_2) as f32]
}

/// Projected coordinate placed onto the configured 3D plane.
pub fn plane_point(lat_deg: f64, lon_deg: f64, plane: &PlaneConfig) -> [f32; 3] {
    let [px, py] = compromise_projection(lat_deg, lon_deg);
    [plane.center[0] + px * plane.scale, plane.height, plane.center[1] - py * plane.scale]
}

/// Interpolate one coordinate between its sphere position and its position
/// on the unfolded map plane.
///
/// `progress` is smoothstep-eased, so `0` yields exactly the sphere point
/// and `1` exactly the plane point, with a smooth blend in between. This
/// drives the globe "unfold" animation and is reused for continent
/// outlines and the graticule.
pub fn sphere_to_projection_interpolation(
    lat_deg: f64,
    lon_deg: f64,
    progress: f32,
    radius: f32,
    plane: &PlaneConfig,
) -> [f32; 3] {
    let sphere = sphere_from_lat_lon(lat_deg, lon_deg, radius);
    let flat = plane_point(lat_deg, lon_deg, plane);
    lerp3(sphere, flat, smoothstep(progress))
}
