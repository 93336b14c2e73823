//! Latitude/longitude grid polylines for the globe and its unfolded map.
//!
//! Generators return sampled `(lat, lon)` sequences in degrees; the caller
//! maps each sample through [`crate::sphere_to_projection_interpolation`]
//! so the grid follows the unfold animation for free.

use crate::projection::{sphere_to_projection_interpolation, PlaneConfig};

/// Sampled parallels (constant-latitude lines) every `step_deg` degrees,
/// excluding the poles. Each line holds `samples + 1` points spanning
/// longitude -180..180.
pub fn parallels(step_deg: f64, samples: usize) -> Vec<Vec<[f64; 2]>> {
    let mut lines = Vec::new();
    if step_deg <= 0.0 || samples == 0 {
        return lines;
    }
    let mut lat = -90.0 + step_deg;
    while lat < 90.0 - 1e-9 {
        let mut line = Vec::with_capacity(samples + 1);
        for i in 0..=samples {
            let lon = -180.0 + 360.0 * (i as f64) / (samples as f64);
            line.push([lat, lon]);
        }
        lines.push(line);
        lat += step_deg;
    }
    lines
}

/// Sampled meridians (constant-longitude lines) every `step_deg` degrees.
/// Each line holds `samples + 1` points spanning latitude -90..90.
pub fn meridians(step_deg: f64, samples: usize) -> Vec<Vec<[f64; 2]>> {
    let mut lines = Vec::new();
    if step_deg <= 0.0 || samples == 0 {
        return lines;
    }
    let mut lon = -180.0;
    while lon < 180.0 - 1e-9 {
        let mut line = Vec::with_capacity(samples + 1);
        for i in 0..=samples {
            let lat = -90.0 + 180.0 * (i as f64) / (samples as f64);
            line.push([lat, lon]);
        }
        lines.push(line);
        lon += step_deg;
    }
    lines
}

/// Map a `(lat, lon)` polyline into 3D at the given unfold progress.
pub fn project_polyline(
    line: &[[f64; 2]],
    progress: f32,
    radius: f32,
    plane: &PlaneConfig,
) -> Vec<[f32; 3]> {
    line.iter()
        .map(|ll| sphere_to_projection_interpolation(ll[0], ll[1], progress, radius, plane))
        .collect()
}
