//! Spiral-galaxy clustering: up to three independent multi-arm
//! logarithmic spirals, one per asset category.

use super::PositionMap;
use crate::config::GalaxyConfig;
use crate::hierarchy::AssetCategory;
use crate::jitter::{entity_seed, signed_unit};
use crate::particle::Particle;

const SALT_ANGLE: u64 = 0x6172_6d5f_616e_676c;
const SALT_RADIUS: u64 = 0x6172_6d5f_7261_6469;
const SALT_HEIGHT: u64 = 0x6172_6d5f_6865_6967;

/// Compute galaxy positions for all particles at `time_s`.
///
/// Within one category's spiral, a particle's slot decides its arm
/// (`slot % arm_count`) and its normalized progress along that arm; the
/// radius follows a bounded log-spiral law, with hash-seeded angular and
/// radial jitter and continuous rotation proportional to elapsed time.
pub fn positions(particles: &[Particle], cfg: &GalaxyConfig, time_s: f64) -> PositionMap {
    let mut out = PositionMap::with_capacity(particles.len());
    for category in AssetCategory::all() {
        let p = cfg.for_category(category);
        let members: Vec<(usize, &Particle)> =
            particles.iter().enumerate().filter(|(_, q)| q.category == category).collect();
        if members.is_empty() {
            continue;
        }
        let arms = p.arm_count.max(1) as usize;
        let per_arm = members.len().div_ceil(arms);
        let spin = (time_s * f64::from(p.rotation_rad_per_s)) as f32;
        for (slot, (index, q)) in members.iter().enumerate() {
            let seed = entity_seed(*index, &q.node_id);
            let along = if per_arm > 1 {
                (slot / arms) as f32 / (per_arm - 1) as f32
            } else {
                0.5
            };
            let arm_offset = (slot % arms) as f32 * std::f32::consts::TAU / arms as f32;
            let theta = along * p.sweep_rad
                + arm_offset
                + signed_unit(seed, SALT_ANGLE) * p.angular_jitter_rad
                + spin;
            let r = p.max_radius
                * radial_growth(along, p.tightness)
                * (1.0 + signed_unit(seed, SALT_RADIUS) * p.radial_jitter_frac);
            let y = signed_unit(seed, SALT_HEIGHT) * p.half_thickness;
            out.insert(
                q.node_id.clone(),
                [p.center[0] + r * theta.cos(), p.center[1] + y, p.center[2] + r * theta.sin()],
            );
        }
    }
    out
}

/// Bounded log-spiral radius law: 0 at the core, 1 at the rim. Degrades
/// to linear when the tightness is too small for the exponential form.
fn radial_growth(along: f32, tightness: f32) -> f32 {
    if tightness.abs() < 1e-3 {
        return along;
    }
    ((tightness * along).exp() - 1.0) / (tightness.exp() - 1.0)
}
