//! Eased morphs between formations, with per-target flourishes.
//!
//! Each morph computes the end formation's positions via the matching
//! calculator and interpolates per entity from captured start positions
//! using an eased progress, so perceived motion decelerates into the
//! target. Easing is a fixed design choice, not a tunable.

use super::{galaxy, globe, nebula, position_or_origin, Formation, PositionMap};
use crate::config::{EngineConfig, NebulaMetric};
use crate::jitter::{entity_seed, signed_unit};
use crate::particle::Particle;
use orrery_geo::math::{ease_out_cubic, ease_out_quartic, lerp3, normalize, scale};
use std::f32::consts::PI;

const SALT_SPREAD: u64 = 0x7472_616e_735f_7370;

/// Settled (or morph-target) positions for one formation.
///
/// A region filter only participates in the nebula layout (the exploded
/// mode shares it); entities not matching the filter are excluded from
/// the returned map, and the renderer is expected to hide or fade them.
pub fn end_positions(
    particles: &[Particle],
    cfg: &EngineConfig,
    metric: NebulaMetric,
    formation: Formation,
    region_filter: Option<&str>,
    time_s: f64,
) -> PositionMap {
    match formation {
        Formation::Galaxy => galaxy::positions(particles, &cfg.galaxy, time_s),
        Formation::Globe => globe::positions(particles, &cfg.globe, time_s),
        Formation::Nebula | Formation::Exploded => match region_filter {
            None => nebula::positions(particles, &cfg.nebula, metric, time_s),
            Some(region) => {
                let matching: Vec<Particle> = particles
                    .iter()
                    .filter(|q| q.region.as_deref() == Some(region))
                    .cloned()
                    .collect();
                nebula::positions(&matching, &cfg.nebula, metric, time_s)
            }
        },
    }
}

/// Morph from captured `start` positions toward `target` at the given raw
/// progress (cubic ease-out applied here).
///
/// Flourishes: a mid-morph arc-height bump when targeting the globe, an
/// outward spread jitter when targeting the nebula. At progress 0 the
/// result equals `start` exactly; at progress 1 it equals the target
/// calculator's output within floating-point tolerance.
pub fn positions(
    particles: &[Particle],
    cfg: &EngineConfig,
    metric: NebulaMetric,
    start: &PositionMap,
    target: Formation,
    region_filter: Option<&str>,
    progress: f32,
    time_s: f64,
) -> PositionMap {
    let end = end_positions(particles, cfg, metric, target, region_filter, time_s);
    let k = ease_out_cubic(progress);
    let bump = (k * PI).sin();
    let mut out = PositionMap::with_capacity(end.len());
    for (index, q) in particles.iter().enumerate() {
        // Filtered-out entities have no end slot and drop from the frame.
        let Some(&e) = end.get(&q.node_id) else { continue };
        let s = position_or_origin(start, &q.node_id);
        let mut pos = lerp3(s, e, k);
        match target {
            Formation::Globe => pos[1] += cfg.transition.arc_height * bump,
            Formation::Nebula | Formation::Exploded => {
                let seed = entity_seed(index, &q.node_id);
                let dir = normalize([
                    signed_unit(seed, SALT_SPREAD),
                    signed_unit(seed, SALT_SPREAD ^ 1),
                    signed_unit(seed, SALT_SPREAD ^ 2),
                ]);
                let off = scale(dir, cfg.transition.spread_amount * bump);
                pos = [pos[0] + off[0], pos[1] + off[1], pos[2] + off[2]];
            }
            Formation::Galaxy => {}
        }
        out.insert(q.node_id.clone(), pos);
    }
    out
}

/// Entrance explosion: every entity flies out of a single origin point
/// into the target formation, with a quartic ease, a radial overshoot at
/// mid-flight, and a residual swirl that unwinds as the morph settles.
pub fn entrance_positions(
    particles: &[Particle],
    cfg: &EngineConfig,
    metric: NebulaMetric,
    target: Formation,
    origin: [f32; 3],
    progress: f32,
    time_s: f64,
) -> PositionMap {
    let end = end_positions(particles, cfg, metric, target, None, time_s);
    let k = ease_out_quartic(progress);
    let radial = k * (1.0 + cfg.transition.overshoot * (k * PI).sin());
    let swirl = (1.0 - k) * cfg.transition.swirl_rad;
    let (sin_a, cos_a) = swirl.sin_cos();
    let mut out = PositionMap::with_capacity(end.len());
    for q in particles {
        let Some(&e) = end.get(&q.node_id) else { continue };
        let d = [e[0] - origin[0], e[1] - origin[1], e[2] - origin[2]];
        // Swirl about the vertical axis through the origin.
        let dx = d[0] * cos_a - d[2] * sin_a;
        let dz = d[0] * sin_a + d[2] * cos_a;
        out.insert(
            q.node_id.clone(),
            [origin[0] + dx * radial, origin[1] + d[1] * radial, origin[2] + dz * radial],
        );
    }
    out
}
