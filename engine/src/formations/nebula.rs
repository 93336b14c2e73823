//! Free-form nebula cloud ordered vertically by a chosen metric.

use super::PositionMap;
use crate::config::{NebulaMetric, NebulaParams};
use crate::jitter::{entity_seed, signed_unit, unit_f32};
use crate::particle::Particle;
use std::cmp::Ordering;
use std::f32::consts::TAU;

const SALT_X: u64 = 0x6e65_625f_785f_6a69;
const SALT_Z: u64 = 0x6e65_625f_7a5f_6a69;
const SALT_PHASE: u64 = 0x6e65_625f_7068_6173;

/// Compute nebula positions at `time_s`.
///
/// Entities are pre-sorted by the metric before index-based placement, so
/// higher values cluster toward the top of the cloud. The vertical axis is
/// the clamped linear normalization of the metric; the horizontal axes
/// come from the sorted slot with bounded jitter, and a small float is
/// layered on all three axes as a function of elapsed time.
pub fn positions(
    particles: &[Particle],
    cfg: &NebulaParams,
    metric: NebulaMetric,
    time_s: f64,
) -> PositionMap {
    let mut order: Vec<(usize, &Particle)> = particles.iter().enumerate().collect();
    order.sort_by(|a, b| {
        metric_of(a.1, metric)
            .partial_cmp(&metric_of(b.1, metric))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.node_id.cmp(&b.1.node_id))
    });

    let cols = cfg.columns.max(1) as usize;
    let rows = order.len().div_ceil(cols).max(1);
    let w = time_s * f64::from(cfg.float_speed);
    let mut out = PositionMap::with_capacity(particles.len());
    for (slot, (index, q)) in order.iter().enumerate() {
        let seed = entity_seed(*index, &q.node_id);
        let col = (slot % cols) as f32 - (cols - 1) as f32 * 0.5;
        let row = (slot / cols) as f32 - (rows - 1) as f32 * 0.5;
        let t = normalized(metric_of(q, metric), cfg, metric);
        let phase = unit_f32(seed, SALT_PHASE) * TAU;
        let float = |k: f32| ((w * f64::from(k)) as f32 + phase).sin() * cfg.float_amp;
        let x = cfg.center[0]
            + col * cfg.spread[0]
            + signed_unit(seed, SALT_X) * cfg.jitter
            + float(1.0);
        let y = cfg.center[1] + t * cfg.spread[1] + float(1.31);
        let z = cfg.center[2]
            + row * cfg.spread[2]
            + signed_unit(seed, SALT_Z) * cfg.jitter
            + float(0.83);
        out.insert(q.node_id.clone(), [x, y, z]);
    }
    out
}

fn metric_of(q: &Particle, metric: NebulaMetric) -> f64 {
    match metric {
        NebulaMetric::Value => q.value,
        NebulaMetric::Weight => q.weight,
    }
}

/// Linear normalization into [0, 1], clamped at the ends of the assumed
/// range.
fn normalized(m: f64, cfg: &NebulaParams, metric: NebulaMetric) -> f32 {
    match metric {
        NebulaMetric::Value => {
            let [lo, hi] = cfg.value_range;
            if hi <= lo {
                return 0.5;
            }
            (((m - lo) / (hi - lo)).clamp(0.0, 1.0)) as f32
        }
        NebulaMetric::Weight => m.clamp(0.0, 1.0) as f32,
    }
}
