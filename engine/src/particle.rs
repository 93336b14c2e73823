//! Render-facing particle projection of instrument-level nodes.

use crate::config::ParticleVisuals;
use crate::hierarchy::{collect_instruments, AssetCategory, HierarchyNode};

/// Transient stand-in for one instrument-level hierarchy node, carrying
/// the minimal data needed for positioning and coloring. Recreated
/// whenever the particle store is (re)seeded; no identity of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Owning hierarchy node id.
    pub node_id: String,
    /// Display label copied from the node.
    pub label: String,
    /// Signed return value.
    pub value: f64,
    /// Contribution weight in [0, 1] (0 when the node carries none).
    pub weight: f64,
    /// Inherited asset category.
    pub category: AssetCategory,
    /// Inherited region tag.
    pub region: Option<String>,
    /// Geographic coordinate, when the node carries one.
    pub lat_lon: Option<[f64; 2]>,
    /// Visual size derived from weight, clamped into configured bounds.
    pub size: f32,
    /// Linear RGB color derived from category and weight.
    pub color: [f32; 3],
}

/// Derive the particle list from a hierarchy root list. Deterministic:
/// identical trees and visuals yield identical particles in identical
/// order.
pub fn particles_from_hierarchy(
    roots: &[HierarchyNode],
    visuals: &ParticleVisuals,
) -> Vec<Particle> {
    collect_instruments(roots)
        .into_iter()
        .map(|inst| {
            let weight = inst.node.weight.unwrap_or(0.0).clamp(0.0, 1.0);
            let w = weight as f32;
            let size = visuals.min_size + (visuals.max_size - visuals.min_size) * w;
            let base = inst.category.base_color();
            // Heavier holdings read brighter.
            let k = 0.6 + 0.4 * w;
            Particle {
                node_id: inst.node.id.clone(),
                label: inst.node.label.clone(),
                value: inst.node.value,
                weight,
                category: inst.category,
                region: inst.region,
                lat_lon: inst.node.lat_lon,
                size,
                color: [base[0] * k, base[1] * k, base[2] * k],
            }
        })
        .collect()
}
