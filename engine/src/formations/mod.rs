//! Formation layouts and the morphs between them.
//!
//! Each calculator is a pure function of (particles, params, time) →
//! position per particle; none mutates its inputs or keeps state between
//! calls, so a call is idempotent per instant. Galaxy and globe carry
//! time-proportional rotation, the nebula a gentle float.

pub mod galaxy;
pub mod globe;
pub mod nebula;
pub mod transition;

use std::collections::HashMap;

/// Named spatial layout a particle set can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formation {
    /// Spiral-galaxy clustering by asset category.
    Galaxy,
    /// Geographic globe.
    Globe,
    /// Free-form metric-ordered cloud.
    Nebula,
    /// Single-instrument detail mode (particles keep the nebula layout;
    /// the renderer overlays the contribution stack).
    Exploded,
}

impl Formation {
    /// Layout shown at a given navigation depth. The root selection shares
    /// the galaxy overview.
    pub fn for_level(level: usize) -> Formation {
        match level {
            0 | 1 => Formation::Galaxy,
            2 => Formation::Globe,
            _ => Formation::Nebula,
        }
    }
}

/// Per-entity world positions keyed by owning node id, recomputed every
/// frame.
pub type PositionMap = HashMap<String, [f32; 3]>;

/// Position for `id`, or the origin when absent. Missing lookups resolve
/// to a safe default rather than an error.
pub fn position_or_origin(map: &PositionMap, id: &str) -> [f32; 3] {
    map.get(id).copied().unwrap_or([0.0, 0.0, 0.0])
}
