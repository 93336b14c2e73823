//! Fixed named camera targets suggested to the renderer's rig.
//!
//! These are lookup entries, not computed geometry: the renderer tweens
//! toward whichever named pose the current view keys to.

use crate::formations::Formation;
use crate::navigation::ViewMode;

/// A named camera pose suggestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    /// Stable name for the renderer's tween table.
    pub name: &'static str,
    /// Eye position.
    pub position: [f32; 3],
    /// Look-at point.
    pub look_at: [f32; 3],
}

/// Wide framing of all three spiral clusters.
pub const OVERVIEW: CameraTarget =
    CameraTarget { name: "overview", position: [0.0, 28.0, 52.0], look_at: [0.0, 0.0, 6.0] };

/// Close framing of the active spiral cluster.
pub const GALAXY: CameraTarget =
    CameraTarget { name: "galaxy", position: [0.0, 16.0, 34.0], look_at: [0.0, 0.0, 0.0] };

/// Globe framing with room for the unfolded map.
pub const GLOBE: CameraTarget =
    CameraTarget { name: "globe", position: [0.0, 8.0, 30.0], look_at: [0.0, 0.0, 0.0] };

/// Side-on framing of the metric-ordered cloud.
pub const NEBULA: CameraTarget =
    CameraTarget { name: "nebula", position: [0.0, 2.0, 24.0], look_at: [0.0, 0.0, 0.0] };

/// Near framing of one exploded instrument stack.
pub const EXPLODED: CameraTarget =
    CameraTarget { name: "exploded", position: [0.0, 1.0, 12.0], look_at: [0.0, 0.0, 0.0] };

/// Nebula framing tilted for contribution bars.
pub const CONTRIBUTION: CameraTarget =
    CameraTarget { name: "contribution", position: [6.0, 6.0, 22.0], look_at: [0.0, 0.0, 0.0] };

/// Suggest a camera target for the current view, keyed by (level, display
/// mode, exploded id, formation).
pub fn camera_target(
    level: usize,
    view_mode: ViewMode,
    exploded: Option<&str>,
    formation: Formation,
) -> &'static CameraTarget {
    if exploded.is_some() {
        return &EXPLODED;
    }
    match formation {
        Formation::Galaxy => {
            if level == 0 {
                &OVERVIEW
            } else {
                &GALAXY
            }
        }
        Formation::Globe => &GLOBE,
        Formation::Nebula => match view_mode {
            ViewMode::Value => &NEBULA,
            ViewMode::Contribution => &CONTRIBUTION,
        },
        Formation::Exploded => &EXPLODED,
    }
}
