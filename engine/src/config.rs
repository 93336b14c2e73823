//! Static tunables for formations, transitions, and the navigation machine.
//!
//! Everything here is fixed configuration handed to the stores at
//! construction; nothing is renegotiated at runtime.

use crate::formations::Formation;
use crate::hierarchy::AssetCategory;

/// Geometry of one category's spiral cluster in the galaxy formation.
#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyParams {
    /// Cluster center in world space.
    pub center: [f32; 3],
    /// Maximum spiral radius.
    pub max_radius: f32,
    /// Number of spiral arms (>= 1).
    pub arm_count: u32,
    /// Log-spiral tightness; higher packs more growth toward the rim.
    /// Values near zero degrade gracefully to a linear radius law.
    pub tightness: f32,
    /// Total angular sweep of one arm in radians.
    pub sweep_rad: f32,
    /// Peak angular jitter in radians.
    pub angular_jitter_rad: f32,
    /// Peak radial jitter as a fraction of the local radius.
    pub radial_jitter_frac: f32,
    /// Disc half-thickness for vertical jitter.
    pub half_thickness: f32,
    /// Rotation speed in radians per second.
    pub rotation_rad_per_s: f32,
}

/// The three per-category spiral clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyConfig {
    /// Equities cluster.
    pub equities: GalaxyParams,
    /// Fixed-income cluster.
    pub fixed_income: GalaxyParams,
    /// Alternatives cluster.
    pub alternatives: GalaxyParams,
}

impl GalaxyConfig {
    /// Parameters for one category.
    pub fn for_category(&self, category: AssetCategory) -> &GalaxyParams {
        match category {
            AssetCategory::Equities => &self.equities,
            AssetCategory::FixedIncome => &self.fixed_income,
            AssetCategory::Alternatives => &self.alternatives,
        }
    }
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        let base = GalaxyParams {
            center: [0.0, 0.0, 0.0],
            max_radius: 14.0,
            arm_count: 3,
            tightness: 2.2,
            sweep_rad: 2.5 * std::f32::consts::PI,
            angular_jitter_rad: 0.22,
            radial_jitter_frac: 0.12,
            half_thickness: 0.8,
            rotation_rad_per_s: 0.05,
        };
        Self {
            equities: GalaxyParams { center: [-18.0, 0.0, 0.0], ..base.clone() },
            fixed_income: GalaxyParams {
                center: [18.0, 0.0, 0.0],
                arm_count: 2,
                rotation_rad_per_s: -0.04,
                ..base.clone()
            },
            alternatives: GalaxyParams {
                center: [0.0, 0.0, 22.0],
                max_radius: 10.0,
                rotation_rad_per_s: 0.07,
                ..base
            },
        }
    }
}

/// Globe formation geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeParams {
    /// Sphere radius.
    pub radius: f32,
    /// Rotation about +Y in radians per second.
    pub rotation_rad_per_s: f32,
    /// Angular spread (degrees) applied to entities that fall back to a
    /// region's representative coordinate, so they do not stack exactly.
    pub region_spread_deg: f64,
    /// Representative (lat, lon) per region tag, for entities lacking
    /// their own coordinate.
    pub region_coords: Vec<(String, [f64; 2])>,
}

impl GlobeParams {
    /// Representative coordinate for a region tag, if configured.
    pub fn region_coordinate(&self, region: &str) -> Option<[f64; 2]> {
        self.region_coords.iter().find(|(name, _)| name == region).map(|(_, ll)| *ll)
    }
}

impl Default for GlobeParams {
    fn default() -> Self {
        let region_coords = [
            ("north-america", [45.0, -100.0]),
            ("south-america", [-15.0, -60.0]),
            ("europe", [50.0, 10.0]),
            ("asia", [35.0, 105.0]),
            ("asia-pacific", [10.0, 115.0]),
            ("africa", [2.0, 20.0]),
            ("oceania", [-25.0, 135.0]),
            ("middle-east", [27.0, 45.0]),
        ]
        .into_iter()
        .map(|(n, ll)| (n.to_owned(), ll))
        .collect();
        Self { radius: 12.0, rotation_rad_per_s: 0.08, region_spread_deg: 6.0, region_coords }
    }
}

/// Which metric drives the nebula's vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NebulaMetric {
    /// Signed return value, normalized against the assumed range.
    Value,
    /// Contribution weight in [0, 1].
    Weight,
}

/// Nebula cloud geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct NebulaParams {
    /// Cloud center (bottom of the metric axis).
    pub center: [f32; 3],
    /// Spread per axis: x column pitch, y metric height, z row pitch.
    pub spread: [f32; 3],
    /// Assumed value range for linear normalization of the value metric;
    /// values outside clamp to the ends.
    pub value_range: [f64; 2],
    /// Columns in the index-based horizontal layout.
    pub columns: u32,
    /// Peak jitter on the free axes.
    pub jitter: f32,
    /// Floating-motion amplitude.
    pub float_amp: f32,
    /// Floating-motion speed in radians per second.
    pub float_speed: f32,
}

impl Default for NebulaParams {
    fn default() -> Self {
        Self {
            center: [0.0, -6.0, 0.0],
            spread: [2.6, 12.0, 2.6],
            value_range: [-10.0, 10.0],
            columns: 8,
            jitter: 0.9,
            float_amp: 0.25,
            float_speed: 0.6,
        }
    }
}

/// Cross-formation morph tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionParams {
    /// Duration of the galaxy→globe morph in ms.
    pub galaxy_to_globe_ms: f64,
    /// Duration of the globe→nebula morph in ms.
    pub globe_to_nebula_ms: f64,
    /// Duration of every other formation pair in ms.
    pub default_ms: f64,
    /// Duration of the entrance explosion in ms.
    pub entrance_ms: f64,
    /// Peak arc height added at mid-morph when targeting the globe.
    pub arc_height: f32,
    /// Peak outward spread added at mid-morph when targeting the nebula.
    pub spread_amount: f32,
    /// Radial overshoot fraction for the entrance explosion.
    pub overshoot: f32,
    /// Residual swirl angle (radians) unwound over the entrance explosion.
    pub swirl_rad: f32,
}

impl TransitionParams {
    /// Configured duration for a formation pair.
    pub fn duration_ms(&self, from: Formation, to: Formation) -> f64 {
        match (from, to) {
            (Formation::Galaxy, Formation::Globe) => self.galaxy_to_globe_ms,
            (Formation::Globe, Formation::Nebula) => self.globe_to_nebula_ms,
            _ => self.default_ms,
        }
    }
}

impl Default for TransitionParams {
    fn default() -> Self {
        Self {
            galaxy_to_globe_ms: 1800.0,
            globe_to_nebula_ms: 1500.0,
            default_ms: 1200.0,
            entrance_ms: 2200.0,
            arc_height: 6.0,
            spread_amount: 2.5,
            overshoot: 0.45,
            swirl_rad: 1.1,
        }
    }
}

/// Dwell durations for the navigation machine's timed phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseDwell {
    /// `selecting` dwell (peers de-emphasized) in ms.
    pub selecting_ms: f64,
    /// `moving` dwell (selection travels to its breadcrumb slot) in ms.
    pub moving_ms: f64,
    /// `splitting` dwell (children emerging) in ms.
    pub splitting_ms: f64,
    /// `collapsing` dwell when ascending in ms.
    pub collapsing_ms: f64,
    /// Brief `selecting` occupancy for the exploded-view entrance in ms.
    pub explode_ms: f64,
}

impl Default for PhaseDwell {
    fn default() -> Self {
        Self {
            selecting_ms: 400.0,
            moving_ms: 600.0,
            splitting_ms: 500.0,
            collapsing_ms: 450.0,
            explode_ms: 250.0,
        }
    }
}

/// Bounds for the exploded-stack contribution spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingRange {
    /// Minimum spacing.
    pub min: f32,
    /// Maximum spacing.
    pub max: f32,
    /// Spacing applied when the exploded view opens or resets.
    pub default: f32,
}

impl Default for SpacingRange {
    fn default() -> Self {
        Self { min: 0.5, max: 4.0, default: 1.5 }
    }
}

/// Particle visual derivation bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleVisuals {
    /// Size of a zero-weight particle.
    pub min_size: f32,
    /// Size of a full-weight particle.
    pub max_size: f32,
}

impl Default for ParticleVisuals {
    fn default() -> Self {
        Self { min_size: 0.18, max_size: 0.85 }
    }
}

/// Everything tunable, bundled for injection into the stores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Galaxy formation geometry per category.
    pub galaxy: GalaxyConfig,
    /// Globe formation geometry.
    pub globe: GlobeParams,
    /// Nebula formation geometry.
    pub nebula: NebulaParams,
    /// Cross-formation morph tuning.
    pub transition: TransitionParams,
    /// Navigation phase dwell durations.
    pub dwell: PhaseDwell,
    /// Exploded-stack spacing bounds.
    pub spacing: SpacingRange,
    /// Particle size bounds.
    pub visuals: ParticleVisuals,
}
