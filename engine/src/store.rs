//! Particle store: owns the particle list, the formation descriptor, and
//! the transition lifecycle.
//!
//! The store derives its particles from the hierarchy once per seed and
//! recomputes positions every frame from pure calculators; all mutations
//! are synchronous whole-value updates on a single owner.

use crate::config::{EngineConfig, NebulaMetric};
use crate::formations::{transition, Formation, PositionMap};
use crate::hierarchy::{AssetCategory, HierarchyNode};
use crate::navigation::{NavigationState, ViewMode};
use crate::particle::{particles_from_hierarchy, Particle};
use log::debug;

/// Snapshot of formation and transition state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationState {
    /// Settled formation.
    pub current: Formation,
    /// Formation being morphed toward; equals `current` when settled.
    pub target: Formation,
    /// Morph progress in [0, 1]; treated as 1 when not transitioning.
    pub transition_progress: f32,
    /// True while a morph is in flight.
    pub is_transitioning: bool,
    /// Active asset-class filter (spiral highlighting).
    pub galaxy_filter: Option<AssetCategory>,
    /// Active region filter; participates in the nebula layout only.
    pub region_filter: Option<String>,
    /// Globe unfold progress in [0, 1].
    pub unfold_progress: f32,
    /// Selected particle id, if any.
    pub selected_particle: Option<String>,
}

impl Default for FormationState {
    fn default() -> Self {
        Self {
            current: Formation::Galaxy,
            target: Formation::Galaxy,
            transition_progress: 1.0,
            is_transitioning: false,
            galaxy_filter: None,
            region_filter: None,
            unfold_progress: 0.0,
            selected_particle: None,
        }
    }
}

/// Dependency-injected particle store.
pub struct ParticleStore {
    cfg: EngineConfig,
    particles: Vec<Particle>,
    state: FormationState,
    metric: NebulaMetric,
    start_positions: PositionMap,
    entrance_origin: Option<[f32; 3]>,
}

impl ParticleStore {
    /// New empty store with the given tunables; seed it from a hierarchy
    /// before asking for positions.
    pub fn new(cfg: EngineConfig) -> Self {
        Self {
            cfg,
            particles: Vec::new(),
            state: FormationState::default(),
            metric: NebulaMetric::Value,
            start_positions: PositionMap::new(),
            entrance_origin: None,
        }
    }

    /// (Re)derive the particle list from a hierarchy root list. Clears any
    /// in-flight morph and selection.
    pub fn seed(&mut self, roots: &[HierarchyNode]) {
        self.particles = particles_from_hierarchy(roots, &self.cfg.visuals);
        self.state = FormationState::default();
        self.start_positions.clear();
        self.entrance_origin = None;
        debug!("seeded {} particles", self.particles.len());
    }

    /// Read-only state snapshot.
    pub fn state(&self) -> &FormationState {
        &self.state
    }

    /// Owned snapshot for the renderer.
    pub fn snapshot(&self) -> FormationState {
        self.state.clone()
    }

    /// Derived particle list.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Configured tunables.
    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Begin the entrance explosion: all particles fly out of `origin`
    /// into the current formation.
    pub fn begin_entrance(&mut self, origin: [f32; 3], _now_s: f64) {
        self.entrance_origin = Some(origin);
        self.state.target = self.state.current;
        self.state.is_transitioning = true;
        self.state.transition_progress = 0.0;
    }

    /// Begin a morph toward `target`, capturing the current frame as the
    /// start positions. No-op when already settled on or morphing toward
    /// `target`.
    pub fn begin_transition(&mut self, target: Formation, now_s: f64) {
        let already = if self.state.is_transitioning {
            self.state.target == target
        } else {
            self.state.current == target
        };
        if already {
            return;
        }
        self.start_positions = self.positions(now_s);
        self.entrance_origin = None;
        debug!("morph {:?} -> {:?}", self.state.current, target);
        self.state.target = target;
        self.state.is_transitioning = true;
        self.state.transition_progress = 0.0;
    }

    /// Set morph progress, clamped to [0, 1]; reaching 1 completes the
    /// morph. Ignored when no morph is in flight.
    pub fn set_transition_progress(&mut self, progress: f32) {
        if !self.state.is_transitioning {
            return;
        }
        self.state.transition_progress = progress.clamp(0.0, 1.0);
        if self.state.transition_progress >= 1.0 {
            self.complete_transition();
        }
    }

    /// Advance morph progress by a frame delta against the configured
    /// duration for the active formation pair (the entrance uses its own).
    pub fn advance_transition(&mut self, dt_ms: f64) {
        if !self.state.is_transitioning {
            return;
        }
        let duration = if self.entrance_origin.is_some() {
            self.cfg.transition.entrance_ms
        } else {
            self.cfg.transition.duration_ms(self.state.current, self.state.target)
        };
        let step = if duration > 0.0 { (dt_ms / duration) as f32 } else { 1.0 };
        self.set_transition_progress(self.state.transition_progress + step);
    }

    /// Settle the morph: the target becomes the current formation.
    pub fn complete_transition(&mut self) {
        self.state.current = self.state.target;
        self.state.is_transitioning = false;
        self.state.transition_progress = 1.0;
        self.entrance_origin = None;
        self.start_positions.clear();
    }

    /// Set or clear the asset-class filter.
    pub fn select_galaxy(&mut self, category: Option<AssetCategory>) {
        self.state.galaxy_filter = category;
    }

    /// Set or clear the region filter.
    pub fn select_region(&mut self, region: Option<String>) {
        self.state.region_filter = region;
    }

    /// Set the globe unfold progress, clamped to [0, 1].
    pub fn set_unfold_progress(&mut self, progress: f32) {
        self.state.unfold_progress = progress.clamp(0.0, 1.0);
    }

    /// Select a particle by id; ids not present in the particle list
    /// resolve to no selection.
    pub fn select_particle(&mut self, id: Option<&str>) {
        self.state.selected_particle = id
            .and_then(|i| self.particles.iter().find(|p| p.node_id == i))
            .map(|p| p.node_id.clone());
    }

    /// Metric driving the nebula's vertical axis.
    pub fn set_metric(&mut self, metric: NebulaMetric) {
        self.metric = metric;
    }

    /// Per-frame positions at `time_s` on the caller's monotonic clock.
    pub fn positions(&self, time_s: f64) -> PositionMap {
        let region = self.state.region_filter.as_deref();
        if self.state.is_transitioning {
            if let Some(origin) = self.entrance_origin {
                return transition::entrance_positions(
                    &self.particles,
                    &self.cfg,
                    self.metric,
                    self.state.target,
                    origin,
                    self.state.transition_progress,
                    time_s,
                );
            }
            return transition::positions(
                &self.particles,
                &self.cfg,
                self.metric,
                &self.start_positions,
                self.state.target,
                region,
                self.state.transition_progress,
                time_s,
            );
        }
        transition::end_positions(
            &self.particles,
            &self.cfg,
            self.metric,
            self.state.current,
            region,
            time_s,
        )
    }

    /// Derive formation, filters, and metric from a navigation snapshot;
    /// begins a morph when the mapped formation changes. The breadcrumb's
    /// asset-class entry becomes the galaxy filter and its market entry
    /// the region filter.
    pub fn sync_to_navigation(&mut self, nav: &NavigationState, now_s: f64) {
        self.metric = match nav.view_mode {
            ViewMode::Value => NebulaMetric::Value,
            ViewMode::Contribution => NebulaMetric::Weight,
        };
        self.state.galaxy_filter = nav.selection_path.first().and_then(|e| e.category);
        self.state.region_filter =
            nav.selection_path.iter().find_map(|e| e.region.clone());
        let formation = if nav.exploded_instrument_id.is_some() {
            Formation::Exploded
        } else {
            Formation::for_level(nav.current_level)
        };
        self.begin_transition(formation, now_s);
    }
}
