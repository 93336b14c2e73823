//! Hierarchical navigation state machine.
//!
//! The machine is the source of truth for logical position in the
//! portfolio tree. Descending one level runs a fixed, non-reentrant
//! pipeline of timed phases (`selecting → moving → splitting`), ascending
//! runs a single `collapsing` dwell; structural commands are rejected
//! while any phase other than `idle` is active, so at most one structural
//! transition is ever in flight. Phase advances are polled through
//! [`NavigationStore::tick`] against armed one-shot deadlines; there is no
//! wall-clock dependence and no cancellation of a started sequence.

use crate::config::{PhaseDwell, SpacingRange};
use crate::hierarchy::{children_of, AssetCategory, HierarchyNode};
use crate::timer::OneShot;
use log::debug;
use smallvec::SmallVec;

/// Animation phase of the structural transition pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No transition in flight; commands accepted.
    Idle,
    /// Selection registered, peers visually de-emphasized.
    Selecting,
    /// Selected entity travels toward its breadcrumb slot.
    Moving,
    /// Children emerging from the selected entity.
    Splitting,
    /// Ascending: current level folds back into its parent.
    Collapsing,
}

/// Value vs. contribution display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Show signed return values.
    Value,
    /// Show contribution weights.
    Contribution,
}

/// One settled breadcrumb entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    /// Selected node id.
    pub node_id: String,
    /// Level the node was selected at.
    pub level: usize,
    /// Category tag carried for downstream formation filters.
    pub category: Option<AssetCategory>,
    /// Region tag carried for downstream formation filters.
    pub region: Option<String>,
}

/// Snapshot of the navigation machine.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    /// 0-based depth; 0 is the root selection.
    pub current_level: usize,
    /// Breadcrumb of selected nodes; length equals `current_level`
    /// whenever the machine is idle.
    pub selection_path: SmallVec<[PathEntry; 4]>,
    /// Sibling set visible at the current level: the children of the last
    /// breadcrumb entry, or the root list when the breadcrumb is empty.
    pub current_nodes: Vec<HierarchyNode>,
    /// Animation phase.
    pub phase: Phase,
    /// Node mid-transition; set exactly when `phase != Idle`.
    pub animating_node_id: Option<String>,
    /// Display mode; legal to change in any phase.
    pub view_mode: ViewMode,
    /// Instrument opened in the exploded contribution view, orthogonal to
    /// depth.
    pub exploded_instrument_id: Option<String>,
    /// Selected contribution component inside the exploded view.
    pub selected_contribution_id: Option<String>,
    /// Vertical spacing of the exploded stack, clamped to the configured
    /// range.
    pub contribution_spacing: f32,
    /// Continuous carousel scroll offset in [0, count-1].
    pub carousel_offset: f32,
    /// Rounded focused index synchronized with the carousel offset.
    pub focused_index: usize,
    /// Hovered node id, if any.
    pub hovered_node_id: Option<String>,
}

/// Tagged-union command surface for UI collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Select a node at the current level (may start a descend).
    Select(String),
    /// Go back to a shallower level; `None` means one level up.
    GoBack(Option<usize>),
    /// Return to the root selection from any phase.
    Reset,
    /// Open the exploded contribution view for an instrument.
    Explode(String),
    /// Close the exploded view.
    Collapse,
    /// Switch the display mode.
    SetViewMode(ViewMode),
    /// Set the exploded-stack spacing (clamped).
    SetContributionSpacing(f32),
    /// Scroll the sibling carousel by a delta.
    ScrollCarousel(f32),
    /// Jump the carousel to an offset (clamped).
    SetCarouselOffset(f32),
    /// Hover a node id, or clear with `None`.
    SetHovered(Option<String>),
    /// Select a contribution component in the exploded view.
    SelectContribution(Option<String>),
}

/// Timed successor fired when a phase dwell elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advance {
    ToMoving,
    ToSplitting,
    CompleteDescend,
    SettleCollapse { to_level: usize },
    SettleExplode,
}

/// Dependency-injected navigation store: owns the hierarchy roots and the
/// current [`NavigationState`], mutated only through its operations.
pub struct NavigationStore {
    roots: Vec<HierarchyNode>,
    state: NavigationState,
    dwell: PhaseDwell,
    spacing: SpacingRange,
    pending: Option<(OneShot, Advance)>,
}

impl NavigationStore {
    /// New store with no hierarchy; call [`Self::initialize`] before use.
    pub fn new(dwell: PhaseDwell, spacing: SpacingRange) -> Self {
        let state = NavigationState {
            current_level: 0,
            selection_path: SmallVec::new(),
            current_nodes: Vec::new(),
            phase: Phase::Idle,
            animating_node_id: None,
            view_mode: ViewMode::Value,
            exploded_instrument_id: None,
            selected_contribution_id: None,
            contribution_spacing: spacing.default,
            carousel_offset: 0.0,
            focused_index: 0,
            hovered_node_id: None,
        };
        Self { roots: Vec::new(), state, dwell, spacing, pending: None }
    }

    /// Reset to level 0 over a new hierarchy. The downstream particle
    /// store must be reseeded from the same roots.
    pub fn initialize(&mut self, roots: Vec<HierarchyNode>) {
        self.pending = None;
        self.state.current_level = 0;
        self.state.selection_path.clear();
        self.state.current_nodes = roots.clone();
        self.state.phase = Phase::Idle;
        self.state.animating_node_id = None;
        self.state.exploded_instrument_id = None;
        self.state.selected_contribution_id = None;
        self.state.contribution_spacing = self.spacing.default;
        self.state.carousel_offset = 0.0;
        self.state.focused_index = 0;
        self.state.hovered_node_id = None;
        self.roots = roots;
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Owned snapshot for the renderer.
    pub fn snapshot(&self) -> NavigationState {
        self.state.clone()
    }

    /// Drive timed phase advances. Call once per frame with a monotonic
    /// clock in milliseconds; a large jump (virtual clocks) fires chained
    /// advances in order within one call.
    pub fn tick(&mut self, now_ms: f64) {
        while let Some((timer, advance)) = self.pending {
            if !timer.due(now_ms) {
                break;
            }
            self.pending = None;
            self.apply_advance(advance, timer.deadline_ms());
        }
    }

    /// Apply one inbound command.
    pub fn apply(&mut self, cmd: Command, now_ms: f64) {
        match cmd {
            Command::Select(id) => {
                self.select_node(&id, now_ms);
            }
            Command::GoBack(to) => {
                self.go_back(to, now_ms);
            }
            Command::Reset => self.reset(),
            Command::Explode(id) => {
                self.explode_instrument(&id, now_ms);
            }
            Command::Collapse => self.collapse_instrument(),
            Command::SetViewMode(mode) => self.set_view_mode(mode),
            Command::SetContributionSpacing(v) => self.set_contribution_spacing(v),
            Command::ScrollCarousel(delta) => self.scroll_carousel(delta),
            Command::SetCarouselOffset(offset) => self.set_carousel_offset(offset),
            Command::SetHovered(id) => self.set_hovered_node(id.as_deref()),
            Command::SelectContribution(id) => self.select_contribution(id.as_deref()),
        }
    }

    /// Select a node in the current sibling set. Leaves are a non-drilling
    /// pick (hover only); nodes with children start the descend sequence.
    /// Returns true when a descend sequence started.
    pub fn select_node(&mut self, node_id: &str, now_ms: f64) -> bool {
        if self.state.phase != Phase::Idle {
            debug!("select_node({node_id}) ignored: phase {:?}", self.state.phase);
            return false;
        }
        let Some(node) = self.state.current_nodes.iter().find(|n| n.id == node_id) else {
            debug!("select_node({node_id}) ignored: not in current siblings");
            return false;
        };
        if node.is_leaf() {
            self.state.hovered_node_id = Some(node.id.clone());
            return false;
        }
        self.state.phase = Phase::Selecting;
        self.state.animating_node_id = Some(node.id.clone());
        self.arm(now_ms, self.dwell.selecting_ms, Advance::ToMoving);
        true
    }

    /// Resolve the splitting phase into the settled next level. Normally
    /// fired by the phase timer; meaningless in any other phase.
    pub fn complete_animation(&mut self) {
        if self.state.phase != Phase::Splitting {
            return;
        }
        self.pending = None;
        self.settle_descend();
    }

    /// Begin ascending. Default target is one level up; targets at or
    /// above the current level (or while not idle, or at the root) are
    /// rejected without state change.
    pub fn go_back(&mut self, to_level: Option<usize>, now_ms: f64) -> bool {
        if self.state.phase != Phase::Idle || self.state.current_level == 0 {
            return false;
        }
        let target = to_level.unwrap_or(self.state.current_level - 1);
        if target >= self.state.current_level {
            debug!("go_back({target}) ignored: at level {}", self.state.current_level);
            return false;
        }
        self.state.phase = Phase::Collapsing;
        self.state.animating_node_id =
            self.state.selection_path.last().map(|e| e.node_id.clone());
        self.arm(now_ms, self.dwell.collapsing_ms, Advance::SettleCollapse { to_level: target });
        true
    }

    /// Return to level 0 with an empty path, from any phase. Always legal;
    /// the display mode survives, the exploded sub-state does not.
    pub fn reset(&mut self) {
        self.pending = None;
        self.state.current_level = 0;
        self.state.selection_path.clear();
        self.state.current_nodes = self.roots.clone();
        self.state.phase = Phase::Idle;
        self.state.animating_node_id = None;
        self.state.exploded_instrument_id = None;
        self.state.selected_contribution_id = None;
        self.state.contribution_spacing = self.spacing.default;
        self.reset_carousel();
    }

    /// Open the exploded contribution view for an instrument in the
    /// current sibling set. Rejected while not idle or when the node has
    /// no contribution children.
    pub fn explode_instrument(&mut self, node_id: &str, now_ms: f64) -> bool {
        if self.state.phase != Phase::Idle {
            return false;
        }
        let Some(node) = self.state.current_nodes.iter().find(|n| n.id == node_id) else {
            return false;
        };
        if node.is_leaf() {
            debug!("explode_instrument({node_id}) ignored: no contribution breakdown");
            return false;
        }
        self.state.exploded_instrument_id = Some(node.id.clone());
        self.state.selected_contribution_id = None;
        self.state.contribution_spacing = self.spacing.default;
        // The exploded entrance briefly occupies `selecting`.
        self.state.phase = Phase::Selecting;
        self.state.animating_node_id = Some(node.id.clone());
        self.arm(now_ms, self.dwell.explode_ms, Advance::SettleExplode);
        true
    }

    /// Close the exploded view and clear its nested selection and spacing
    /// state, unconditionally. Depth and breadcrumb are untouched.
    pub fn collapse_instrument(&mut self) {
        self.state.exploded_instrument_id = None;
        self.state.selected_contribution_id = None;
        self.state.contribution_spacing = self.spacing.default;
        if matches!(self.pending, Some((_, Advance::SettleExplode))) {
            self.pending = None;
            self.state.phase = Phase::Idle;
            self.state.animating_node_id = None;
        }
    }

    /// Select a contribution component inside the exploded view; ids that
    /// are not children of the exploded instrument resolve to no
    /// selection.
    pub fn select_contribution(&mut self, id: Option<&str>) {
        let Some(exploded) = self.state.exploded_instrument_id.as_deref() else {
            return;
        };
        self.state.selected_contribution_id = id
            .and_then(|cid| {
                crate::hierarchy::find_node(&self.roots, exploded)
                    .and_then(|n| n.children.iter().find(|c| c.id == cid))
            })
            .map(|c| c.id.clone());
    }

    /// Clamp and set the exploded-stack spacing. No phase interaction.
    pub fn set_contribution_spacing(&mut self, value: f32) {
        self.state.contribution_spacing = value.clamp(self.spacing.min, self.spacing.max);
    }

    /// Scroll the carousel by a delta; the offset clamps to the sibling
    /// range.
    pub fn scroll_carousel(&mut self, delta: f32) {
        self.set_carousel_offset(self.state.carousel_offset + delta);
    }

    /// Jump the carousel to an offset, clamped to [0, count-1], and keep
    /// the focused index and hovered node in sync.
    pub fn set_carousel_offset(&mut self, offset: f32) {
        let count = self.state.current_nodes.len();
        let clamped = if count == 0 {
            0.0
        } else {
            offset.clamp(0.0, (count - 1) as f32)
        };
        self.state.carousel_offset = clamped;
        self.state.focused_index = clamped.round() as usize;
        self.state.hovered_node_id =
            self.state.current_nodes.get(self.state.focused_index).map(|n| n.id.clone());
    }

    /// Toggle value vs. contribution display. Legal in any phase.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }

    /// Hover a node by id; ids outside the current sibling set resolve to
    /// no hover.
    pub fn set_hovered_node(&mut self, id: Option<&str>) {
        self.state.hovered_node_id = id
            .and_then(|i| self.state.current_nodes.iter().find(|n| n.id == i))
            .map(|n| n.id.clone());
    }

    fn arm(&mut self, now_ms: f64, delay_ms: f64, advance: Advance) {
        self.pending = Some((OneShot::after(now_ms, delay_ms), advance));
    }

    fn apply_advance(&mut self, advance: Advance, fired_at_ms: f64) {
        match advance {
            Advance::ToMoving => {
                self.state.phase = Phase::Moving;
                self.arm(fired_at_ms, self.dwell.moving_ms, Advance::ToSplitting);
            }
            Advance::ToSplitting => {
                self.state.phase = Phase::Splitting;
                self.arm(fired_at_ms, self.dwell.splitting_ms, Advance::CompleteDescend);
            }
            Advance::CompleteDescend => self.settle_descend(),
            Advance::SettleCollapse { to_level } => self.settle_collapse(to_level),
            Advance::SettleExplode => {
                self.state.phase = Phase::Idle;
                self.state.animating_node_id = None;
            }
        }
    }

    fn settle_descend(&mut self) {
        let Some(id) = self.state.animating_node_id.take() else {
            self.state.phase = Phase::Idle;
            return;
        };
        let Some(node) = self.state.current_nodes.iter().find(|n| n.id == id) else {
            // Sibling set changed under us (reset raced the timer); settle
            // back to idle without structural change.
            self.state.phase = Phase::Idle;
            return;
        };
        let entry = PathEntry {
            node_id: node.id.clone(),
            level: self.state.current_level,
            category: node.category,
            region: node.region.clone(),
        };
        let children = node.children.clone();
        debug!("descend: {} -> level {}", entry.node_id, self.state.current_level + 1);
        self.state.selection_path.push(entry);
        self.state.current_level += 1;
        self.state.current_nodes = children;
        self.state.phase = Phase::Idle;
        self.reset_carousel();
    }

    fn settle_collapse(&mut self, to_level: usize) {
        self.state.selection_path.truncate(to_level);
        self.state.current_level = to_level;
        let ids: Vec<String> =
            self.state.selection_path.iter().map(|e| e.node_id.clone()).collect();
        self.state.current_nodes = children_of(&self.roots, &ids)
            .map(<[HierarchyNode]>::to_vec)
            .unwrap_or_else(|| self.roots.clone());
        self.state.phase = Phase::Idle;
        self.state.animating_node_id = None;
        debug!("collapse: settled at level {to_level}");
        self.reset_carousel();
    }

    fn reset_carousel(&mut self) {
        self.state.carousel_offset = 0.0;
        self.state.focused_index = 0;
        self.state.hovered_node_id = None;
    }
}
