//! Immutable portfolio hierarchy: nodes, breadcrumb resolution, and
//! instrument collection.
//!
//! Trees are built once by an external data source and never mutated by
//! the engine; stores hold their own clones of the slices they display.

use std::collections::HashMap;

/// Top-level asset grouping used for spiral clustering and coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Listed equity instruments.
    Equities,
    /// Bonds and other fixed-income instruments.
    FixedIncome,
    /// Everything else (real assets, private markets, commodities).
    Alternatives,
}

impl AssetCategory {
    /// All categories in display order.
    pub fn all() -> [AssetCategory; 3] {
        [AssetCategory::Equities, AssetCategory::FixedIncome, AssetCategory::Alternatives]
    }

    /// Base display color (linear RGB).
    pub fn base_color(self) -> [f32; 3] {
        match self {
            AssetCategory::Equities => [0.35, 0.78, 0.95],
            AssetCategory::FixedIncome => [0.95, 0.72, 0.30],
            AssetCategory::Alternatives => [0.72, 0.45, 0.92],
        }
    }
}

/// One level of the portfolio tree (asset class, market, instrument, or
/// contribution component).
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    /// Stable identifier, unique within the tree.
    pub id: String,
    /// Full display label.
    pub label: String,
    /// Short label for breadcrumbs and dense layouts.
    pub short_label: String,
    /// Signed return/percentage value. Finite, possibly negative.
    pub value: f64,
    /// Contribution/size weight in [0, 1], when known.
    pub weight: Option<f64>,
    /// Child nodes; empty marks a leaf.
    pub children: Vec<HierarchyNode>,
    /// Geographic region tag, when known.
    pub region: Option<String>,
    /// (latitude, longitude) in degrees, when known.
    pub lat_lon: Option<[f64; 2]>,
    /// Asset category tag (usually set at asset-class depth and inherited
    /// by descendants).
    pub category: Option<AssetCategory>,
    /// Free-form metadata consumed only by leaf detail display.
    pub metadata: Option<HashMap<String, String>>,
}

impl HierarchyNode {
    /// Minimal constructor; optional fields start empty and the short
    /// label mirrors the full label.
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: f64) -> Self {
        let label = label.into();
        Self {
            id: id.into(),
            short_label: label.clone(),
            label,
            value,
            weight: None,
            children: Vec::new(),
            region: None,
            lat_lon: None,
            category: None,
            metadata: None,
        }
    }

    /// True when the node has no children. A node with children is never
    /// a leaf for navigation purposes.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first search for `id` in this subtree.
    pub fn find(&self, id: &str) -> Option<&HierarchyNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}

/// Depth-first search for `id` across a root list.
pub fn find_node<'a>(roots: &'a [HierarchyNode], id: &str) -> Option<&'a HierarchyNode> {
    roots.iter().find_map(|n| n.find(id))
}

/// Resolve a breadcrumb (list of node ids, outermost first) to the sibling
/// set visible below it. Returns `None` when any path segment is missing.
pub fn children_of<'a>(
    roots: &'a [HierarchyNode],
    path: &[String],
) -> Option<&'a [HierarchyNode]> {
    let mut cur = roots;
    for id in path {
        let node = cur.iter().find(|n| &n.id == id)?;
        cur = &node.children;
    }
    Some(cur)
}

/// Depth (relative to the root list) at which instruments live: roots are
/// asset classes (0), markets (1), instruments (2), contributions (3).
pub const INSTRUMENT_DEPTH: usize = 2;

/// An instrument-level node paired with tags inherited from its ancestors.
#[derive(Debug, Clone)]
pub struct InstrumentRef<'a> {
    /// The instrument-level node.
    pub node: &'a HierarchyNode,
    /// The node's own category tag, or the nearest tagged ancestor's.
    /// Untagged lineages land in the alternatives catch-all.
    pub category: AssetCategory,
    /// The node's own region tag, or the nearest tagged ancestor's.
    pub region: Option<String>,
}

/// Collect every instrument-depth node in the tree, with inherited tags,
/// in depth-first order.
pub fn collect_instruments(roots: &[HierarchyNode]) -> Vec<InstrumentRef<'_>> {
    let mut out = Vec::new();
    for root in roots {
        walk(root, 0, None, None, &mut out);
    }
    out
}

fn walk<'a>(
    node: &'a HierarchyNode,
    depth: usize,
    inherited_category: Option<AssetCategory>,
    inherited_region: Option<&'a str>,
    out: &mut Vec<InstrumentRef<'a>>,
) {
    let category = node.category.or(inherited_category);
    let region = node.region.as_deref().or(inherited_region);
    if depth == INSTRUMENT_DEPTH {
        out.push(InstrumentRef {
            node,
            category: category.unwrap_or(AssetCategory::Alternatives),
            region: region.map(str::to_owned),
        });
        return;
    }
    for child in &node.children {
        walk(child, depth + 1, category, region, out);
    }
}
