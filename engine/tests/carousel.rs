use engine::config::{PhaseDwell, SpacingRange};
use engine::hierarchy::HierarchyNode;
use engine::navigation::NavigationStore;

fn roots(n: usize) -> Vec<HierarchyNode> {
    (0..n).map(|i| HierarchyNode::new(format!("n{i}"), format!("Node {i}"), 0.0)).collect()
}

fn store(n: usize) -> NavigationStore {
    let mut s = NavigationStore::new(PhaseDwell::default(), SpacingRange::default());
    s.initialize(roots(n));
    s
}

#[test]
fn offset_clamps_to_the_sibling_range() {
    let mut s = store(6);
    s.set_carousel_offset(-3.5);
    assert_eq!(s.state().carousel_offset, 0.0);
    s.set_carousel_offset(99.0);
    assert_eq!(s.state().carousel_offset, 5.0);
    s.set_carousel_offset(2.4);
    assert_eq!(s.state().carousel_offset, 2.4);
}

#[test]
fn focused_index_and_hover_follow_the_offset() {
    let mut s = store(6);
    s.set_carousel_offset(2.4);
    assert_eq!(s.state().focused_index, 2);
    assert_eq!(s.state().hovered_node_id.as_deref(), Some("n2"));
    s.set_carousel_offset(2.6);
    assert_eq!(s.state().focused_index, 3);
    assert_eq!(s.state().hovered_node_id.as_deref(), Some("n3"));
}

#[test]
fn scrolling_accumulates_and_clamps() {
    let mut s = store(4);
    s.scroll_carousel(1.25);
    s.scroll_carousel(1.25);
    assert_eq!(s.state().carousel_offset, 2.5);
    s.scroll_carousel(10.0);
    assert_eq!(s.state().carousel_offset, 3.0);
    s.scroll_carousel(-100.0);
    assert_eq!(s.state().carousel_offset, 0.0);
}

#[test]
fn empty_sibling_sets_pin_the_carousel_at_zero() {
    let mut s = store(0);
    s.scroll_carousel(5.0);
    assert_eq!(s.state().carousel_offset, 0.0);
    assert_eq!(s.state().focused_index, 0);
    assert_eq!(s.state().hovered_node_id, None);
}

#[test]
fn spacing_clamps_to_the_configured_range() {
    let spacing = SpacingRange::default();
    let mut s = store(3);
    s.set_contribution_spacing(-5.0);
    assert_eq!(s.state().contribution_spacing, spacing.min);
    s.set_contribution_spacing(999.0);
    assert_eq!(s.state().contribution_spacing, spacing.max);
    s.set_contribution_spacing(2.0);
    assert_eq!(s.state().contribution_spacing, 2.0);
}
