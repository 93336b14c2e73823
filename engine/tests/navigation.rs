use engine::config::{PhaseDwell, SpacingRange};
use engine::hierarchy::{children_of, HierarchyNode};
use engine::navigation::{Command, NavigationStore, Phase};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn node(id: &str, value: f64, children: Vec<HierarchyNode>) -> HierarchyNode {
    let mut n = HierarchyNode::new(id, id.to_uppercase(), value);
    n.children = children;
    n
}

/// Three asset classes; the middle one has four markets.
fn roots() -> Vec<HierarchyNode> {
    vec![
        node("eq", 4.2, vec![node("us", 5.0, vec![node("aapl", 7.1, vec![])])]),
        node(
            "fi",
            1.1,
            vec![
                node("govt", 0.8, vec![]),
                node("corp", 1.4, vec![]),
                node("hy", 2.2, vec![]),
                node("em-debt", -0.6, vec![]),
            ],
        ),
        node("alt", -0.9, vec![]),
    ]
}

fn store() -> NavigationStore {
    let mut s = NavigationStore::new(PhaseDwell::default(), SpacingRange::default());
    s.initialize(roots());
    s
}

/// Run the clock far enough forward that every armed advance fires.
fn settle(s: &mut NavigationStore, from_ms: f64) {
    s.tick(from_ms + 10_000.0);
}

#[test]
fn a_fresh_store_is_idle_with_no_armed_advance() {
    let mut s = NavigationStore::new(PhaseDwell::default(), SpacingRange::default());
    assert_eq!(s.state().phase, Phase::Idle);
    assert_eq!(s.state().current_level, 0);
    assert!(s.state().current_nodes.is_empty());
    // Nothing is armed before the first command, at any clock value.
    s.tick(1_000_000.0);
    assert_eq!(s.state().phase, Phase::Idle);
    assert_eq!(s.state().current_level, 0);
}

#[test]
fn descend_scenario_runs_the_full_phase_pipeline() {
    let mut s = store();
    assert_eq!(s.state().current_nodes.len(), 3);

    assert!(s.select_node("fi", 0.0));
    assert_eq!(s.state().phase, Phase::Selecting);
    assert_eq!(s.state().animating_node_id.as_deref(), Some("fi"));

    // Each phase advances on its own dwell, in order.
    let d = PhaseDwell::default();
    s.tick(d.selecting_ms);
    assert_eq!(s.state().phase, Phase::Moving);
    s.tick(d.selecting_ms + d.moving_ms);
    assert_eq!(s.state().phase, Phase::Splitting);
    s.tick(d.selecting_ms + d.moving_ms + d.splitting_ms);

    assert_eq!(s.state().phase, Phase::Idle);
    assert_eq!(s.state().current_level, 1);
    assert_eq!(s.state().current_nodes.len(), 4);
    assert_eq!(s.state().selection_path.len(), 1);
    assert_eq!(s.state().selection_path[0].node_id, "fi");
    assert_eq!(s.state().selection_path[0].level, 0);
    assert_eq!(s.state().carousel_offset, 0.0);
    assert_eq!(s.state().focused_index, 0);
}

#[test]
fn one_tick_with_a_large_jump_fires_chained_advances() {
    let mut s = store();
    assert!(s.select_node("fi", 0.0));
    settle(&mut s, 0.0);
    assert_eq!(s.state().phase, Phase::Idle);
    assert_eq!(s.state().current_level, 1);
}

#[test]
fn structural_commands_are_rejected_while_animating() {
    let mut s = store();
    assert!(s.select_node("fi", 0.0));
    // A second select, a go_back, and an explode are all no-ops mid-flight.
    assert!(!s.select_node("eq", 10.0));
    assert!(!s.go_back(None, 10.0));
    assert!(!s.explode_instrument("fi", 10.0));
    assert_eq!(s.state().animating_node_id.as_deref(), Some("fi"));
    settle(&mut s, 0.0);
    assert_eq!(s.state().selection_path[0].node_id, "fi");
}

#[test]
fn selecting_a_leaf_is_a_hover_not_a_descend() {
    let mut s = store();
    assert!(!s.select_node("alt", 0.0));
    assert_eq!(s.state().phase, Phase::Idle);
    assert_eq!(s.state().current_level, 0);
    assert_eq!(s.state().hovered_node_id.as_deref(), Some("alt"));
}

#[test]
fn unknown_ids_are_ignored() {
    let mut s = store();
    assert!(!s.select_node("nope", 0.0));
    assert_eq!(s.state().phase, Phase::Idle);
    s.set_hovered_node(Some("nope"));
    assert_eq!(s.state().hovered_node_id, None);
}

#[test]
fn go_back_collapses_one_level_by_default() {
    let mut s = store();
    s.select_node("fi", 0.0);
    settle(&mut s, 0.0);
    assert_eq!(s.state().current_level, 1);

    assert!(s.go_back(None, 20_000.0));
    assert_eq!(s.state().phase, Phase::Collapsing);
    assert_eq!(s.state().animating_node_id.as_deref(), Some("fi"));
    settle(&mut s, 20_000.0);

    assert_eq!(s.state().phase, Phase::Idle);
    assert_eq!(s.state().current_level, 0);
    assert!(s.state().selection_path.is_empty());
    assert_eq!(s.state().current_nodes.len(), 3);
}

#[test]
fn go_back_rejects_the_root_and_invalid_targets() {
    let mut s = store();
    assert!(!s.go_back(None, 0.0));

    s.select_node("eq", 0.0);
    settle(&mut s, 0.0);
    assert_eq!(s.state().current_level, 1);
    // Target at or above the current level is rejected without change.
    assert!(!s.go_back(Some(1), 20_000.0));
    assert!(!s.go_back(Some(5), 20_000.0));
    assert_eq!(s.state().phase, Phase::Idle);
    assert_eq!(s.state().current_level, 1);
}

#[test]
fn go_back_to_an_explicit_level_truncates_the_path() {
    let mut s = store();
    s.select_node("eq", 0.0);
    settle(&mut s, 0.0);
    s.select_node("us", 20_000.0);
    settle(&mut s, 20_000.0);
    assert_eq!(s.state().current_level, 2);

    assert!(s.go_back(Some(0), 40_000.0));
    settle(&mut s, 40_000.0);
    assert_eq!(s.state().current_level, 0);
    assert!(s.state().selection_path.is_empty());
    assert_eq!(s.state().current_nodes.len(), 3);
}

#[test]
fn reset_is_legal_in_any_phase() {
    let mut s = store();
    s.select_node("fi", 0.0);
    assert_eq!(s.state().phase, Phase::Selecting);
    s.reset();
    assert_eq!(s.state().phase, Phase::Idle);
    assert_eq!(s.state().current_level, 0);
    assert!(s.state().selection_path.is_empty());
    assert_eq!(s.state().current_nodes.len(), 3);
    // The canceled timer must not fire later.
    settle(&mut s, 0.0);
    assert_eq!(s.state().current_level, 0);
}

#[test]
fn complete_animation_is_only_meaningful_while_splitting() {
    let mut s = store();
    s.complete_animation();
    assert_eq!(s.state().current_level, 0);

    s.select_node("fi", 0.0);
    s.complete_animation(); // selecting: ignored
    assert_eq!(s.state().phase, Phase::Selecting);

    let d = PhaseDwell::default();
    s.tick(d.selecting_ms + d.moving_ms);
    assert_eq!(s.state().phase, Phase::Splitting);
    // Explicit completion short-circuits the splitting dwell.
    s.complete_animation();
    assert_eq!(s.state().phase, Phase::Idle);
    assert_eq!(s.state().current_level, 1);
    // The stale splitting timer must not fire again.
    settle(&mut s, 0.0);
    assert_eq!(s.state().current_level, 1);
}

#[test]
fn command_dispatch_matches_the_direct_calls() {
    let mut s = store();
    s.apply(Command::Select("fi".into()), 0.0);
    settle(&mut s, 0.0);
    assert_eq!(s.state().current_level, 1);
    s.apply(Command::GoBack(None), 20_000.0);
    settle(&mut s, 20_000.0);
    assert_eq!(s.state().current_level, 0);
    s.apply(Command::SetHovered(Some("eq".into())), 30_000.0);
    assert_eq!(s.state().hovered_node_id.as_deref(), Some("eq"));
}

fn random_tree(rng: &mut StdRng, depth: usize, prefix: String) -> HierarchyNode {
    let mut n = HierarchyNode::new(prefix.clone(), prefix.clone(), rng.gen_range(-8.0..8.0));
    if depth > 0 {
        let kids = rng.gen_range(1..=4);
        for k in 0..kids {
            n.children.push(random_tree(rng, depth - 1, format!("{prefix}-{k}")));
        }
    }
    n
}

#[test]
fn invariants_hold_across_random_walks() {
    let mut rng = StdRng::seed_from_u64(42);
    for trial in 0..20 {
        let roots: Vec<HierarchyNode> =
            (0..3).map(|i| random_tree(&mut rng, 3, format!("t{trial}-r{i}"))).collect();
        let mut s = NavigationStore::new(PhaseDwell::default(), SpacingRange::default());
        s.initialize(roots.clone());
        let mut now = 0.0;
        for _ in 0..40 {
            now += 10_000.0;
            match rng.gen_range(0..4) {
                0 => {
                    let nodes = s.state().current_nodes.clone();
                    if let Some(n) = nodes.get(rng.gen_range(0..nodes.len().max(1))) {
                        let id = n.id.clone();
                        s.select_node(&id, now);
                    }
                }
                1 => {
                    s.go_back(None, now);
                }
                2 => {
                    s.scroll_carousel(rng.gen_range(-3.0..3.0));
                }
                _ => {
                    if rng.gen_bool(0.1) {
                        s.reset();
                    }
                }
            }
            s.tick(now + 9_000.0);

            // Settled invariants.
            let st = s.state();
            assert_eq!(st.phase, Phase::Idle);
            assert_eq!(st.selection_path.len(), st.current_level);
            assert_eq!(st.animating_node_id, None);
            let ids: Vec<String> =
                st.selection_path.iter().map(|e| e.node_id.clone()).collect();
            let expected = children_of(&roots, &ids).expect("path resolves");
            assert_eq!(st.current_nodes, expected);
        }
    }
}
