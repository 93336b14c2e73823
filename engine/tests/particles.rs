use engine::config::ParticleVisuals;
use engine::hierarchy::{
    children_of, collect_instruments, find_node, AssetCategory, HierarchyNode,
};
use engine::particle::particles_from_hierarchy;

fn node(id: &str, value: f64, children: Vec<HierarchyNode>) -> HierarchyNode {
    let mut n = HierarchyNode::new(id, id.to_uppercase(), value);
    n.children = children;
    n
}

fn hierarchy() -> Vec<HierarchyNode> {
    let mut eq = node(
        "eq",
        4.0,
        vec![{
            let mut us = node(
                "us",
                5.0,
                vec![
                    {
                        let mut i = node("aapl", 7.0, vec![node("aapl-px", 5.5, vec![])]);
                        i.weight = Some(0.4);
                        i.lat_lon = Some([37.3, -122.0]);
                        i
                    },
                    {
                        let mut i = node("msft", 6.0, vec![]);
                        i.weight = Some(2.5); // out of range, clamps to 1
                        i
                    },
                ],
            );
            us.region = Some("north-america".into());
            us
        }],
    );
    eq.category = Some(AssetCategory::Equities);

    // Untagged lineage: lands in the alternatives catch-all.
    let alt = node("misc", 0.0, vec![node("other", 0.1, vec![node("gold", 0.9, vec![])])]);
    vec![eq, alt]
}

#[test]
fn instruments_inherit_category_and_region_from_ancestors() {
    let roots = hierarchy();
    let instruments = collect_instruments(&roots);
    assert_eq!(instruments.len(), 3);
    let aapl = instruments.iter().find(|i| i.node.id == "aapl").expect("aapl");
    assert_eq!(aapl.category, AssetCategory::Equities);
    assert_eq!(aapl.region.as_deref(), Some("north-america"));
    let gold = instruments.iter().find(|i| i.node.id == "gold").expect("gold");
    assert_eq!(gold.category, AssetCategory::Alternatives);
    assert_eq!(gold.region, None);
}

#[test]
fn particle_sizes_stay_inside_the_configured_bounds() {
    let visuals = ParticleVisuals { min_size: 0.2, max_size: 1.0 };
    let particles = particles_from_hierarchy(&hierarchy(), &visuals);
    for p in &particles {
        assert!(p.size >= visuals.min_size && p.size <= visuals.max_size, "{}", p.node_id);
        assert!((0.0..=1.0).contains(&p.weight));
    }
    let msft = particles.iter().find(|p| p.node_id == "msft").expect("msft");
    assert_eq!(msft.weight, 1.0);
    assert_eq!(msft.size, visuals.max_size);
    let gold = particles.iter().find(|p| p.node_id == "gold").expect("gold");
    assert_eq!(gold.size, visuals.min_size); // no weight
}

#[test]
fn particle_color_is_deterministic_in_weight_and_category() {
    let visuals = ParticleVisuals::default();
    let roots = hierarchy();
    let a = particles_from_hierarchy(&roots, &visuals);
    let b = particles_from_hierarchy(&roots, &visuals);
    assert_eq!(a, b);
    // Heavier particle of the same category is brighter.
    let aapl = a.iter().find(|p| p.node_id == "aapl").expect("aapl");
    let base = AssetCategory::Equities.base_color();
    assert!(aapl.color[0] <= base[0] && aapl.color[0] > base[0] * 0.59);
}

#[test]
fn particles_copy_node_data_without_aliasing() {
    let particles = particles_from_hierarchy(&hierarchy(), &ParticleVisuals::default());
    let aapl = particles.iter().find(|p| p.node_id == "aapl").expect("aapl");
    assert_eq!(aapl.label, "AAPL");
    assert_eq!(aapl.value, 7.0);
    assert_eq!(aapl.lat_lon, Some([37.3, -122.0]));
}

#[test]
fn tree_lookups_resolve_paths_and_ids() {
    let roots = hierarchy();
    assert!(find_node(&roots, "aapl-px").is_some());
    assert!(find_node(&roots, "missing").is_none());

    let path = vec!["eq".to_owned(), "us".to_owned()];
    let siblings = children_of(&roots, &path).expect("path resolves");
    assert_eq!(siblings.len(), 2);
    assert!(children_of(&roots, &["eq".to_owned(), "nope".to_owned()]).is_none());
    assert_eq!(children_of(&roots, &[]).map(<[HierarchyNode]>::len), Some(2));
}
