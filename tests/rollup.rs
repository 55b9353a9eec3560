use indexmap::IndexMap;
use proptest::prelude::*;
use relevance_assistant::data::{
    queries::LabeledQuery, rollup::roll_up_categories, taxonomy::Taxonomy,
};

fn counts(entries: &[(&str, u64)]) -> IndexMap<String, u64> {
    entries
        .iter()
        .map(|(c, n)| (c.to_string(), *n))
        .collect()
}

#[test]
fn sparse_siblings_merge_into_shared_parent() {
    // three levels: root <- parent <- {leaf_a, leaf_b}
    let taxonomy = Taxonomy::from_edges([
        ("parent", "cat00000"),
        ("leaf_a", "parent"),
        ("leaf_b", "parent"),
    ]);
    let counts = counts(&[("leaf_a", 2), ("leaf_b", 2), ("parent", 3)]);

    let rolled = roll_up_categories(&taxonomy, &counts, 5);

    assert_eq!(rolled.replacement("leaf_a"), "parent");
    assert_eq!(rolled.replacement("leaf_b"), "parent");
    assert_eq!(rolled.counts.get("parent"), Some(&7));
    assert_eq!(rolled.total_count(), 7);
}

#[test]
fn category_meeting_minimum_is_untouched() {
    let taxonomy = Taxonomy::from_edges([("parent", "cat00000"), ("leaf", "parent")]);
    let counts = counts(&[("leaf", 10), ("parent", 10)]);

    let rolled = roll_up_categories(&taxonomy, &counts, 5);

    assert_eq!(rolled.replacement("leaf"), "leaf");
    assert_eq!(rolled.counts.get("leaf"), Some(&10));
    assert_eq!(rolled.counts.get("parent"), Some(&10));
}

#[test]
fn zero_count_leaf_is_pruned_but_maps_to_itself() {
    let taxonomy = Taxonomy::from_edges([
        ("parent", "cat00000"),
        ("leaf_a", "parent"),
        ("leaf_empty", "parent"),
    ]);
    let counts = counts(&[("leaf_a", 8), ("parent", 8)]);

    let rolled = roll_up_categories(&taxonomy, &counts, 5);

    // no count entry: the leaf is dropped from the tree without a merge
    assert_eq!(rolled.replacement("leaf_empty"), "leaf_empty");
    assert_eq!(rolled.total_count(), 16);
}

#[test]
fn chains_of_sparse_leaves_converge_upward() {
    // root <- top <- mid <- leaf, every count below the minimum
    let taxonomy = Taxonomy::from_edges([
        ("top", "cat00000"),
        ("mid", "top"),
        ("leaf", "mid"),
    ]);
    let counts = counts(&[("leaf", 1), ("mid", 1), ("top", 1)]);

    let rolled = roll_up_categories(&taxonomy, &counts, 5);

    assert_eq!(rolled.total_count(), 3);
    // everything ends up accumulated on the root
    assert_eq!(rolled.counts.get("cat00000"), Some(&3));
}

#[test]
fn apply_relabels_training_rows() {
    let taxonomy = Taxonomy::from_edges([("parent", "cat00000"), ("leaf", "parent")]);
    let counts = counts(&[("leaf", 2), ("parent", 8)]);
    let rolled = roll_up_categories(&taxonomy, &counts, 5);

    let rows = vec![LabeledQuery {
        category: "leaf".to_string(),
        query: "ipad 2".to_string(),
    }];
    let relabeled = rolled.apply(&rows);
    assert_eq!(relabeled[0].category, "parent");
    assert_eq!(relabeled[0].query, "ipad 2");
}

proptest! {
    #[test]
    fn roll_up_conserves_total_counts(
        parent_picks in proptest::collection::vec(0usize..8, 1..8),
        raw_counts in proptest::collection::vec(0u64..10, 8),
        min_queries in 1u64..6,
    ) {
        let mut edges = Vec::new();
        for (i, pick) in parent_picks.iter().enumerate() {
            let parent = if *pick < i {
                format!("cat{pick}")
            } else {
                "root".to_string()
            };
            edges.push((format!("cat{i}"), parent));
        }
        let taxonomy = Taxonomy::from_edges(edges.clone());
        let counts: IndexMap<String, u64> = edges
            .iter()
            .enumerate()
            .filter(|(i, _)| raw_counts[*i] > 0)
            .map(|(i, (category, _))| (category.clone(), raw_counts[i]))
            .collect();
        let total_before: u64 = counts.values().sum();

        let rolled = roll_up_categories(&taxonomy, &counts, min_queries);

        prop_assert_eq!(rolled.total_count(), total_before);
    }
}
