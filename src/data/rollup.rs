//! Greedy roll-up of sparse categories into their ancestors.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::data::{queries::LabeledQuery, taxonomy::Taxonomy};

/// Result of rolling up a taxonomy against per-category query counts.
#[derive(Debug, Clone)]
pub struct RollUp {
    /// Original category → rolled-up ancestor. Identity when no merge applied.
    pub replacements: IndexMap<String, String>,
    /// Query counts of the surviving categories.
    pub counts: IndexMap<String, u64>,
}

impl RollUp {
    /// Rolled-up ancestor of a category; the category itself when untouched.
    pub fn replacement<'a>(&'a self, category: &'a str) -> &'a str {
        self.replacements
            .get(category)
            .map(String::as_str)
            .unwrap_or(category)
    }

    /// Relabel training rows with their rolled-up categories.
    pub fn apply(&self, rows: &[LabeledQuery]) -> Vec<LabeledQuery> {
        rows.iter()
            .map(|row| LabeledQuery {
                category: self.replacement(&row.category).to_string(),
                query: row.query.clone(),
            })
            .collect()
    }

    /// Sum of all surviving category counts.
    pub fn total_count(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Merge leaf categories upward until every surviving category either meets
/// `min_queries` or cannot be merged further.
///
/// A leaf qualifies for merging when its own count is below `min_queries`,
/// or when its final replacement ancestor has a nonzero count still below
/// `min_queries`. Merging deletes the leaf, adds its count onto the final
/// ancestor, and repoints every replacement targeting the leaf at the leaf's
/// immediate parent. Counts for categories absent from the table are zero.
/// Each pass removes at most one leaf, so the loop is bounded by the
/// taxonomy size.
pub fn roll_up_categories(
    taxonomy: &Taxonomy,
    counts: &IndexMap<String, u64>,
    min_queries: u64,
) -> RollUp {
    let mut replacements: IndexMap<String, String> = taxonomy
        .parents()
        .keys()
        .map(|c| (c.clone(), c.clone()))
        .collect();
    let mut counts = counts.clone();
    let mut parents = taxonomy.parents().clone();
    let original_categories = counts.len();

    loop {
        let candidate = find_merge_candidate(&parents, &replacements, &counts, min_queries);
        let Some(merge) = candidate else {
            break;
        };
        debug!(
            category = %merge.category,
            parent = %merge.parent,
            ancestor = %merge.final_parent,
            count = merge.own_count,
            ancestor_count = merge.final_parent_count,
            "rolling up leaf category"
        );
        parents.shift_remove(&merge.category);
        if counts.contains_key(&merge.category) {
            counts.insert(
                merge.final_parent.clone(),
                merge.final_parent_count + merge.own_count,
            );
            for target in replacements.values_mut() {
                if *target == merge.category {
                    *target = merge.parent.clone();
                }
            }
            counts.shift_remove(&merge.category);
        }
    }

    info!(
        before = original_categories,
        after = counts.len(),
        "roll up completed"
    );
    RollUp {
        replacements,
        counts,
    }
}

struct MergeCandidate {
    category: String,
    parent: String,
    final_parent: String,
    own_count: u64,
    final_parent_count: u64,
}

/// First leaf (a category no other category points to as parent) that
/// qualifies for merging, scanning in insertion order.
fn find_merge_candidate(
    parents: &IndexMap<String, String>,
    replacements: &IndexMap<String, String>,
    counts: &IndexMap<String, u64>,
    min_queries: u64,
) -> Option<MergeCandidate> {
    let interior: HashSet<&String> = parents.values().collect();
    for (category, parent) in parents {
        if interior.contains(category) {
            continue;
        }
        let final_parent = match replacements.get(parent) {
            Some(replacement) if replacement != parent => replacement.clone(),
            _ => parent.clone(),
        };
        let own_count = counts.get(category).copied().unwrap_or(0);
        let final_parent_count = counts.get(&final_parent).copied().unwrap_or(0);
        if own_count < min_queries
            || (final_parent_count > 0 && final_parent_count < min_queries)
        {
            return Some(MergeCandidate {
                category: category.clone(),
                parent: parent.clone(),
                final_parent,
                own_count,
                final_parent_count,
            });
        }
    }
    None
}
