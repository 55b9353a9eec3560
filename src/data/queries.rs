//! Click-log loading: (category, query) rows from the training CSV.

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::info;

use crate::data::taxonomy::Taxonomy;

/// One labeled training row from the click log.
#[derive(Debug, Clone, Deserialize)]
pub struct LabeledQuery {
    pub category: String,
    pub query: String,
}

/// Load labeled queries, keeping only rows whose category is a non-root
/// member of the taxonomy. Extra CSV columns are ignored.
pub fn load_labeled_queries<P: AsRef<Path>>(
    path: P,
    taxonomy: &Taxonomy,
) -> Result<Vec<LabeledQuery>> {
    let mut reader = csv::Reader::from_path(path.as_ref())
        .with_context(|| format!("opening click log {:?}", path.as_ref()))?;
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in reader.deserialize() {
        let row: LabeledQuery = result.context("reading click log row")?;
        if taxonomy.contains(&row.category) {
            rows.push(row);
        } else {
            skipped += 1;
        }
    }
    info!(
        rows = rows.len(),
        skipped, "loaded labeled queries from click log"
    );
    Ok(rows)
}

/// Count queries per category, in first-seen order.
pub fn count_by_category(rows: &[LabeledQuery]) -> IndexMap<String, u64> {
    let mut counts = IndexMap::new();
    for row in rows {
        *counts.entry(row.category.clone()).or_insert(0) += 1;
    }
    counts
}
