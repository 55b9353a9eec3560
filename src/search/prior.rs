//! Click-prior weighting strings built from historical click data.

use std::collections::HashMap;

/// A grouped click-log row for one (query, document) pair.
#[derive(Debug, Clone)]
pub struct ClickGroupRow {
    pub doc_id: String,
    pub clicks: f64,
    pub num_impressions: f64,
}

/// Build a prior expression like `1065813^0.100  8371111^0.089  ` from
/// click/impression ratios.
pub fn prior_from_click_group(rows: &[ClickGroupRow]) -> String {
    let mut prior = String::new();
    for row in rows {
        if row.num_impressions == 0.0 {
            // no impressions recorded, nothing to weight by
            continue;
        }
        prior.push_str(&format!(
            "{}^{:.3}  ",
            row.doc_id,
            row.clicks / row.num_impressions
        ));
    }
    prior
}

/// Build a prior expression from raw click counts. Documents missing from
/// the weight table contribute nothing.
pub fn prior_from_weights(
    doc_ids: &[String],
    doc_id_weights: &HashMap<String, f64>,
    query_times_seen: f64,
) -> String {
    let mut prior = String::new();
    for doc_id in doc_ids {
        let Some(weight) = doc_id_weights.get(doc_id) else {
            continue;
        };
        prior.push_str(&format!("{}^{:.3}  ", doc_id, weight / query_times_seen));
    }
    prior
}
