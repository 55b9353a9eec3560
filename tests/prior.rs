use std::collections::HashMap;

use relevance_assistant::search::prior::{
    prior_from_click_group, prior_from_weights, ClickGroupRow,
};

#[test]
fn weights_format_as_doc_caret_ratio() {
    let doc_ids = vec![
        "1065813".to_string(),
        "8371111".to_string(),
        "missing".to_string(),
    ];
    let mut weights = HashMap::new();
    weights.insert("1065813".to_string(), 100.0);
    weights.insert("8371111".to_string(), 89.0);

    let prior = prior_from_weights(&doc_ids, &weights, 1000.0);
    assert_eq!(prior, "1065813^0.100  8371111^0.089  ");
}

#[test]
fn missing_weights_contribute_nothing() {
    let doc_ids = vec!["unknown".to_string()];
    let prior = prior_from_weights(&doc_ids, &HashMap::new(), 10.0);
    assert!(prior.is_empty());
}

#[test]
fn click_groups_use_click_through_rate() {
    let rows = vec![
        ClickGroupRow {
            doc_id: "1065813".to_string(),
            clicks: 10.0,
            num_impressions: 100.0,
        },
        ClickGroupRow {
            doc_id: "2222222".to_string(),
            clicks: 5.0,
            num_impressions: 0.0,
        },
    ];
    let prior = prior_from_click_group(&rows);
    assert_eq!(prior, "1065813^0.100  ");
}
