use proptest::prelude::*;
use relevance_assistant::nlp::normalize::normalize_query;

#[test]
fn lowercases_and_collapses_punctuation() {
    assert_eq!(normalize_query("iPad 2"), "ipad 2");
    assert_eq!(normalize_query("Beats by Dr. Dre"), "beats by dr dre");
    assert_eq!(normalize_query("wi-fi  router"), "wi fi router");
}

#[test]
fn already_normalized_input_is_unchanged() {
    let normalized = normalize_query("hp touchpad 32gb");
    assert_eq!(normalize_query(&normalized), normalized);
}

proptest! {
    #[test]
    fn normalization_is_idempotent(query in ".{0,64}") {
        let once = normalize_query(&query);
        let twice = normalize_query(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_is_lowercase_alphanumeric_and_spaces(query in ".{0,64}") {
        let normalized = normalize_query(&query);
        prop_assert!(normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
        prop_assert!(!normalized.contains("  "));
    }
}
