use relevance_assistant::nlp::classifier::{
    select_categories, BagOfWordsClassifier, Prediction, QueryClassifier,
};

fn prediction(label: &str, probability: f64) -> Prediction {
    Prediction {
        label: label.to_string(),
        probability,
    }
}

#[test]
fn top_probability_exactly_at_threshold_is_excluded() {
    let predictions = vec![prediction("__label__abcat0101001", 0.5)];
    assert!(select_categories(&predictions, 0.5, false).is_empty());
}

#[test]
fn top_probability_above_threshold_is_accepted_and_stripped() {
    let predictions = vec![prediction("__label__abcat0101001", 0.51)];
    assert_eq!(
        select_categories(&predictions, 0.5, false),
        vec!["abcat0101001".to_string()]
    );
}

#[test]
fn multi_mode_accumulates_until_threshold_exceeded() {
    let predictions = vec![
        prediction("__label__a", 0.4),
        prediction("__label__b", 0.3),
        prediction("__label__c", 0.2),
    ];
    let categories = select_categories(&predictions, 0.6, true);
    assert_eq!(categories, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn multi_mode_returns_everything_when_threshold_unreachable() {
    let predictions = vec![
        prediction("__label__a", 0.4),
        prediction("__label__b", 0.3),
    ];
    let categories = select_categories(&predictions, 2.0, true);
    assert_eq!(categories.len(), 2);
}

#[test]
fn bag_of_words_model_prefers_matching_label() {
    let model = BagOfWordsClassifier::from_lines([
        "__label__tablets ipad case",
        "__label__tablets ipad 2",
        "__label__phones iphone 12",
    ]);
    let predictions = model.predict("ipad", 2);
    assert_eq!(predictions[0].label, "__label__tablets");
    assert!(predictions[0].probability > predictions[1].probability);
    let summed: f64 = predictions.iter().map(|p| p.probability).sum();
    assert!((summed - 1.0).abs() < 1e-9);
}

#[test]
fn lines_without_label_prefix_are_skipped() {
    let model = BagOfWordsClassifier::from_lines(["not a training line", "__label__a widget"]);
    let predictions = model.predict("widget", 10);
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].label, "__label__a");
}
