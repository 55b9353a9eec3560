//! Query understanding layer: normalization, classification, embeddings.

pub mod classifier;
pub mod embeddings;
pub mod normalize;

use tracing::info;

use self::classifier::QueryClassifier;

/// Normalize a user query and classify it into product categories.
///
/// Returns the ordered category ids accepted by the probability threshold;
/// empty when nothing clears it.
pub fn categorize_query(
    model: &dyn QueryClassifier,
    user_query: &str,
    min_probability: f64,
    use_multiple: bool,
) -> Vec<String> {
    let normalized = normalize::normalize_query(user_query);
    let k = if use_multiple { 10 } else { 1 };
    let predictions = model.predict(&normalized, k);
    let summed: f64 = predictions.iter().map(|p| p.probability).sum();
    let categories = classifier::select_categories(&predictions, min_probability, use_multiple);
    info!(
        user_query,
        normalized = %normalized,
        ?categories,
        summed_probability = summed,
        min_probability,
        "categorized query"
    );
    categories
}
