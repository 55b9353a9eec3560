//! Query-to-category classification behind a narrow trait.
//!
//! The bundled implementation is a lightweight bag-of-words model trained
//! from the labeled-query file the `label` command produces. Swap with
//! fastText bindings when a pretrained binary model is available.

use std::{
    collections::HashMap,
    io::{BufRead, BufReader},
    path::Path,
    sync::Arc,
};

use anyhow::{Context, Result};
use tracing::info;

use crate::data::labels::{strip_label, LABEL_PREFIX};

/// One ranked label from the classifier, probability in [0, 1].
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Raw label token, `__label__` prefix included.
    pub label: String,
    pub probability: f64,
}

/// Trait for query classifiers. Labels come back with the fastText prefix
/// intact, ordered by descending probability.
pub trait QueryClassifier: Send + Sync {
    fn predict(&self, text: &str, k: usize) -> Vec<Prediction>;
}

/// Pick categories from ranked predictions, stripping the label prefix.
///
/// Single-label mode takes the top prediction only when its probability is
/// strictly above `min_probability`. Multi-label mode accepts labels
/// cumulatively until their summed probability strictly exceeds it.
pub fn select_categories(
    predictions: &[Prediction],
    min_probability: f64,
    use_multiple: bool,
) -> Vec<String> {
    if use_multiple {
        let mut summed = 0.0;
        let mut categories = Vec::new();
        for prediction in predictions.iter().take(10) {
            categories.push(strip_label(&prediction.label).to_string());
            summed += prediction.probability;
            if summed > min_probability {
                break;
            }
        }
        categories
    } else {
        match predictions.first() {
            Some(top) if top.probability > min_probability => {
                vec![strip_label(&top.label).to_string()]
            }
            _ => Vec::new(),
        }
    }
}

/// Load the bag-of-words classifier from a fastText-format training file.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Arc<dyn QueryClassifier>> {
    let model = BagOfWordsClassifier::from_training_file(path)?;
    Ok(Arc::new(model) as Arc<dyn QueryClassifier>)
}

/// Multinomial Naive Bayes over query unigrams with add-one smoothing.
pub struct BagOfWordsClassifier {
    label_docs: HashMap<String, u64>,
    token_counts: HashMap<String, HashMap<String, u64>>,
    label_tokens: HashMap<String, u64>,
    total_docs: u64,
    vocab_size: usize,
}

impl BagOfWordsClassifier {
    /// Train from `__label__<category> <query>` lines.
    pub fn from_training_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .with_context(|| format!("opening classifier model {:?}", path.as_ref()))?;
        let mut model = Self::empty();
        for line in BufReader::new(file).lines() {
            let line = line.context("reading classifier model line")?;
            model.observe_line(&line);
        }
        info!(
            labels = model.label_docs.len(),
            documents = model.total_docs,
            vocabulary = model.vocab_size,
            "loaded query classifier"
        );
        Ok(model)
    }

    /// Train from in-memory training lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut model = Self::empty();
        for line in lines {
            model.observe_line(line.as_ref());
        }
        model
    }

    fn empty() -> Self {
        Self {
            label_docs: HashMap::new(),
            token_counts: HashMap::new(),
            label_tokens: HashMap::new(),
            total_docs: 0,
            vocab_size: 0,
        }
    }

    fn observe_line(&mut self, line: &str) {
        let Some((label, text)) = line.split_once(' ') else {
            return;
        };
        if !label.starts_with(LABEL_PREFIX) {
            return;
        }
        *self.label_docs.entry(label.to_string()).or_insert(0) += 1;
        self.total_docs += 1;
        let counts = self.token_counts.entry(label.to_string()).or_default();
        let mut new_tokens = 0usize;
        for token in text.split_whitespace() {
            let entry = counts.entry(token.to_string()).or_insert(0);
            if *entry == 0 {
                new_tokens += 1;
            }
            *entry += 1;
            *self.label_tokens.entry(label.to_string()).or_insert(0) += 1;
        }
        // vocabulary counted per label, not deduplicated globally
        self.vocab_size += new_tokens;
    }

    fn log_score(&self, label: &str, tokens: &[&str]) -> f64 {
        let docs = self.label_docs.get(label).copied().unwrap_or(0) as f64;
        let prior = (docs / self.total_docs.max(1) as f64).max(f64::MIN_POSITIVE);
        let label_total = self.label_tokens.get(label).copied().unwrap_or(0) as f64;
        let denominator = label_total + self.vocab_size.max(1) as f64;
        let counts = self.token_counts.get(label);
        let mut score = prior.ln();
        for token in tokens {
            let count = counts
                .and_then(|c| c.get(*token))
                .copied()
                .unwrap_or(0) as f64;
            score += ((count + 1.0) / denominator).ln();
        }
        score
    }
}

impl QueryClassifier for BagOfWordsClassifier {
    fn predict(&self, text: &str, k: usize) -> Vec<Prediction> {
        if self.total_docs == 0 {
            return Vec::new();
        }
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut scored: Vec<(String, f64)> = self
            .label_docs
            .keys()
            .map(|label| (label.clone(), self.log_score(label, &tokens)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        // Softmax over log scores, shifted by the maximum for stability.
        let max_score = scored.first().map(|(_, s)| *s).unwrap_or(0.0);
        let weights: Vec<f64> = scored.iter().map(|(_, s)| (s - max_score).exp()).collect();
        let total: f64 = weights.iter().sum();

        scored
            .into_iter()
            .zip(weights)
            .take(k)
            .map(|((label, _), weight)| Prediction {
                label,
                probability: weight / total,
            })
            .collect()
    }
}
