//! Query normalization shared by training prep and live classification.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-z0-9]").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Lowercase, collapse non-alphanumeric characters to spaces, collapse
/// repeated whitespace. Idempotent; training-time and inference-time callers
/// must agree on this exact transform.
pub fn normalize_query(query: &str) -> String {
    let lowered = query.to_lowercase();
    let spaced = NON_ALNUM.replace_all(&lowered, " ");
    WHITESPACE.replace_all(&spaced, " ").into_owned()
}
