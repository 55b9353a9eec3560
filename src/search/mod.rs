//! Search orchestration: classify, build the query body, count, search, print.

pub mod client;
pub mod prior;
pub mod query;

use anyhow::Result;
use tracing::debug;

use crate::nlp::{self, classifier::QueryClassifier};
use self::client::SearchClient;
use self::query::SearchQueryBuilder;

/// Per-session knobs for the interactive search loop.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub index: String,
    pub sort: String,
    pub sort_dir: String,
    pub min_categories_probability: f64,
    pub use_multiple_categories: bool,
}

/// Run one user query end to end and print the ranked hits.
pub async fn run_query(
    client: &SearchClient,
    model: &dyn QueryClassifier,
    user_query: &str,
    options: &SearchOptions,
) -> Result<()> {
    let categories = nlp::categorize_query(
        model,
        user_query,
        options.min_categories_probability,
        options.use_multiple_categories,
    );

    let body = SearchQueryBuilder::new(user_query)
        .sort(&options.sort, &options.sort_dir)
        .source(&["name", "shortDescription", "categoryPathIds"])
        .categories(&categories)
        .build();
    debug!(%body, "search request body");

    let total = client.count(&options.index, &query::count_body(&body)).await?;
    println!("total results: {total}");

    let response = client.search(&options.index, &body).await?;
    let hits = response.hits.hits;
    println!("showing: {} results", hits.len());
    for (rank, hit) in hits.iter().enumerate() {
        let name = hit.source.name.first().map(String::as_str).unwrap_or("");
        println!(
            "{}. id: {}, name: '{}', categories: {:?}",
            rank + 1,
            hit.id,
            name,
            hit.source.category_path_ids
        );
    }
    Ok(())
}
