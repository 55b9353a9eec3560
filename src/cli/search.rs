//! CLI entry-point for the interactive search loop.

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    nlp::classifier,
    search::{self, client::SearchClient, SearchOptions},
};

const QUERY_PROMPT: &str = "\nEnter your query (type 'exit' to quit or hit ctrl-c):";

/// Args for the `search` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Name of the main index to search.
    #[arg(short = 'i', long)]
    pub index: Option<String>,
    /// OpenSearch host name.
    #[arg(short = 's', long)]
    pub host: Option<String>,
    /// OpenSearch port.
    #[arg(short = 'p', long)]
    pub port: Option<u16>,
    /// OpenSearch user; password comes from OPENSEARCH_PASSWORD.
    #[arg(long)]
    pub user: Option<String>,
    /// Minimum summed prediction probability the used query categories
    /// must strictly exceed. The default of 1.0 disables category filtering
    /// in single-category mode.
    #[arg(long, default_value_t = 1.0)]
    pub min_categories_probability: f64,
    /// Accept several categories instead of only the top prediction.
    #[arg(long)]
    pub use_multiple_categories: bool,
    /// Sort field.
    #[arg(long, default_value = "_score")]
    pub sort: String,
    /// Sort direction.
    #[arg(long, default_value = "desc")]
    pub sort_dir: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let host = args.host.unwrap_or_else(|| settings.opensearch_host.clone());
    let port = args.port.unwrap_or(settings.opensearch_port);
    let index = args
        .index
        .unwrap_or_else(|| settings.opensearch_index.clone());
    let user = args.user.unwrap_or_else(|| settings.opensearch_user.clone());

    let model = classifier::load_model(&settings.classifier_model)
        .context("loading query classifier")?;
    let client = SearchClient::new(
        &host,
        port,
        &user,
        &settings.opensearch_password,
        settings.verify_certs,
    )?;
    let options = SearchOptions {
        index,
        sort: args.sort,
        sort_dir: args.sort_dir,
        min_categories_probability: args.min_categories_probability,
        use_multiple_categories: args.use_multiple_categories,
    };

    // One line, one query, one request in flight.
    println!("{QUERY_PROMPT}");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading query from stdin")?;
        let user_query = line.trim_end();
        if user_query.eq_ignore_ascii_case("exit") {
            break;
        }
        if user_query.is_empty() {
            println!("{QUERY_PROMPT}");
            continue;
        }
        search::run_query(&client, model.as_ref(), user_query, &options).await?;
        println!("{QUERY_PROMPT}");
    }
    Ok(())
}
