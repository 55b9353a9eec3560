//! CLI entry-point for building rolled-up fastText training data.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    data::{
        labels, queries, rollup,
        taxonomy::{Taxonomy, DEFAULT_ROOT_CATEGORY},
    },
    nlp::normalize,
};

/// Args for the `label` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Category taxonomy XML file (defaults to <data dir>/categories.xml).
    #[arg(long)]
    pub categories: Option<PathBuf>,
    /// Click-log CSV with category and query columns
    /// (defaults to <data dir>/train.csv).
    #[arg(long)]
    pub queries: Option<PathBuf>,
    /// File to write the labeled query data to
    /// (defaults to <outputs dir>/labeled_query_data.txt).
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Minimum number of queries per category label.
    #[arg(long, default_value_t = 1)]
    pub min_queries: u64,
    /// Normalize the queries before counting and output.
    #[arg(long)]
    pub normalize: bool,
    /// Id of the taxonomy root category.
    #[arg(long, default_value = DEFAULT_ROOT_CATEGORY)]
    pub root_category: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let categories_path = args
        .categories
        .unwrap_or_else(|| settings.join_data("categories.xml"));
    let queries_path = args
        .queries
        .unwrap_or_else(|| settings.join_data("train.csv"));
    let output_path = args
        .output
        .unwrap_or_else(|| settings.join_output("labeled_query_data.txt"));

    let taxonomy = Taxonomy::from_xml_file(&categories_path, &args.root_category)?;
    let mut rows = queries::load_labeled_queries(&queries_path, &taxonomy)?;

    if args.normalize {
        info!("normalizing queries");
        for row in &mut rows {
            row.query = normalize::normalize_query(&row.query);
        }
    }

    let counts = queries::count_by_category(&rows);
    let rolled = rollup::roll_up_categories(&taxonomy, &counts, args.min_queries);
    info!(
        min_queries = args.min_queries,
        surviving = rolled.counts.len(),
        "applied category roll-up"
    );

    let relabeled = rolled.apply(&rows);
    let written = labels::write_training_file(&output_path, &relabeled, &taxonomy)?;
    info!(
        path = %output_path.display(),
        lines = written,
        "labeled query data ready"
    );
    Ok(())
}
