//! CLI entry-point for one-off query classification.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, nlp, nlp::classifier};

/// Args for the `classify` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Query text to classify.
    pub query: String,
    /// Minimum prediction probability to accept categories.
    #[arg(long, default_value_t = 0.5)]
    pub min_probability: f64,
    /// Accept several categories instead of only the top prediction.
    #[arg(long)]
    pub use_multiple_categories: bool,
    /// Override the classifier model path.
    #[arg(long)]
    pub model: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let model_path = args.model.unwrap_or_else(|| settings.classifier_model.clone());
    let model = classifier::load_model(&model_path).context("loading query classifier")?;
    let categories = nlp::categorize_query(
        model.as_ref(),
        &args.query,
        args.min_probability,
        args.use_multiple_categories,
    );
    if categories.is_empty() {
        println!("no category cleared the probability threshold");
    } else {
        for category in categories {
            println!("{category}");
        }
    }
    Ok(())
}
