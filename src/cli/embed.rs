//! CLI entry-point for the sentence-embedding experiment.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, nlp::embeddings};

/// Args for the `embed` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Sentences to encode; defaults to a small demo pair.
    pub sentences: Vec<String>,
}

#[instrument(skip(_settings))]
pub async fn run(args: Args, _settings: Settings) -> Result<()> {
    let sentences = if args.sentences.is_empty() {
        vec![
            "This framework generates embeddings for each input sentence".to_string(),
            "Including this one".to_string(),
        ]
    } else {
        args.sentences
    };

    let shape = embeddings::encode_sentences(&sentences)?;
    println!("sentences:");
    for sentence in &sentences {
        println!("  {sentence}");
    }
    println!(
        "dimensions of embeddings: ({}, {})",
        shape.sentences, shape.dimension
    );
    Ok(())
}
