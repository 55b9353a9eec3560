//! Command-line interface wiring for relevance-assistant.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod classify;
pub mod embed;
pub mod label;
pub mod search;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "E-commerce search relevance assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Search(args) => search::run(args, settings).await,
            Commands::Label(args) => label::run(args, settings).await,
            Commands::Classify(args) => classify::run(args, settings).await,
            Commands::Embed(args) => embed::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive product search with query categorization.
    Search(search::Args),
    /// Build rolled-up fastText training data from the click log.
    Label(label::Args),
    /// Classify a single query into product categories.
    Classify(classify::Args),
    /// Encode sample sentences and print the embedding shape.
    Embed(embed::Args),
}
