//! Runtime configuration utilities for relevance-assistant.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// OpenSearch host name.
    pub opensearch_host: String,
    /// OpenSearch port.
    pub opensearch_port: u16,
    /// Default index holding the product catalog.
    pub opensearch_index: String,
    /// Basic-auth user for the search backend.
    pub opensearch_user: String,
    /// Basic-auth password for the search backend.
    pub opensearch_password: String,
    /// Verify TLS certificates when talking to the backend.
    pub verify_certs: bool,
    /// Root folder for datasets (taxonomy XML, click logs).
    pub data_dir: PathBuf,
    /// Root folder for generated artefacts (labeled query files).
    pub outputs_dir: PathBuf,
    /// Path to the query classifier model file.
    pub classifier_model: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let opensearch_host =
            env::var("OPENSEARCH_HOST").unwrap_or_else(|_| "localhost".to_string());
        let opensearch_port = env::var("OPENSEARCH_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(9200);
        let opensearch_index =
            env::var("OPENSEARCH_INDEX").unwrap_or_else(|_| "bbuy_products".to_string());
        // Default admin/admin mirrors a local dev cluster; override in .env.
        let opensearch_user = env::var("OPENSEARCH_USER").unwrap_or_else(|_| "admin".to_string());
        let opensearch_password =
            env::var("OPENSEARCH_PASSWORD").unwrap_or_else(|_| "admin".to_string());
        let verify_certs = env::var("OPENSEARCH_VERIFY_CERTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));
        let classifier_model = env::var("CLASSIFIER_MODEL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("labeled_query_data.txt"));

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;
        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            opensearch_host,
            opensearch_port,
            opensearch_index,
            opensearch_user,
            opensearch_password,
            verify_certs,
            data_dir,
            outputs_dir,
            classifier_model,
        })
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}
