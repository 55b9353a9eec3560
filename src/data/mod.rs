//! Dataset ingestion and training-data preparation layer.

pub mod labels;
pub mod queries;
pub mod rollup;
pub mod taxonomy;
