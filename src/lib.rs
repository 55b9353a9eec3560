//! Library surface for the relevance-assistant toolkit.

pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod nlp;
pub mod search;
