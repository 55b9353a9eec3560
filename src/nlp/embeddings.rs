//! Sentence-embedding experiment built on fastembed.

use anyhow::Result;

#[cfg(feature = "embeddings")]
use fastembed::TextEmbedding;
#[cfg(not(feature = "embeddings"))]
use tracing::warn;

/// Shape of an encoded batch: number of sentences and vector dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddingShape {
    pub sentences: usize,
    pub dimension: usize,
}

/// Encode sentences with the default MiniLM model and report the shape.
#[cfg(feature = "embeddings")]
pub fn encode_sentences(sentences: &[String]) -> Result<EmbeddingShape> {
    let embedder = TextEmbedding::try_new(Default::default())?;
    let documents: Vec<&str> = sentences.iter().map(String::as_str).collect();
    let embeddings = embedder.embed(documents, None)?;
    let dimension = embeddings.first().map(Vec::len).unwrap_or(0);
    Ok(EmbeddingShape {
        sentences: embeddings.len(),
        dimension,
    })
}

/// Stub when the embeddings feature is disabled.
#[cfg(not(feature = "embeddings"))]
pub fn encode_sentences(sentences: &[String]) -> Result<EmbeddingShape> {
    warn!("embeddings feature disabled; returning zero-dimensional shape");
    Ok(EmbeddingShape {
        sentences: sentences.len(),
        dimension: 0,
    })
}
