//! fastText label formatting and training-file output.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use crate::data::{queries::LabeledQuery, taxonomy::Taxonomy};

/// Marker prefix fastText expects on every training label.
pub const LABEL_PREFIX: &str = "__label__";

/// Render a category id as a fastText label token.
pub fn format_label(category: &str) -> String {
    format!("{LABEL_PREFIX}{category}")
}

/// Recover the category id from a fastText label token. Tokens without the
/// prefix are returned unchanged.
pub fn strip_label(label: &str) -> &str {
    label.strip_prefix(LABEL_PREFIX).unwrap_or(label)
}

/// Write `__label__<category> <query>` lines, pipe-delimited and unquoted.
///
/// Rows whose category is no longer in the taxonomy are dropped. Returns the
/// number of lines written.
pub fn write_training_file<P: AsRef<Path>>(
    path: P,
    rows: &[LabeledQuery],
    taxonomy: &Taxonomy,
) -> Result<usize> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'|')
        .quote_style(QuoteStyle::Never)
        .has_headers(false)
        .from_path(path.as_ref())
        .with_context(|| format!("creating training file {:?}", path.as_ref()))?;

    let mut written = 0usize;
    for row in rows {
        if !taxonomy.contains(&row.category) {
            continue;
        }
        let line = format!("{} {}", format_label(&row.category), row.query);
        writer.write_record([line.as_str()])?;
        written += 1;
    }
    writer.flush()?;
    info!(path = %path.as_ref().display(), lines = written, "wrote labeled query data");
    Ok(written)
}
