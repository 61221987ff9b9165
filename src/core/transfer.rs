//! Reading and writing quote lists as JSON files.

use super::error::{QuoteError, Result};
use super::quote::Quote;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default file name for exports.
pub const EXPORT_FILE_NAME: &str = "quotes.json";

pub fn read_quotes_file(path: &Path) -> Result<Vec<Quote>> {
    let content = fs::read_to_string(path)?;
    let quotes: Vec<Quote> = serde_json::from_str(&content)
        .map_err(|e| QuoteError::InvalidImport(format!("{}: {e}", path.display())))?;
    debug!(count = quotes.len(), "Read quotes from {}", path.display());
    Ok(quotes)
}

/// Writes `quotes` as pretty-printed JSON, replacing any existing file.
pub fn write_quotes_file(path: &Path, quotes: &[Quote]) -> Result<()> {
    let json = serde_json::to_string_pretty(quotes)
        .map_err(|e| QuoteError::storage(format!("failed to encode quotes: {e}")))?;
    fs::write(path, json)?;
    debug!(count = quotes.len(), "Wrote quotes to {}", path.display());
    Ok(())
}
