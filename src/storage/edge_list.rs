//! Edge-list file loading
//!
//! # Format
//!
//! Plain text, one edge per line, two whitespace-separated integers per line:
//!
//! ```text
//! 1 2
//! 2 3
//! 3 1
//! ```
//!
//! No header, no weights. The loader performs no self-loop or duplicate
//! filtering; any line that does not yield two integers is a hard error,
//! surfaced with its line number.

use crate::error::DetectError;
use anyhow::{Context, Result};
use std::path::Path;

/// Read an edge-list file into raw (source, target) pairs
///
/// # Errors
///
/// Returns an error if the file cannot be read, or
/// [`DetectError::MalformedInput`] for the first line that does not parse.
pub async fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<Vec<(u32, u32)>> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading edge list {}", path.display()))?;
    parse_edge_list(&text)
}

/// Parse edge-list text into raw (source, target) pairs
///
/// Fields beyond the second are ignored; a line with fewer than two integer
/// fields (including a blank line) is malformed.
///
/// # Errors
///
/// [`DetectError::MalformedInput`] with the 1-based line number and the
/// offending line verbatim.
pub fn parse_edge_list(text: &str) -> Result<Vec<(u32, u32)>> {
    let mut pairs = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let malformed = || DetectError::MalformedInput {
            line,
            content: raw.to_string(),
        };

        let mut fields = raw.split_whitespace();
        let (Some(first), Some(second)) = (fields.next(), fields.next()) else {
            return Err(malformed().into());
        };
        let source: u32 = first.parse().map_err(|_| malformed())?;
        let target: u32 = second.parse().map_err(|_| malformed())?;
        pairs.push((source, target));
    }
    Ok(pairs)
}
