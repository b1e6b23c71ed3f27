#![cfg(feature = "std")]

//! Loading grids from a text file holding several cases.
//!
//! Cases are separated by a blank line, rows by a single newline.
//! CRLF line endings are accepted.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::debug;

/// Split a blob into cases, each a list of rows.
pub fn split_cases(text: &str) -> Vec<Vec<String>> {
    let text = text.replace("\r\n", "\n");
    let text = text.trim_end_matches('\n');
    if text.is_empty() {
        return Vec::new();
    }
    text.split("\n\n")
        .map(|case| case.split('\n').map(str::to_owned).collect())
        .collect()
}

/// Read `path` and split it with [`split_cases`].
pub fn load_cases(path: &Path) -> anyhow::Result<Vec<Vec<String>>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read cases from {}", path.display()))?;
    let cases = split_cases(&text);
    debug!("loaded {} cases from {}", cases.len(), path.display());
    Ok(cases)
}
