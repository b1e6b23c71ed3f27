#![cfg(feature = "std")]

//! Rendering census results for people and for machines.

use serde::Serialize;

/// Result for one case. `counts[k]` is the number of ships with `k + 1` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// 1-based case number.
    pub case: usize,
    pub counts: Vec<usize>,
}

impl CaseReport {
    pub fn new(case: usize, counts: impl Into<Vec<usize>>) -> Self {
        Self {
            case,
            counts: counts.into(),
        }
    }

    /// `Test N:` header, then the counts as a JSON array, padded by blank lines.
    pub fn to_human(&self) -> serde_json::Result<String> {
        let counts = serde_json::to_string(&self.counts)?;
        Ok(format!("Test {}:\n\n{}\n", self.case, counts))
    }

    /// Single-line JSON object.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
