//! Result types returned by the locator and serialized to clients.

use serde::{Deserialize, Serialize};

use super::error::LocateError;

/// Inclusive, 1-based line range of a located snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRange {
    pub start_line: usize,
    pub end_line: usize,
}

impl LineRange {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }
}

/// Wire form of a locate outcome.
///
/// Serializes as either `{"startLine":..,"endLine":..}` or
/// `{"error":".."}`, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchResult {
    Found(LineRange),
    Error { error: String },
}

impl MatchResult {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Serialize to compact JSON text.
    ///
    /// Falls back to a hand-built error object if serialization fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            serde_json::json!({ "error": LocateError::Unknown.to_string() }).to_string()
        })
    }
}

impl From<Result<LineRange, LocateError>> for MatchResult {
    fn from(result: Result<LineRange, LocateError>) -> Self {
        match result {
            Ok(range) => Self::Found(range),
            Err(e) => Self::Error {
                error: e.to_string(),
            },
        }
    }
}
