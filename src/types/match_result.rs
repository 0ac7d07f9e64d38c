use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome of matching a query against a reference index.
///
/// `score` is the base similarity plus any categorical boost, so it can
/// exceed 1.0. It is a ranking value, not a probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_line: Option<String>,
    /// 1-based line number of the match in the reference index.
    pub line_number: Option<usize>,
    pub score: f32,
    pub resolved_path: Option<PathBuf>,
}

impl MatchResult {
    /// Zero-confidence result used when nothing matched or the index could not be read.
    pub fn none() -> Self {
        Self {
            matched_line: None,
            line_number: None,
            score: 0.0,
            resolved_path: None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched_line.is_some()
    }

    /// A match is usable when its document exists and the score clears `min_confidence`.
    pub fn is_usable(&self, min_confidence: f32) -> bool {
        self.resolved_path.is_some() && self.score > min_confidence
    }
}
