use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;
use super::confidence::Confidence;

/// What the pipeline does with a detection. Closed set; every detection the
/// current pipeline produces is redacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    Redact,
}

/// One identified sensitive span: category, position, score, and the context
/// that justified the score. Immutable once produced; owned by the pipeline
/// invocation that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Detection {
    pub category: Category,
    /// The exact text that matched, as it appears in the original document.
    pub matched_text: String,
    /// Byte offset of the match start in the original text.
    pub start_offset: usize,
    /// Byte offset one past the match end in the original text.
    pub end_offset: usize,
    pub confidence: Confidence,
    /// Trimmed ±50-character window around the match start.
    pub context_snippet: String,
    pub disposition: Disposition,
}

impl Detection {
    /// Length of the matched span in bytes.
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.end_offset == self.start_offset
    }

    /// Whether this detection's span overlaps another's.
    pub fn overlaps(&self, other: &Detection) -> bool {
        self.start_offset < other.end_offset && other.start_offset < self.end_offset
    }
}
