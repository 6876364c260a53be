use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use super::category::Category;
use super::confidence::ConfidenceBand;
use super::detection::Detection;

/// Derived counts over a report's detections.
///
/// Always recomputable from the detection list via [`from_detections`];
/// there is no independent mutation path.
///
/// [`from_detections`]: SummaryStats::from_detections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryStats {
    pub total_items: usize,
    /// Detections scoring above 80.
    pub high_confidence: usize,
    /// Detections scoring 61–80.
    pub medium_confidence: usize,
    /// Detections scoring 60 or below.
    pub low_confidence: usize,
    /// Detection count per category.
    pub by_category: BTreeMap<Category, usize>,
}

impl SummaryStats {
    pub fn from_detections(detections: &[Detection]) -> Self {
        let mut stats = SummaryStats {
            total_items: detections.len(),
            ..Default::default()
        };
        for d in detections {
            match d.confidence.band() {
                ConfidenceBand::High => stats.high_confidence += 1,
                ConfidenceBand::Medium => stats.medium_confidence += 1,
                ConfidenceBand::Low => stats.low_confidence += 1,
            }
            *stats.by_category.entry(d.category).or_insert(0) += 1;
        }
        stats
    }
}

/// The outcome of processing one document: the original text, its redacted
/// artifact, the detections behind it, and (after an explicit synthesis
/// call) a synthetic-data variant.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DetectionReport {
    /// UUID v4 identifier.
    pub report_id: String,
    pub document_name: String,
    pub original_text: String,
    /// Original text with every surviving detection's offset range replaced
    /// by its category mask.
    pub redacted_text: String,
    /// Populated by `generate_synthetic`; absent until then.
    pub synthetic_text: Option<String>,
    /// Detections in catalog order, then by position within each rule.
    pub detections: Vec<Detection>,
    pub summary: SummaryStats,
    pub processed_at: DateTime<Utc>,
    /// Wall-clock duration of the pipeline run.
    pub processing_ms: i64,
}

impl DetectionReport {
    /// Whether the redaction step has run on this report.
    ///
    /// Reports built by the engine always pass; a report whose redacted text
    /// is empty while the original is not never went through redaction, and
    /// synthesis against it is an invalid-state error.
    pub fn is_redacted(&self) -> bool {
        !self.redacted_text.is_empty() || self.original_text.is_empty()
    }
}
