use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::Confidence;

/// Who performed a recorded action. The pipeline is fully automated, so the
/// set is currently a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    Automated,
}

/// Summary record of one document-processing invocation.
///
/// Audit entries are append-only: the trail exposes no deletion or edit
/// operation. Persistence, if any, is an external collaborator's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuditEntry {
    /// UUID v4 identifier.
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub document_name: String,
    pub detection_count: usize,
    /// Rounded integer mean of all detection confidences; zero when the
    /// document produced no detections.
    pub mean_confidence: Confidence,
    pub actor: Actor,
}
