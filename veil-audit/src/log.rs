use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;
use veil_core::{Actor, AuditEntry, Confidence, Detection};

/// Thread-safe append-only trail of processing runs.
///
/// Interior mutability keeps `record` callable through a shared reference,
/// so one log can sit behind an `Arc` in a multi-threaded engine.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry summarizing a processing run and return a copy of it.
    pub fn record(&self, document_name: &str, detections: &[Detection]) -> AuditEntry {
        let confidences: Vec<Confidence> = detections.iter().map(|d| d.confidence).collect();
        let entry = AuditEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            document_name: document_name.to_string(),
            detection_count: detections.len(),
            mean_confidence: Confidence::mean_of(&confidences),
            actor: Actor::Automated,
        };
        debug!(
            id = %entry.id,
            document = %entry.document_name,
            detections = entry.detection_count,
            mean_confidence = %entry.mean_confidence,
            "audit entry recorded"
        );
        self.lock().push(entry.clone());
        entry
    }

    /// Snapshot of the trail, newest first.
    pub fn entries(&self) -> Vec<AuditEntry> {
        let guard = self.lock();
        guard.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<AuditEntry>> {
        // A poisoned trail still holds every entry appended before the
        // panic; recovering it beats losing the audit history.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
