use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use veil_audit::AuditLog;
use veil_core::{
    Detection, DetectionReport, Disposition, EngineConfig, IFakeProvider, SummaryStats, VeilError,
    VeilResult,
};
use veil_detection::{catalog, conflict, detect, scoring};
use veil_redaction::{redact, Synthesizer};

/// The Veil processing engine.
///
/// Construction verifies the pattern catalog; a matcher that fails to
/// compile is fatal, never degraded around. The engine itself is stateless
/// across documents apart from the audit trail, so a single instance can be
/// shared across threads behind an `Arc`.
pub struct RedactionEngine {
    config: EngineConfig,
    audit: Arc<AuditLog>,
    synthesizer: Synthesizer,
}

impl RedactionEngine {
    /// Build an engine with the sample-table fake provider.
    pub fn new(config: EngineConfig) -> VeilResult<Self> {
        Self::with_fake_provider(config, Box::new(veil_redaction::StaticFakeProvider))
    }

    /// Build an engine with a caller-supplied fake-value provider for
    /// synthesis.
    pub fn with_fake_provider(
        config: EngineConfig,
        provider: Box<dyn IFakeProvider>,
    ) -> VeilResult<Self> {
        catalog::verify()?;
        info!(
            conflict_policy = ?config.conflict_policy,
            context_window_chars = config.context_window_chars,
            "redaction engine ready"
        );
        Ok(Self {
            config,
            audit: Arc::new(AuditLog::new()),
            synthesizer: Synthesizer::with_provider(provider),
        })
    }

    /// Run the full pipeline over one document.
    ///
    /// Empty input is not an error: it produces a report with no detections,
    /// an empty redacted text, and a zero-mean audit entry.
    pub fn process(&self, document_name: &str, text: &str) -> VeilResult<DetectionReport> {
        let started = Utc::now();
        let scan = self.scan_slice(text);

        let raw = detect(scan);
        debug!(document = document_name, raw_matches = raw.len(), "scan complete");

        let window = self.config.context_window_chars;
        let mut detections: Vec<Detection> = raw
            .into_iter()
            .map(|m| Detection {
                category: m.category,
                matched_text: scan[m.start..m.end].to_string(),
                start_offset: m.start,
                end_offset: m.end,
                confidence: scoring::score(m.category, scan, m.start, window),
                context_snippet: scoring::context_window(scan, m.start, window).trim().to_string(),
                disposition: Disposition::Redact,
            })
            .collect();

        detections = conflict::resolve(detections, self.config.conflict_policy);
        if let Some(floor) = self.config.min_confidence {
            detections.retain(|d| d.confidence.value() >= floor);
        }

        let redacted_text = redact(text, &detections);
        let summary = SummaryStats::from_detections(&detections);
        let entry = self.audit.record(document_name, &detections);

        let processing_ms = (Utc::now() - started).num_milliseconds();
        info!(
            document = document_name,
            detections = detections.len(),
            mean_confidence = %entry.mean_confidence,
            processing_ms,
            "document processed"
        );

        Ok(DetectionReport {
            report_id: Uuid::new_v4().to_string(),
            document_name: document_name.to_string(),
            original_text: text.to_string(),
            redacted_text,
            synthetic_text: None,
            detections,
            summary,
            processed_at: started,
            processing_ms,
        })
    }

    /// Replace the mask tokens in a report's redacted text with fake values,
    /// store the result on the report, and return it.
    ///
    /// Requires a redacted report; calling this on a report that never went
    /// through redaction is an invalid-state error.
    pub fn generate_synthetic(&self, report: &mut DetectionReport) -> VeilResult<String> {
        if !report.is_redacted() {
            return Err(VeilError::InvalidState {
                reason: format!(
                    "synthesis requires a redacted report (report {})",
                    report.report_id
                ),
            });
        }
        let synthetic = self.synthesizer.synthesize(&report.redacted_text);
        debug!(
            report_id = %report.report_id,
            synthetic_len = synthetic.len(),
            "synthetic text generated"
        );
        report.synthetic_text = Some(synthetic.clone());
        Ok(synthetic)
    }

    /// The engine's audit trail.
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Clamp oversized input to `max_scan_bytes`, backing off to the nearest
    /// char boundary. Detection offsets stay valid for the full text because
    /// the clamp only ever shortens the tail.
    fn scan_slice<'a>(&self, text: &'a str) -> &'a str {
        match self.config.max_scan_bytes {
            Some(max) if text.len() > max => {
                let mut end = max;
                while !text.is_char_boundary(end) {
                    end -= 1;
                }
                debug!(full = text.len(), scanned = end, "input clamped for scan");
                &text[..end]
            }
            _ => text,
        }
    }
}
