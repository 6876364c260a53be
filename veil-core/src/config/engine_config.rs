use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::VeilResult;

/// How overlapping detections from different categories are resolved.
///
/// The catalog applies rules in sequence without deduplication, so two
/// categories can claim overlapping text (e.g. a street address's words also
/// matching the name heuristic). The policy pins down what happens next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Keep every detection, overlapping or not (the permissive default).
    #[default]
    KeepAll,
    /// On overlap keep the higher confidence; ties prefer the longer match,
    /// then the earlier catalog rule.
    HighestConfidence,
    /// On overlap keep the detection from the earlier catalog rule.
    FirstRule,
}

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub conflict_policy: ConflictPolicy,
    /// Characters of context either side of a match start used for scoring.
    pub context_window_chars: usize,
    /// Drop detections scoring below this before redaction.
    pub min_confidence: Option<u8>,
    /// Clamp the scanned text to this many bytes (on a char boundary).
    /// Guards against pathologically large documents.
    pub max_scan_bytes: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            conflict_policy: ConflictPolicy::default(),
            context_window_chars: defaults::DEFAULT_CONTEXT_WINDOW_CHARS,
            min_confidence: None,
            max_scan_bytes: None,
        }
    }
}

impl EngineConfig {
    /// Parse a config from TOML. Missing keys fall back to defaults.
    pub fn from_toml_str(raw: &str) -> VeilResult<Self> {
        Ok(toml::from_str(raw)?)
    }
}
