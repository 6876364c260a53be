//! Error types for the Veil pipeline.
//!
//! Empty input is deliberately *not* an error: processing an empty document
//! degrades to an empty report with a zero-confidence audit entry.

/// Convenience alias used by every fallible operation in the workspace.
pub type VeilResult<T> = Result<T, VeilError>;

/// Top-level error type for the Veil pipeline.
#[derive(Debug, thiserror::Error)]
pub enum VeilError {
    /// A catalog rule's matcher failed to compile. Only possible at engine
    /// construction time; fatal.
    #[error("matcher for category '{category}' failed to compile: {reason}")]
    MalformedMatcherConfig { category: String, reason: String },

    /// An operation was invoked out of order (e.g. synthesis before any
    /// redaction occurred).
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
