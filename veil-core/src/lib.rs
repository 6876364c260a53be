//! # veil-core
//!
//! Foundation crate for the Veil redaction pipeline.
//! Defines all models, errors, config, constants, and traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ConflictPolicy, EngineConfig};
pub use errors::{VeilError, VeilResult};
pub use models::{
    Actor, AuditEntry, Category, Confidence, ConfidenceBand, Detection, DetectionReport,
    Disposition, SummaryStats,
};
pub use traits::IFakeProvider;
