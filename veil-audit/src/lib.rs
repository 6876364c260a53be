//! Append-only in-memory audit trail.
//!
//! One entry per processed document. The trail lives for the owning engine's
//! lifetime and is never persisted here; persistence, if wanted, is an
//! external collaborator's job.

mod log;

pub use log::AuditLog;
