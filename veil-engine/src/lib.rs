//! # veil-engine
//!
//! Orchestrates the full Veil pipeline: detect, score, resolve conflicts,
//! redact, record. One [`RedactionEngine`] per configuration; documents flow
//! through [`RedactionEngine::process`] and come out as
//! [`DetectionReport`]s.
//!
//! [`DetectionReport`]: veil_core::DetectionReport

mod engine;

pub use engine::RedactionEngine;
