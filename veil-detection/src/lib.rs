//! Detection stage of the Veil pipeline.
//!
//! `catalog` holds the fixed, ordered rule set; `detector` scans text against
//! it; `scoring` assigns each raw match an integer confidence from its
//! surrounding context; `conflict` resolves cross-category overlaps according
//! to the configured policy.

pub mod catalog;
pub mod conflict;
pub mod detector;
pub mod scoring;

pub use detector::{detect, RawMatch};
