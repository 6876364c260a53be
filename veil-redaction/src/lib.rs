//! Redaction stage of the Veil pipeline.
//!
//! `redactor` replaces detected spans with category masks by offset range;
//! `synthesizer` reverses mask tokens into plausible fake values supplied by
//! an injectable provider.

mod fake;
mod redactor;
mod synthesizer;

pub use fake::StaticFakeProvider;
pub use redactor::redact;
pub use synthesizer::Synthesizer;
