pub mod defaults;

mod engine_config;

pub use engine_config::{ConflictPolicy, EngineConfig};
