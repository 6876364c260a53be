pub mod audit;
pub mod category;
pub mod confidence;
pub mod detection;
pub mod report;

pub use audit::{Actor, AuditEntry};
pub use category::Category;
pub use confidence::{Confidence, ConfidenceBand};
pub use detection::{Detection, Disposition};
pub use report::{DetectionReport, SummaryStats};
