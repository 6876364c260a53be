use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Integer confidence score clamped to [0, 100].
///
/// Represents how confident the scorer is that a match is genuinely
/// sensitive data rather than a false positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Confidence(u8);

/// Reporting band a confidence value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Upper bound of the scale.
    pub const MAX: u8 = 100;
    /// Scores strictly above this are high-band.
    pub const HIGH_FLOOR: u8 = 80;
    /// Scores strictly above this (and not high) are medium-band.
    pub const MEDIUM_FLOOR: u8 = 60;

    /// Create a new Confidence, clamping to [0, 100].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// The zero score, used when no detections exist to average.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get the raw integer value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Which reporting band this score falls into.
    pub fn band(self) -> ConfidenceBand {
        if self.0 > Self::HIGH_FLOOR {
            ConfidenceBand::High
        } else if self.0 > Self::MEDIUM_FLOOR {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }

    /// Rounded integer mean of a set of scores; zero for an empty set.
    pub fn mean_of(values: &[Confidence]) -> Self {
        if values.is_empty() {
            return Self::zero();
        }
        let sum: u32 = values.iter().map(|c| c.0 as u32).sum();
        let mean = (sum as f64 / values.len() as f64).round() as u8;
        Self::new(mean)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Confidence {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for u8 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
