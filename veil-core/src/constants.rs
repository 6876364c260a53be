/// Veil system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base confidence assigned to every raw match before context boosts.
pub const BASE_CONFIDENCE: u8 = 70;

/// Mask for categories without a dedicated mask token. Unreachable today:
/// the category set is closed and every category carries its own mask.
pub const FALLBACK_MASK: &str = "[REDACTED]";
