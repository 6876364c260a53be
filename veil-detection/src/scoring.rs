//! Context-aware confidence scoring.
//!
//! Every match starts at the base confidence. A category either hits its
//! single boost condition — a cue word in the lower-cased context window —
//! and takes that fixed value, or stays at base. Boosts override, they never
//! add. Pure functions throughout: same inputs, same score.

use veil_core::constants::BASE_CONFIDENCE;
use veil_core::{Category, Confidence};

struct Boost {
    category: Category,
    cues: &'static [&'static str],
    value: u8,
}

/// Fixed boost table. PERSON_NAME and STREET_ADDRESS have no cue and always
/// stay at base.
const BOOSTS: &[Boost] = &[
    Boost {
        category: Category::Ssn,
        cues: &["social security"],
        value: 95,
    },
    Boost {
        category: Category::Phone,
        cues: &["phone"],
        value: 90,
    },
    Boost {
        category: Category::Email,
        cues: &["@"],
        value: 95,
    },
    Boost {
        category: Category::CreditCard,
        cues: &["card", "credit"],
        value: 92,
    },
];

/// Slice up to `window` characters either side of `start`, clamped to the
/// text bounds. `start` must lie on a char boundary (regex match offsets
/// always do).
pub fn context_window(text: &str, start: usize, window: usize) -> &str {
    let win_start = text[..start]
        .char_indices()
        .rev()
        .take(window)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(start);
    let win_end = text[start..]
        .char_indices()
        .nth(window)
        .map(|(i, _)| start + i)
        .unwrap_or(text.len());
    &text[win_start..win_end]
}

/// Score one match: base confidence, overridden by the category's fixed
/// boost when the context window carries the cue. Clamped to 100 by
/// construction (a no-op with the current table, enforced for future
/// entries).
pub fn score(category: Category, text: &str, start: usize, window: usize) -> Confidence {
    let context = context_window(text, start, window).to_lowercase();
    for boost in BOOSTS {
        if boost.category == category && boost.cues.iter().any(|cue| context.contains(cue)) {
            return Confidence::new(boost.value);
        }
    }
    Confidence::new(BASE_CONFIDENCE)
}
