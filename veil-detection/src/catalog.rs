//! The fixed registry of sensitive-data categories and their matchers.
//!
//! Rule order is significant: later categories have broader matchers and
//! would shadow the earlier, more specific ones if evaluated first. All
//! matchers are `regex` patterns — a finite-automaton engine with no
//! backtracking, so pathological inputs cannot blow up scan time.

use regex::Regex;
use std::sync::LazyLock;
use veil_core::{Category, VeilError, VeilResult};

/// One catalog rule: a category, its compiled matcher, and its mask token.
/// Immutable, defined at process start; pure data.
pub struct PatternRule {
    pub category: Category,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub mask: &'static str,
}

macro_rules! matcher {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

matcher!(RE_SSN, r"\b\d{3}-\d{2}-\d{4}\b");

matcher!(RE_PHONE, r"\b\d{3}-\d{3}-\d{4}\b");

matcher!(RE_EMAIL, r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b");

matcher!(RE_CREDIT_CARD, r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b");

// Two consecutive capitalized words. A heuristic with a known high
// false-positive rate on ordinary prose; the detector's stopword pass trims
// the worst of it, the rest is documented behavior.
matcher!(RE_PERSON_NAME, r"\b[A-Z][a-z]+ [A-Z][a-z]+\b");

matcher!(
    RE_STREET_ADDRESS,
    r"(?i)\b\d+\s+[A-Za-z\s]+?(?:Street|Avenue|Boulevard|Drive|Lane|Road|St|Ave|Blvd|Dr|Ln|Rd)\b"
);

/// All rules in evaluation order: SSN, PHONE, EMAIL, CREDIT_CARD,
/// PERSON_NAME, STREET_ADDRESS.
pub fn rules() -> Vec<PatternRule> {
    vec![
        PatternRule {
            category: Category::Ssn,
            regex: &RE_SSN,
            mask: Category::Ssn.mask(),
        },
        PatternRule {
            category: Category::Phone,
            regex: &RE_PHONE,
            mask: Category::Phone.mask(),
        },
        PatternRule {
            category: Category::Email,
            regex: &RE_EMAIL,
            mask: Category::Email.mask(),
        },
        PatternRule {
            category: Category::CreditCard,
            regex: &RE_CREDIT_CARD,
            mask: Category::CreditCard.mask(),
        },
        PatternRule {
            category: Category::PersonName,
            regex: &RE_PERSON_NAME,
            mask: Category::PersonName.mask(),
        },
        PatternRule {
            category: Category::StreetAddress,
            regex: &RE_STREET_ADDRESS,
            mask: Category::StreetAddress.mask(),
        },
    ]
}

/// Check that every rule's matcher compiled. Called at engine construction;
/// a failure is fatal, not degraded around.
pub fn verify() -> VeilResult<()> {
    for rule in rules() {
        if rule.regex.is_none() {
            return Err(VeilError::MalformedMatcherConfig {
                category: rule.category.to_string(),
                reason: "regex compilation failed".into(),
            });
        }
    }
    Ok(())
}

/// Position of a category in catalog evaluation order, for first-rule-wins
/// conflict resolution.
pub fn category_rank(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or(Category::ALL.len())
}
