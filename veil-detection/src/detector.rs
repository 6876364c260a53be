//! Scans text against the pattern catalog, producing raw matches.

use regex::Regex;
use veil_core::Category;

use crate::catalog;

/// A raw matcher hit before scoring: category plus byte span in the
/// original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch {
    pub category: Category,
    pub start: usize,
    pub end: usize,
}

/// Capitalized words that lead a two-word candidate but are almost never the
/// first half of a person's name: sentence openers and honorifics. A
/// candidate led by one of these is rejected and the scan resumes at its
/// second word, so "Contact John Smith" yields "John Smith".
const NAME_STOPWORDS: &[&str] = &[
    "Contact", "Dear", "Hello", "Hi", "Please", "Thanks", "Regards", "Sincerely", "The", "This",
    "That", "My", "Our", "Your", "His", "Her", "Their", "Mr", "Mrs", "Ms", "Dr", "Prof",
];

/// Find all matches for every catalog rule, in catalog order.
///
/// Occurrences within one rule are non-overlapping; matches across different
/// categories may overlap and are all retained — conflict resolution is a
/// separate, policy-driven step. Empty text yields an empty vector.
pub fn detect(text: &str) -> Vec<RawMatch> {
    let mut matches = Vec::new();
    for rule in catalog::rules() {
        let Some(re) = rule.regex.as_ref() else {
            continue;
        };
        match rule.category {
            Category::PersonName => collect_name_matches(re, text, &mut matches),
            _ => {
                for m in re.find_iter(text) {
                    matches.push(RawMatch {
                        category: rule.category,
                        start: m.start(),
                        end: m.end(),
                    });
                }
            }
        }
    }
    matches
}

/// Name-pair scan with stopword rejection. Unlike a plain `find_iter`, a
/// rejected candidate only consumes its first word, so the second word can
/// still open a real name pair.
fn collect_name_matches(re: &Regex, text: &str, out: &mut Vec<RawMatch>) {
    let mut at = 0;
    while at <= text.len() {
        let Some(m) = re.find_at(text, at) else {
            break;
        };
        let first_word = m.as_str().split(' ').next().unwrap_or("");
        if NAME_STOPWORDS.contains(&first_word) {
            at = m.start() + first_word.len() + 1;
        } else {
            out.push(RawMatch {
                category: Category::PersonName,
                start: m.start(),
                end: m.end(),
            });
            at = m.end();
        }
    }
}
