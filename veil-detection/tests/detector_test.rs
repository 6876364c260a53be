use veil_core::Category;
use veil_detection::{detect, RawMatch};

fn matched<'a>(text: &'a str, m: &RawMatch) -> &'a str {
    &text[m.start..m.end]
}

fn of_category(matches: &[RawMatch], category: Category) -> Vec<RawMatch> {
    matches
        .iter()
        .copied()
        .filter(|m| m.category == category)
        .collect()
}

// ── Per-category matching ─────────────────────────────────────────────────

#[test]
fn detects_ssn() {
    let text = "SSN: 123-45-6789";
    let hits = of_category(&detect(text), Category::Ssn);
    assert_eq!(hits.len(), 1);
    assert_eq!(matched(text, &hits[0]), "123-45-6789");
}

#[test]
fn detects_phone() {
    let text = "call 555-123-4567 today";
    let hits = of_category(&detect(text), Category::Phone);
    assert_eq!(hits.len(), 1);
    assert_eq!(matched(text, &hits[0]), "555-123-4567");
}

#[test]
fn ssn_and_phone_shapes_do_not_cross_match() {
    let matches = detect("id 123-45-6789 and 555-123-4567");
    assert_eq!(of_category(&matches, Category::Ssn).len(), 1);
    assert_eq!(of_category(&matches, Category::Phone).len(), 1);
}

#[test]
fn detects_email() {
    let text = "reach me at john.smith@example.com please";
    let hits = of_category(&detect(text), Category::Email);
    assert_eq!(hits.len(), 1);
    assert_eq!(matched(text, &hits[0]), "john.smith@example.com");
}

#[test]
fn detects_credit_card_with_hyphens_spaces_or_neither() {
    for text in [
        "card 4111-1111-1111-1111 on file",
        "card 4111 1111 1111 1111 on file",
        "card 4111111111111111 on file",
    ] {
        let hits = of_category(&detect(text), Category::CreditCard);
        assert_eq!(hits.len(), 1, "no credit card found in: {text}");
    }
}

#[test]
fn detects_person_name() {
    let text = "patient John Smith was admitted";
    let hits = of_category(&detect(text), Category::PersonName);
    assert_eq!(hits.len(), 1);
    assert_eq!(matched(text, &hits[0]), "John Smith");
}

#[test]
fn detects_street_address_case_insensitively() {
    for (text, expected) in [
        ("lives at 742 Oak Avenue since 2019", "742 Oak Avenue"),
        ("ship to 9 elm st", "9 elm st"),
        ("HQ: 1600 Pennsylvania Boulevard", "1600 Pennsylvania Boulevard"),
    ] {
        let hits = of_category(&detect(text), Category::StreetAddress);
        assert_eq!(hits.len(), 1, "no address found in: {text}");
        assert_eq!(matched(text, &hits[0]), expected);
    }
}

// ── Name heuristic ────────────────────────────────────────────────────────

#[test]
fn name_scan_skips_leading_stopword() {
    // The naive pair regex would bind "Contact John" and miss the real name.
    let text = "Contact John Smith about the invoice";
    let hits = of_category(&detect(text), Category::PersonName);
    assert_eq!(hits.len(), 1);
    assert_eq!(matched(text, &hits[0]), "John Smith");
}

#[test]
fn name_scan_skips_chained_stopwords() {
    let text = "Dear Contact John Smith";
    let hits = of_category(&detect(text), Category::PersonName);
    assert_eq!(hits.len(), 1);
    assert_eq!(matched(text, &hits[0]), "John Smith");
}

#[test]
fn honorific_does_not_become_half_a_name() {
    let text = "seen by Dr Jones yesterday";
    let hits = of_category(&detect(text), Category::PersonName);
    assert!(hits.is_empty(), "honorific pair should not match: {hits:?}");
}

#[test]
fn name_heuristic_still_fires_on_capitalized_prose() {
    // Known limitation, kept deliberately: any two capitalized words that
    // survive the stopword pass look like a name.
    let text = "visited Niagara Falls last summer";
    let hits = of_category(&detect(text), Category::PersonName);
    assert_eq!(hits.len(), 1);
    assert_eq!(matched(text, &hits[0]), "Niagara Falls");
}

// ── Multiple and overlapping matches ──────────────────────────────────────

#[test]
fn repeated_values_produce_separate_matches() {
    let text = "111-22-3333 then later 111-22-3333";
    let hits = of_category(&detect(text), Category::Ssn);
    assert_eq!(hits.len(), 2);
    assert_ne!(hits[0].start, hits[1].start);
}

#[test]
fn overlapping_categories_are_all_retained() {
    // "Main Street" satisfies the name heuristic inside the address span.
    let text = "ship to 123 Main Street today";
    let matches = detect(text);
    assert_eq!(of_category(&matches, Category::StreetAddress).len(), 1);
    assert_eq!(of_category(&matches, Category::PersonName).len(), 1);
}

#[test]
fn matches_come_out_in_catalog_order() {
    let text = "John Smith, 123-45-6789, john@example.com";
    let categories: Vec<Category> = detect(text).iter().map(|m| m.category).collect();
    assert_eq!(
        categories,
        vec![Category::Ssn, Category::Email, Category::PersonName]
    );
}

// ── Edge cases ────────────────────────────────────────────────────────────

#[test]
fn empty_text_yields_no_matches() {
    assert!(detect("").is_empty());
}

#[test]
fn clean_text_yields_no_matches() {
    assert!(detect("nothing sensitive here at all").is_empty());
}
