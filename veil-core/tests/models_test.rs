use veil_core::{Category, Confidence, Detection, DetectionReport, Disposition, SummaryStats};

fn detection(category: Category, start: usize, text: &str, confidence: u8) -> Detection {
    Detection {
        category,
        matched_text: text.to_string(),
        start_offset: start,
        end_offset: start + text.len(),
        confidence: Confidence::new(confidence),
        context_snippet: String::new(),
        disposition: Disposition::Redact,
    }
}

// --- Category ---

#[test]
fn category_order_is_catalog_order() {
    assert_eq!(
        Category::ALL,
        [
            Category::Ssn,
            Category::Phone,
            Category::Email,
            Category::CreditCard,
            Category::PersonName,
            Category::StreetAddress,
        ]
    );
}

#[test]
fn every_category_has_a_distinct_mask() {
    let masks: Vec<&str> = Category::ALL.iter().map(|c| c.mask()).collect();
    for (i, m) in masks.iter().enumerate() {
        for other in &masks[i + 1..] {
            assert_ne!(m, other, "duplicate mask token: {m}");
        }
    }
}

#[test]
fn category_serializes_snake_case() {
    let json = serde_json::to_string(&Category::CreditCard).unwrap();
    assert_eq!(json, "\"credit_card\"");
    let back: Category = serde_json::from_str("\"street_address\"").unwrap();
    assert_eq!(back, Category::StreetAddress);
}

#[test]
fn category_display_matches_label() {
    for c in Category::ALL {
        assert_eq!(c.to_string(), c.label());
    }
}

// --- Detection ---

#[test]
fn detection_overlap_is_symmetric() {
    let a = detection(Category::StreetAddress, 8, "123 Main Street", 70);
    let b = detection(Category::PersonName, 12, "Main Street", 70);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn adjacent_detections_do_not_overlap() {
    let a = detection(Category::Ssn, 0, "123-45-6789", 70);
    let b = detection(Category::Phone, 11, "555-123-4567", 70);
    assert!(!a.overlaps(&b));
}

#[test]
fn detection_round_trips_through_json() {
    let d = detection(Category::Email, 4, "a@b.com", 95);
    let json = serde_json::to_string(&d).unwrap();
    let back: Detection = serde_json::from_str(&json).unwrap();
    assert_eq!(d, back);
}

// --- SummaryStats ---

#[test]
fn summary_stats_counts_by_band() {
    let detections = vec![
        detection(Category::Ssn, 0, "123-45-6789", 95),
        detection(Category::Phone, 20, "555-123-4567", 90),
        detection(Category::PersonName, 40, "John Smith", 70),
        detection(Category::PersonName, 60, "Jane Doe", 40),
    ];
    let stats = SummaryStats::from_detections(&detections);
    assert_eq!(stats.total_items, 4);
    assert_eq!(stats.high_confidence, 2);
    assert_eq!(stats.medium_confidence, 1);
    assert_eq!(stats.low_confidence, 1);
    assert_eq!(stats.by_category[&Category::PersonName], 2);
    assert_eq!(stats.by_category[&Category::Ssn], 1);
}

#[test]
fn summary_stats_band_boundaries() {
    // 80 is the top of the medium band; 81 is high. 60 is low; 61 is medium.
    let detections = vec![
        detection(Category::Ssn, 0, "a", 81),
        detection(Category::Ssn, 2, "b", 80),
        detection(Category::Ssn, 4, "c", 61),
        detection(Category::Ssn, 6, "d", 60),
    ];
    let stats = SummaryStats::from_detections(&detections);
    assert_eq!(stats.high_confidence, 1);
    assert_eq!(stats.medium_confidence, 2);
    assert_eq!(stats.low_confidence, 1);
}

#[test]
fn summary_stats_empty_detections() {
    let stats = SummaryStats::from_detections(&[]);
    assert_eq!(stats, SummaryStats::default());
}

// --- DetectionReport ---

fn report(original: &str, redacted: &str) -> DetectionReport {
    DetectionReport {
        report_id: "r-1".into(),
        document_name: "doc.txt".into(),
        original_text: original.into(),
        redacted_text: redacted.into(),
        synthetic_text: None,
        detections: Vec::new(),
        summary: SummaryStats::default(),
        processed_at: chrono::Utc::now(),
        processing_ms: 0,
    }
}

#[test]
fn report_with_redacted_text_is_redacted() {
    assert!(report("SSN 123-45-6789", "SSN XXX-XX-XXXX").is_redacted());
}

#[test]
fn empty_document_report_counts_as_redacted() {
    assert!(report("", "").is_redacted());
}

#[test]
fn unprocessed_report_is_not_redacted() {
    assert!(!report("SSN 123-45-6789", "").is_redacted());
}
