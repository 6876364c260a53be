use tracing::debug;
use veil_core::Detection;

/// Replace every detected span in `text` with its category mask.
///
/// Replacements are applied by recorded offset range over the original text,
/// descending by start, so earlier offsets never shift — repeated values and
/// content-equal spans at different positions each redact their own
/// occurrence. A span overlapping an already-replaced range (possible only
/// under the keep-all conflict policy) is skipped.
pub fn redact(text: &str, detections: &[Detection]) -> String {
    let mut sorted: Vec<&Detection> = detections.iter().collect();
    sorted.sort_by(|a, b| b.start_offset.cmp(&a.start_offset));

    let mut result = text.to_string();
    // Start of the lowest replacement applied so far; anything ending past
    // it would splice into a mask.
    let mut lowest_replaced = usize::MAX;
    for d in sorted {
        if d.end_offset > text.len() || d.is_empty() {
            continue;
        }
        if d.end_offset > lowest_replaced {
            debug!(
                category = %d.category,
                start = d.start_offset,
                "skipping overlap with an already-redacted span"
            );
            continue;
        }
        result.replace_range(d.start_offset..d.end_offset, d.category.mask());
        lowest_replaced = d.start_offset;
    }
    result
}
