//! Cross-category overlap resolution.
//!
//! The detector retains every match, so two categories can claim overlapping
//! spans. Which one survives is a policy decision, configured per engine.

use std::cmp::Ordering;

use veil_core::{ConflictPolicy, Detection};

use crate::catalog;

/// Resolve overlaps among `detections` (assumed in catalog order, then by
/// position) according to `policy`. `KeepAll` returns the input unchanged;
/// the other policies return a mutually disjoint subset, preserving the
/// input order.
pub fn resolve(detections: Vec<Detection>, policy: ConflictPolicy) -> Vec<Detection> {
    if policy == ConflictPolicy::KeepAll {
        return detections;
    }
    // Greedy selection in preference order: a detection is kept only when it
    // overlaps nothing already kept. A single long span can conflict with
    // several disjoint shorter ones, so winners are settled globally rather
    // than pairwise.
    let mut ranked: Vec<usize> = (0..detections.len()).collect();
    ranked.sort_by(|&a, &b| prefer(&detections[a], &detections[b], policy));

    let mut kept: Vec<usize> = Vec::with_capacity(detections.len());
    for i in ranked {
        if kept.iter().all(|&k| !detections[i].overlaps(&detections[k])) {
            kept.push(i);
        }
    }
    kept.sort_unstable();
    kept.into_iter().map(|i| detections[i].clone()).collect()
}

/// Preference order between two detections under `policy`; `Less` means `a`
/// wins a conflict with `b`.
fn prefer(a: &Detection, b: &Detection, policy: ConflictPolicy) -> Ordering {
    match policy {
        ConflictPolicy::KeepAll => Ordering::Equal,
        ConflictPolicy::HighestConfidence => b
            .confidence
            .cmp(&a.confidence)
            // Ties: prefer the longer (more specific) match, then the
            // earlier catalog rule.
            .then_with(|| b.len().cmp(&a.len()))
            .then_with(|| {
                catalog::category_rank(a.category).cmp(&catalog::category_rank(b.category))
            }),
        ConflictPolicy::FirstRule => {
            catalog::category_rank(a.category).cmp(&catalog::category_rank(b.category))
        }
    }
}
