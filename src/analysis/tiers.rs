//! Shared assembly for tier-detection results.
//!
//! Both detection strategies produce boundaries over the same sorted
//! input and hand them to [`build_result`], so their outputs stay
//! comparable: same linearity measure, same classification bands,
//! same label scheme.

use crate::constants::{LINEARITY_THRESHOLD, STEPPED_BOUNDARY_COUNT, STEPPED_GAP_FRACTION};
use crate::models::{DistributionType, TierBoundary, TierDetectionResult};

/// Coefficient of determination (R-squared) of a linear regression of
/// sorted position value against rank 1..N.
///
/// Values near 1 indicate the data is well-approximated by a single
/// straight line; step structure pulls the score down. Degenerate
/// inputs (fewer than two samples, or all values identical) are
/// perfectly described by a line and score 1.
pub fn linearity_score(sorted: &[u64]) -> f64 {
    let n = sorted.len();
    if n < 2 {
        return 1.0;
    }

    let nf = n as f64;
    let mean_x = (nf + 1.0) / 2.0;
    let mean_y = sorted.iter().map(|&v| v as f64).sum::<f64>() / nf;

    let mut s_xy = 0.0;
    let mut s_xx = 0.0;
    let mut s_yy = 0.0;
    for (i, &v) in sorted.iter().enumerate() {
        let dx = (i + 1) as f64 - mean_x;
        let dy = v as f64 - mean_y;
        s_xy += dx * dy;
        s_xx += dx * dx;
        s_yy += dy * dy;
    }

    if s_yy == 0.0 {
        // Zero variance in position: a flat line fits exactly.
        return 1.0;
    }

    ((s_xy * s_xy) / (s_xx * s_yy)).clamp(0.0, 1.0)
}

/// Build the shared result shape from sorted input and the boundaries
/// a strategy kept.
///
/// Boundaries must arrive in ascending position order with strictly
/// increasing `accounts_above`.
pub fn build_result(sorted: &[u64], boundaries: Vec<TierBoundary>) -> TierDetectionResult {
    let linearity = linearity_score(sorted);
    let distribution_type = classify(sorted, &boundaries, linearity);

    let tier_count = boundaries.len() + 1;
    let tier_labels = (1..=tier_count).map(|i| format!("Tier {i}")).collect();

    let message = match distribution_type {
        DistributionType::Linear => format!(
            "Positions form a single continuous distribution ({} samples)",
            sorted.len()
        ),
        DistributionType::Tiered => format!(
            "Detected {} tiers separated by significant gaps",
            tier_count
        ),
        DistributionType::Stepped => format!(
            "Distribution is heavily stepped across {} breaks",
            boundaries.len()
        ),
    };

    TierDetectionResult {
        distribution_type,
        linearity_score: linearity,
        message,
        tier_labels,
        boundaries,
    }
}

fn classify(sorted: &[u64], boundaries: &[TierBoundary], linearity: f64) -> DistributionType {
    if boundaries.is_empty() || linearity >= LINEARITY_THRESHOLD {
        return DistributionType::Linear;
    }

    if boundaries.len() >= STEPPED_BOUNDARY_COUNT {
        return DistributionType::Stepped;
    }

    // A single dominant gap is still just two tiers; the gap-fraction
    // promotion only kicks in once several breaks are present.
    if boundaries.len() >= 2 {
        let range = sorted[sorted.len() - 1] - sorted[0];
        let max_gap = boundaries.iter().map(|b| b.gap_size).max().unwrap_or(0);
        if range > 0 && max_gap as f64 > STEPPED_GAP_FRACTION * range as f64 {
            return DistributionType::Stepped;
        }
    }

    DistributionType::Tiered
}
