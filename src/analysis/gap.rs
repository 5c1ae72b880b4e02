use itertools::Itertools;

use crate::analysis::tiers::build_result;
use crate::constants::GAP_OUTLIER_MULTIPLIER;
use crate::models::{TierBoundary, TierDetectionResult};

/// Detect tiers by finding statistically significant gaps between
/// consecutive sorted positions.
///
/// A gap qualifies when it is strictly positive and exceeds
/// `mean(gaps) + 1.5 * stddev(gaps)`; flat runs of identical
/// positions never qualify. At most `max_tiers - 1` boundaries are
/// kept, largest gaps first, then re-sorted into position order.
/// `max_tiers < 1` is coerced to 1.
pub fn detect_tiers_by_gap(positions: &[u64], max_tiers: usize) -> TierDetectionResult {
    let max_tiers = max_tiers.max(1);

    let mut sorted = positions.to_vec();
    sorted.sort_unstable();

    if sorted.len() < 2 || max_tiers == 1 {
        return build_result(&sorted, Vec::new());
    }

    // gaps[i] separates sorted[i] from sorted[i + 1]
    let gaps: Vec<u64> = sorted
        .iter()
        .tuple_windows()
        .map(|(a, b)| b - a)
        .collect();

    let n = gaps.len() as f64;
    let mean = gaps.iter().map(|&g| g as f64).sum::<f64>() / n;
    let variance = gaps
        .iter()
        .map(|&g| {
            let delta = g as f64 - mean;
            delta * delta
        })
        .sum::<f64>()
        / n;
    let threshold = mean + GAP_OUTLIER_MULTIPLIER * variance.sqrt();

    let mut candidates: Vec<(usize, u64)> = gaps
        .iter()
        .enumerate()
        .filter(|&(_, &g)| g > 0 && g as f64 > threshold)
        .map(|(i, &g)| (i, g))
        .collect();

    // Largest gaps win the tier budget, then restore position order.
    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates.truncate(max_tiers - 1);
    candidates.sort_by_key(|&(i, _)| i);

    let boundaries: Vec<TierBoundary> = candidates
        .into_iter()
        .map(|(i, gap)| TierBoundary {
            position: sorted[i],
            gap_size: gap,
            // The gap is strictly positive, so every duplicate of
            // sorted[i] sits at or before index i.
            accounts_above: (i + 1) as u64,
        })
        .collect();

    build_result(&sorted, boundaries)
}
