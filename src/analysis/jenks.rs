//! Jenks natural-breaks tier detection.
//!
//! The classic two-table dynamic program, run over distinct values
//! weighted by their multiplicity rather than over raw samples. That
//! keeps breaks from ever splitting a run of identical positions,
//! makes `k <= distinct values` structural, and bounds the O(k * m^2)
//! cost by the distinct-value count m rather than the sample count.

use crate::analysis::tiers::build_result;
use crate::models::{TierBoundary, TierDetectionResult};

/// Partition the sorted positions into up to `max_tiers` contiguous
/// classes minimizing within-class sum of squared deviations, and map
/// the class edges to the shared boundary shape.
///
/// `max_tiers < 1` is coerced to 1; `max_tiers = 1` (or a single
/// distinct value) always yields a single tier with zero boundaries.
pub fn detect_tiers_by_jenks(positions: &[u64], max_tiers: usize) -> TierDetectionResult {
    let max_tiers = max_tiers.max(1);

    let mut sorted = positions.to_vec();
    sorted.sort_unstable();

    if sorted.len() < 2 {
        return build_result(&sorted, Vec::new());
    }

    let distinct = distinct_counts(&sorted);
    let k = max_tiers.min(distinct.len());
    if k <= 1 {
        return build_result(&sorted, Vec::new());
    }

    let breaks = optimal_breaks(&distinct, k);

    // Cumulative sample counts per distinct value, for accounts_above.
    let mut cumulative = Vec::with_capacity(distinct.len());
    let mut running = 0u64;
    for &(_, count) in &distinct {
        running += count;
        cumulative.push(running);
    }

    let boundaries: Vec<TierBoundary> = breaks
        .into_iter()
        .map(|b| TierBoundary {
            position: distinct[b].0,
            gap_size: distinct[b + 1].0 - distinct[b].0,
            accounts_above: cumulative[b],
        })
        .collect();

    build_result(&sorted, boundaries)
}

/// Collapse a sorted slice into (value, multiplicity) pairs.
fn distinct_counts(sorted: &[u64]) -> Vec<(u64, u64)> {
    let mut out: Vec<(u64, u64)> = Vec::new();
    for &v in sorted {
        match out.last_mut() {
            Some(last) if last.0 == v => last.1 += 1,
            _ => out.push((v, 1)),
        }
    }
    out
}

/// Run the Jenks-Caspall dynamic program over weighted distinct
/// values and return the 0-based indices of the last item of each
/// class except the final one, in ascending order (`k - 1` breaks).
///
/// Requires `2 <= k <= items.len()`.
fn optimal_breaks(items: &[(u64, u64)], k: usize) -> Vec<usize> {
    let m = items.len();

    // lower[l][j]: 1-based index of the first item of class j in the
    // optimal partition of the first l items into j classes.
    // best[l][j]: the minimal total within-class sum of squared
    // deviations for that partition.
    let mut lower = vec![vec![0usize; k + 1]; m + 1];
    let mut best = vec![vec![0.0f64; k + 1]; m + 1];

    for j in 1..=k {
        lower[1][j] = 1;
        for l in 2..=m {
            best[l][j] = f64::MAX;
        }
    }

    for l in 2..=m {
        // Sweep the last class leftward from item l, maintaining its
        // weighted sum of squared deviations incrementally.
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut weight = 0.0;
        let mut variance = 0.0;

        for offset in 1..=l {
            let idx = l - offset; // 0-based start of the trailing class
            let value = items[idx].0 as f64;
            let count = items[idx].1 as f64;

            weight += count;
            sum += value * count;
            sum_sq += value * value * count;
            variance = sum_sq - (sum * sum) / weight;

            if idx > 0 {
                for j in 2..=k {
                    let candidate = variance + best[idx][j - 1];
                    if best[l][j] >= candidate {
                        lower[l][j] = idx + 1;
                        best[l][j] = candidate;
                    }
                }
            }
        }

        lower[l][1] = 1;
        best[l][1] = variance;
    }

    // Backtrack: class j spans items lower[r][j] ..= r (1-based), so
    // the class below it ends at item lower[r][j] - 1.
    let mut breaks = Vec::with_capacity(k - 1);
    let mut right = m;
    for j in (2..=k).rev() {
        let left = lower[right][j];
        breaks.push(left - 2);
        right = left - 1;
    }
    breaks.reverse();
    breaks
}
