use crate::models::DistributionStats;

/// Reduce a sequence of queue positions to summary statistics.
///
/// Empty input yields the all-zero default. The standard deviation is
/// the population form (divide by `count`): the observed positions
/// are the full population of interest, not a subsample. The median
/// is never rounded; rounding is a presentation concern of the caller.
pub fn summarize(positions: &[u64]) -> DistributionStats {
    if positions.is_empty() {
        return DistributionStats::default();
    }

    let mut sorted = positions.to_vec();
    sorted.sort_unstable();

    let count = sorted.len();
    let min = sorted[0];
    let max = sorted[count - 1];

    let mean = sorted.iter().map(|&p| p as f64).sum::<f64>() / count as f64;

    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    };

    let sum_sq_dev = sorted
        .iter()
        .map(|&p| {
            let delta = p as f64 - mean;
            delta * delta
        })
        .sum::<f64>();
    let std_dev = (sum_sq_dev / count as f64).sqrt();

    DistributionStats {
        count: count as u64,
        min,
        max,
        mean,
        median,
        std_dev,
        range: max - min,
    }
}
