use crate::models::HistogramBucket;

/// Bucket positions into `bucket_count` equal-width intervals over
/// `[min, max]`.
///
/// Every bucket is half-open `[start, start + width)` except the
/// final one, which is closed on the right so `max` is counted. When
/// all values are identical a single degenerate bucket spans
/// `[min, max]` regardless of `bucket_count`. `bucket_count < 1` is
/// coerced to 1; empty input yields no buckets.
pub fn build_histogram(positions: &[u64], bucket_count: usize) -> Vec<HistogramBucket> {
    if positions.is_empty() {
        return Vec::new();
    }
    let bucket_count = bucket_count.max(1);

    let min = *positions.iter().min().unwrap_or(&0);
    let max = *positions.iter().max().unwrap_or(&0);

    if min == max {
        return vec![HistogramBucket {
            range_start: min as f64,
            range_end: max as f64,
            count: positions.len() as u64,
        }];
    }

    let width = (max - min) as f64 / bucket_count as f64;
    let mut counts = vec![0u64; bucket_count];
    for &p in positions {
        let idx = (((p - min) as f64) / width) as usize;
        // max lands exactly on the upper edge; fold it into the last bucket
        counts[idx.min(bucket_count - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBucket {
            range_start: min as f64 + i as f64 * width,
            range_end: min as f64 + (i + 1) as f64 * width,
            count,
        })
        .collect()
}
