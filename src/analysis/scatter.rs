use crate::models::ScatterPoint;

/// Build the rank-vs-position series, downsampled for display.
///
/// Positions are sorted ascending and assigned ranks 1..N. When N
/// exceeds `max_points`, every `ceil(N / max_points)`-th point is
/// retained (deterministic stride, never random), yielding exactly
/// `ceil(N / stride)` points. The first and last original samples are
/// always preserved: if the stride would step past the final sample,
/// the last emitted point is replaced by it. Downsampling never
/// reorders points and never fabricates values. `max_points < 1` is
/// coerced to 1.
pub fn build_scatter(positions: &[u64], max_points: usize) -> Vec<ScatterPoint> {
    if positions.is_empty() {
        return Vec::new();
    }
    let max_points = max_points.max(1);

    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();

    if n <= max_points {
        return sorted
            .into_iter()
            .enumerate()
            .map(|(i, position)| ScatterPoint {
                rank: (i + 1) as u64,
                position,
            })
            .collect();
    }

    let stride = n.div_ceil(max_points);
    let mut points: Vec<ScatterPoint> = sorted
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(i, &position)| ScatterPoint {
            rank: (i + 1) as u64,
            position,
        })
        .collect();

    // Keep the tail of the distribution visible even when the stride
    // does not land on the final sample.
    if let Some(last) = points.last_mut() {
        if last.rank as usize != n {
            *last = ScatterPoint {
                rank: n as u64,
                position: sorted[n - 1],
            };
        }
    }

    points
}
