use axum::http::StatusCode;
use tracing::warn;

use crate::api::state::AppState;
use crate::api::types::AnalysisQuery;
use crate::constants::{
    BUCKET_COUNT_CAP, DEFAULT_BUCKET_COUNT, DEFAULT_MAX_POINTS, DEFAULT_MAX_TIERS,
    MAX_POINTS_CAP, MAX_TIERS_CAP,
};
use crate::models::{
    DistributionStats, EventSnapshot, HistogramBucket, TierDetectionResult, TierStrategy,
};

/// Resolve an event id or reply 404.
pub fn lookup_event<'a>(
    state: &'a AppState,
    event_id: &str,
) -> Result<&'a EventSnapshot, StatusCode> {
    state.event(event_id).ok_or_else(|| {
        warn!("Unknown event id requested: {}", event_id);
        StatusCode::NOT_FOUND
    })
}

/// Parse the strategy parameter, defaulting to gap detection.
/// Unrecognized strategies are a client error.
pub fn parse_strategy(raw: Option<&str>) -> Result<TierStrategy, StatusCode> {
    match raw {
        None => Ok(TierStrategy::Gap),
        Some(s) => s.parse().map_err(|_| {
            warn!("Unknown tier strategy requested: {}", s);
            StatusCode::BAD_REQUEST
        }),
    }
}

/// Clamp a display knob into `1..=cap`, falling back to its default.
pub fn clamp_knob(value: Option<usize>, default: usize, cap: usize) -> usize {
    value.unwrap_or(default).clamp(1, cap)
}

pub fn capped_max_tiers(query: &AnalysisQuery) -> usize {
    clamp_knob(query.max_tiers, DEFAULT_MAX_TIERS, MAX_TIERS_CAP)
}

pub fn capped_bucket_count(query: &AnalysisQuery) -> usize {
    clamp_knob(query.bucket_count, DEFAULT_BUCKET_COUNT, BUCKET_COUNT_CAP)
}

pub fn capped_max_points(query: &AnalysisQuery) -> usize {
    clamp_knob(query.max_points, DEFAULT_MAX_POINTS, MAX_POINTS_CAP)
}

/// Round to two decimals for transport; the engine itself never rounds.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round_stats(mut stats: DistributionStats) -> DistributionStats {
    stats.mean = round2(stats.mean);
    stats.median = round2(stats.median);
    stats.std_dev = round2(stats.std_dev);
    stats
}

pub fn round_tiers(mut tiers: TierDetectionResult) -> TierDetectionResult {
    tiers.linearity_score = round2(tiers.linearity_score);
    tiers
}

pub fn round_histogram(mut buckets: Vec<HistogramBucket>) -> Vec<HistogramBucket> {
    for bucket in &mut buckets {
        bucket.range_start = round2(bucket.range_start);
        bucket.range_end = round2(bucket.range_end);
    }
    buckets
}
