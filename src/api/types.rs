use serde::{Deserialize, Serialize};

use crate::models::{
    DistributionStats, HistogramBucket, ScatterPoint, TierDetectionResult,
};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Shared query shape for every per-event analysis endpoint. Unused
/// knobs are simply ignored by endpoints that do not consume them.
#[derive(Debug, Deserialize)]
pub struct AnalysisQuery {
    pub event_id: String,
    pub strategy: Option<String>,
    pub max_tiers: Option<usize>,
    pub bucket_count: Option<usize>,
    pub max_points: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct EventListEntry {
    pub event_id: String,
    pub event_name: String,
    pub sample_count: u64,
    pub excluded_count: u64,
}

#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub events: Vec<EventListEntry>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub event_id: String,
    pub event_name: String,
    pub stats: DistributionStats,
}

#[derive(Debug, Serialize)]
pub struct TiersResponse {
    pub event_id: String,
    pub event_name: String,
    pub strategy: String,
    pub tiers: TierDetectionResult,
}

#[derive(Debug, Serialize)]
pub struct HistogramResponse {
    pub event_id: String,
    pub event_name: String,
    pub buckets: Vec<HistogramBucket>,
    pub total_observations: u64,
}

#[derive(Debug, Serialize)]
pub struct ScatterResponse {
    pub event_id: String,
    pub event_name: String,
    pub points: Vec<ScatterPoint>,
    pub excluded_points: Vec<ScatterPoint>,
}

/// The composite response: every analysis view for one event.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub event_id: String,
    pub event_name: String,
    pub strategy: String,
    pub stats: DistributionStats,
    pub tiers: TierDetectionResult,
    pub histogram: Vec<HistogramBucket>,
    pub scatter: Vec<ScatterPoint>,
    pub excluded_scatter: Vec<ScatterPoint>,
    pub excluded_count: u64,
}
