use axum::{
    extract::{State, Query},
    response::Json,
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

use crate::analysis::build_histogram;
use crate::api::handlers::common::{capped_bucket_count, lookup_event, round_histogram};
use crate::api::state::AppState;
use crate::api::types::{AnalysisQuery, HistogramResponse};

pub async fn get_histogram(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<HistogramResponse>, StatusCode> {
    let bucket_count = capped_bucket_count(&params);

    info!(
        "Building position histogram for event {} with {} buckets",
        params.event_id, bucket_count
    );

    let event = lookup_event(&state, &params.event_id)?;
    let buckets = build_histogram(&event.positions, bucket_count);
    let total_observations = buckets.iter().map(|b| b.count).sum();

    info!(
        "Built histogram with {} buckets over {} observations",
        buckets.len(),
        total_observations
    );

    Ok(Json(HistogramResponse {
        event_id: event.event_id.clone(),
        event_name: event.event_name.clone(),
        buckets: round_histogram(buckets),
        total_observations,
    }))
}
