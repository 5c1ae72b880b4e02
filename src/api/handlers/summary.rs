use axum::{
    extract::{State, Query},
    response::Json,
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

use crate::analysis::summarize;
use crate::api::handlers::common::{lookup_event, round_stats};
use crate::api::state::AppState;
use crate::api::types::{AnalysisQuery, SummaryResponse};

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<SummaryResponse>, StatusCode> {
    info!("Computing position summary for event: {}", params.event_id);

    let event = lookup_event(&state, &params.event_id)?;
    let stats = summarize(&event.positions);

    info!(
        "Summarized {} positions for event {} (range {}..{})",
        stats.count, params.event_id, stats.min, stats.max
    );

    Ok(Json(SummaryResponse {
        event_id: event.event_id.clone(),
        event_name: event.event_name.clone(),
        stats: round_stats(stats),
    }))
}
