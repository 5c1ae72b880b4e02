use axum::{
    extract::{State, Query},
    response::Json,
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

use crate::analysis::build_scatter;
use crate::api::handlers::common::{capped_max_points, lookup_event};
use crate::api::state::AppState;
use crate::api::types::{AnalysisQuery, ScatterResponse};

pub async fn get_scatter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<ScatterResponse>, StatusCode> {
    let max_points = capped_max_points(&params);

    info!(
        "Building scatter series for event {} capped at {} points",
        params.event_id, max_points
    );

    let event = lookup_event(&state, &params.event_id)?;
    let points = build_scatter(&event.positions, max_points);
    let excluded_points = build_scatter(&event.excluded_positions, max_points);

    info!(
        "Built scatter series with {} included and {} excluded points",
        points.len(),
        excluded_points.len()
    );

    Ok(Json(ScatterResponse {
        event_id: event.event_id.clone(),
        event_name: event.event_name.clone(),
        points,
        excluded_points,
    }))
}
