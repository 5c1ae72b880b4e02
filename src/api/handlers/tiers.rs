use axum::{
    extract::{State, Query},
    response::Json,
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

use crate::analysis::{detect_tiers_by_gap, detect_tiers_by_jenks};
use crate::api::handlers::common::{capped_max_tiers, lookup_event, parse_strategy, round_tiers};
use crate::api::state::AppState;
use crate::api::types::{AnalysisQuery, TiersResponse};
use crate::models::TierStrategy;

pub async fn get_tiers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<TiersResponse>, StatusCode> {
    let strategy = parse_strategy(params.strategy.as_deref())?;
    let max_tiers = capped_max_tiers(&params);

    info!(
        "Detecting tiers for event {} - strategy: {}, max tiers: {}",
        params.event_id, strategy, max_tiers
    );

    let event = lookup_event(&state, &params.event_id)?;

    let tiers = match strategy {
        TierStrategy::Gap => detect_tiers_by_gap(&event.positions, max_tiers),
        TierStrategy::Jenks => detect_tiers_by_jenks(&event.positions, max_tiers),
    };

    info!(
        "Detected {} distribution with {} boundaries for event {}",
        tiers.distribution_type,
        tiers.boundaries.len(),
        params.event_id
    );

    Ok(Json(TiersResponse {
        event_id: event.event_id.clone(),
        event_name: event.event_name.clone(),
        strategy: strategy.to_string(),
        tiers: round_tiers(tiers),
    }))
}
