use axum::{
    extract::{State, Query},
    response::Json,
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

use crate::analysis::{analyze, AnalysisOptions};
use crate::api::handlers::common::{
    capped_bucket_count, capped_max_points, capped_max_tiers, lookup_event, parse_strategy,
    round_histogram, round_stats, round_tiers,
};
use crate::api::state::AppState;
use crate::api::types::{AnalysisQuery, AnalysisResponse};

/// The composite endpoint the dashboard drives: one call, every
/// analysis view for the selected event.
pub async fn get_analysis(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<AnalysisResponse>, StatusCode> {
    let options = AnalysisOptions {
        strategy: parse_strategy(params.strategy.as_deref())?,
        max_tiers: capped_max_tiers(&params),
        bucket_count: capped_bucket_count(&params),
        max_points: capped_max_points(&params),
    };

    info!(
        "Running full analysis for event {} - strategy: {}, max tiers: {}, buckets: {}, point cap: {}",
        params.event_id, options.strategy, options.max_tiers, options.bucket_count,
        options.max_points
    );

    let event = lookup_event(&state, &params.event_id)?;
    let result = analyze(&event.positions, &event.excluded_positions, &options);

    info!(
        "Analysis complete for event {}: {} samples, {} distribution, {} tiers",
        params.event_id,
        result.stats.count,
        result.tiers.distribution_type,
        result.tiers.tier_labels.len()
    );

    Ok(Json(AnalysisResponse {
        event_id: event.event_id.clone(),
        event_name: event.event_name.clone(),
        strategy: options.strategy.to_string(),
        stats: round_stats(result.stats),
        tiers: round_tiers(result.tiers),
        histogram: round_histogram(result.histogram),
        scatter: result.scatter,
        excluded_scatter: result.excluded_scatter,
        excluded_count: event.excluded_positions.len() as u64,
    }))
}
