use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{EventListEntry, EventsResponse};

pub async fn list_events(State(state): State<Arc<AppState>>) -> Json<EventsResponse> {
    let mut events: Vec<EventListEntry> = state
        .events()
        .map(|e| EventListEntry {
            event_id: e.event_id.clone(),
            event_name: e.event_name.clone(),
            sample_count: e.positions.len() as u64,
            excluded_count: e.excluded_positions.len() as u64,
        })
        .collect();

    // Sort by id for consistent presentation
    events.sort_by(|a, b| a.event_id.cmp(&b.event_id));

    info!("Listed {} events", events.len());

    Json(EventsResponse { events })
}
