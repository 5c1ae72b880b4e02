use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::error::Error;
use crate::models::{EventSnapshot, SnapshotFile};

/// Immutable in-memory view of the queue-position snapshot, loaded
/// once at startup. Stands in for the dashboard's data store; the
/// server never writes back.
#[derive(Clone)]
pub struct AppState {
    events: HashMap<String, EventSnapshot>,
}

impl AppState {
    pub fn new(events: Vec<EventSnapshot>) -> Self {
        let events = events
            .into_iter()
            .map(|e| (e.event_id.clone(), e))
            .collect();
        Self { events }
    }

    /// Load a snapshot file: `{"events": [{event_id, event_name,
    /// positions, excluded_positions?}, ...]}`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: SnapshotFile = serde_json::from_str(&raw)?;

        if snapshot.events.is_empty() {
            return Err(Error::Snapshot(format!(
                "snapshot {} contains no events",
                path.display()
            )));
        }

        info!(
            "Loaded snapshot with {} events from {}",
            snapshot.events.len(),
            path.display()
        );

        Ok(Self::new(snapshot.events))
    }

    pub fn event(&self, event_id: &str) -> Option<&EventSnapshot> {
        self.events.get(event_id)
    }

    pub fn events(&self) -> impl Iterator<Item = &EventSnapshot> {
        self.events.values()
    }
}
