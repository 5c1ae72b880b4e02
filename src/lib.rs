pub mod analysis;
pub mod api;
pub mod constants;
pub mod error;
pub mod models;

#[cfg(test)]
pub mod tests;

pub use analysis::*;
pub use api::serve;
pub use api::AppState;
pub use constants::*;
pub use error::Error;
pub use models::*;

use tracing_subscriber::FmtSubscriber;

/// Initialize the global tracing subscriber. Call once from main.
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
