// Submodules
pub mod common;  // Shared lookup/capping/rounding helpers
pub mod health;  // Health check endpoint

// Analysis endpoints
pub mod events;
pub mod summary;
pub mod tiers;
pub mod histogram;
pub mod scatter;
pub mod analysis;

// Re-exports
pub use health::health_check;
pub use events::list_events;
pub use summary::get_summary;
pub use tiers::get_tiers;
pub use histogram::get_histogram;
pub use scatter::get_scatter;
pub use analysis::get_analysis;
