pub mod engine;
pub mod gap;
pub mod histogram;
pub mod jenks;
pub mod scatter;
pub mod stats;
pub mod tiers;

pub use engine::{analyze, AnalysisOptions, QueueAnalysis};
pub use gap::detect_tiers_by_gap;
pub use histogram::build_histogram;
pub use jenks::detect_tiers_by_jenks;
pub use scatter::build_scatter;
pub use stats::summarize;
pub use tiers::linearity_score;
