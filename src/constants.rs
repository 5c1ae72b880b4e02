//! Tunable analysis constants.
//!
//! The detection thresholds below were chosen to match observed tier
//! structure in real queue-position datasets; treat them as knobs to
//! re-validate when the data shifts, not as fixed law.

/// Default tier budget for both detection strategies.
pub const DEFAULT_MAX_TIERS: usize = 4;

/// Default number of histogram buckets.
pub const DEFAULT_BUCKET_COUNT: usize = 20;

/// Default display cap for scatter series.
pub const DEFAULT_MAX_POINTS: usize = 500;

/// Hard caps applied by the API layer before calling into the engine.
pub const MAX_TIERS_CAP: usize = 10;
pub const BUCKET_COUNT_CAP: usize = 100;
pub const MAX_POINTS_CAP: usize = 2_000;

/// A gap qualifies as a tier-boundary candidate when it exceeds
/// `mean(gaps) + GAP_OUTLIER_MULTIPLIER * stddev(gaps)`.
pub const GAP_OUTLIER_MULTIPLIER: f64 = 1.5;

/// Rank-vs-position R-squared at or above which a distribution is
/// reported as linear regardless of detected boundaries.
pub const LINEARITY_THRESHOLD: f64 = 0.97;

/// Boundary count at which a distribution is reported as stepped.
pub const STEPPED_BOUNDARY_COUNT: usize = 4;

/// With two or more boundaries, any single gap wider than this
/// fraction of the total range also promotes the result to stepped.
pub const STEPPED_GAP_FRACTION: f64 = 0.5;
