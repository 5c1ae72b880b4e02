use serde::{Serialize, Deserialize};

use crate::analysis::{
    build_histogram, build_scatter, detect_tiers_by_gap, detect_tiers_by_jenks, summarize,
};
use crate::constants::{DEFAULT_BUCKET_COUNT, DEFAULT_MAX_POINTS, DEFAULT_MAX_TIERS};
use crate::models::{
    DistributionStats, HistogramBucket, ScatterPoint, TierDetectionResult, TierStrategy,
};

/// Display-oriented knobs for one analysis call.
///
/// Values are passed explicitly on every call; there is no shared
/// mutable configuration. Out-of-range knobs are coerced, never
/// rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub strategy: TierStrategy,
    pub max_tiers: usize,
    pub bucket_count: usize,
    pub max_points: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            strategy: TierStrategy::Gap,
            max_tiers: DEFAULT_MAX_TIERS,
            bucket_count: DEFAULT_BUCKET_COUNT,
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

/// The complete analysis for one event: every derived view of the
/// same position sequence, assembled once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueAnalysis {
    pub stats: DistributionStats,
    pub tiers: TierDetectionResult,
    pub histogram: Vec<HistogramBucket>,
    pub scatter: Vec<ScatterPoint>,
    /// Excluded samples get their own rank space starting at 1; they
    /// are never interleaved with the included series.
    pub excluded_scatter: Vec<ScatterPoint>,
}

/// Run every analysis component over the included positions and
/// assemble one immutable result.
///
/// Each component consumes the same input independently; none depends
/// on another's output. Empty input is a first-class case: all-zero
/// stats, a single trivial tier, and empty histogram/scatter series.
pub fn analyze(included: &[u64], excluded: &[u64], options: &AnalysisOptions) -> QueueAnalysis {
    let stats = summarize(included);

    let tiers = match options.strategy {
        TierStrategy::Gap => detect_tiers_by_gap(included, options.max_tiers),
        TierStrategy::Jenks => detect_tiers_by_jenks(included, options.max_tiers),
    };

    QueueAnalysis {
        stats,
        tiers,
        histogram: build_histogram(included, options.bucket_count),
        scatter: build_scatter(included, options.max_points),
        excluded_scatter: build_scatter(excluded, options.max_points),
    }
}
