use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

/// Summary statistics for one set of queue positions.
///
/// All fields are derived from the input sequence; an empty input
/// produces the all-zero default rather than NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    pub count: u64,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub range: u64,
}

impl Default for DistributionStats {
    fn default() -> Self {
        Self {
            count: 0,
            min: 0,
            max: 0,
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            range: 0,
        }
    }
}

/// The upper edge of one detected tier.
///
/// `position` is the last queue position inside the tier, `gap_size`
/// the numeric distance to the first position of the next tier (0 for
/// the final tier), and `accounts_above` the number of samples at or
/// below `position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBoundary {
    pub position: u64,
    pub gap_size: u64,
    pub accounts_above: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionType {
    Linear,
    Tiered,
    Stepped,
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionType::Linear => write!(f, "linear"),
            DistributionType::Tiered => write!(f, "tiered"),
            DistributionType::Stepped => write!(f, "stepped"),
        }
    }
}

/// Output contract shared by both tier-detection strategies.
///
/// `tier_labels` always has `boundaries.len() + 1` entries, ordered
/// from the lowest (best) positions upward. `linearity_score` is the
/// R-squared of a rank-vs-position regression, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDetectionResult {
    pub distribution_type: DistributionType,
    pub linearity_score: f64,
    pub message: String,
    pub tier_labels: Vec<String>,
    pub boundaries: Vec<TierBoundary>,
}

/// One equal-width frequency bucket over the position range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub range_start: f64,
    pub range_end: f64,
    pub count: u64,
}

/// A rank-vs-position pair; `rank` is the 1-based ordinal of the
/// sample in ascending-position order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub rank: u64,
    pub position: u64,
}

/// Which tier-detection strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierStrategy {
    #[default]
    Gap,
    Jenks,
}

impl fmt::Display for TierStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierStrategy::Gap => write!(f, "gap"),
            TierStrategy::Jenks => write!(f, "jenks"),
        }
    }
}

impl FromStr for TierStrategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gap" => Ok(TierStrategy::Gap),
            "jenks" => Ok(TierStrategy::Jenks),
            other => Err(crate::Error::Config(format!(
                "unknown tier strategy: {other}"
            ))),
        }
    }
}

/// Queue positions captured for one event, as loaded from a snapshot
/// file. Excluded positions were flagged out-of-band by the dashboard
/// and are analyzed in their own rank space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub event_id: String,
    pub event_name: String,
    pub positions: Vec<u64>,
    #[serde(default)]
    pub excluded_positions: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub events: Vec<EventSnapshot>,
}
