use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Age reported for a metric that could not be scored, kept for consumers
/// that still expect a number in every slot.
pub const SENTINEL_AGE: i32 = 80;

/// Why a metric produced no biological age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UnscorableReason {
    /// No value was recorded.
    NotMeasured,
    /// The recorded value does not parse as a finite number.
    NotNumeric,
    /// The calibration snapshot has no boards for this metric.
    UnknownMetric,
    /// No board interval contains the value.
    OutOfRange,
    /// A composite metric is missing one or more of its dimensions.
    IncompleteComposite,
    /// The measurement's shape (scalar or composite) differs from the
    /// metric's catalog shape.
    ShapeMismatch,
}

impl UnscorableReason {
    pub fn describe(&self) -> &'static str {
        match self {
            UnscorableReason::NotMeasured => "not measured",
            UnscorableReason::NotNumeric => "value is not numeric",
            UnscorableReason::UnknownMetric => "no calibration for metric",
            UnscorableReason::OutOfRange => "value outside calibrated ranges",
            UnscorableReason::IncompleteComposite => "composite dimensions incomplete",
            UnscorableReason::ShapeMismatch => "scalar and composite shapes mixed up",
        }
    }
}

/// Outcome of scoring a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum MetricAge {
    Scored(i32),
    Unscorable(UnscorableReason),
}

impl MetricAge {
    pub fn age(&self) -> Option<i32> {
        match self {
            MetricAge::Scored(age) => Some(*age),
            MetricAge::Unscorable(_) => None,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, MetricAge::Scored(_))
    }

    pub fn reason(&self) -> Option<UnscorableReason> {
        match self {
            MetricAge::Scored(_) => None,
            MetricAge::Unscorable(reason) => Some(*reason),
        }
    }

    /// Numeric rendering where unscored metrics read as [`SENTINEL_AGE`].
    pub fn or_sentinel(&self) -> i32 {
        self.age().unwrap_or(SENTINEL_AGE)
    }
}

impl From<UnscorableReason> for MetricAge {
    fn from(reason: UnscorableReason) -> Self {
        MetricAge::Unscorable(reason)
    }
}

/// Deviation class of biological age from chronological age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Rejuvenated,
    Normal,
    Aged,
}

impl Category {
    /// Label used by the clinical reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Rejuvenated => "REJUVENECIDO",
            Category::Normal => "NORMAL",
            Category::Aged => "ENVEJECIDO",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricScore {
    pub metric_name: String,
    pub outcome: MetricAge,
}

impl MetricScore {
    pub fn new(metric_name: impl Into<String>, outcome: MetricAge) -> Self {
        Self {
            metric_name: metric_name.into(),
            outcome,
        }
    }

    pub fn scored(&self) -> bool {
        self.outcome.is_scored()
    }

    /// Legacy numeric age, [`SENTINEL_AGE`] when unscored.
    pub fn biological_age(&self) -> i32 {
        self.outcome.or_sentinel()
    }
}

/// The aggregate over all scored metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverallAge {
    /// Mean of the scored per-metric ages.
    pub biological_age: f64,
    /// `biological_age - chronological_age`, rounded.
    pub differential: i32,
    pub category: Category,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub chronological_age: i32,
    pub metrics: Vec<MetricScore>,
    /// `None` when no metric could be scored.
    pub overall: Option<OverallAge>,
}

impl ScoreResult {
    pub fn metric(&self, metric_name: &str) -> Option<&MetricScore> {
        self.metrics.iter().find(|m| m.metric_name == metric_name)
    }

    pub fn scored_count(&self) -> usize {
        self.metrics.iter().filter(|m| m.scored()).count()
    }
}
