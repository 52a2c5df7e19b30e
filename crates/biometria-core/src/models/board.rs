use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::range::Range;

/// A calibration entry: one metric's measured-value interval mapped onto an
/// age range.
///
/// `value_min` and `value_max` are kept as stored and may be out of numeric
/// order; use [`Board::interval`] for the normalized bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Board {
    pub metric_name: String,
    pub value_min: f64,
    pub value_max: f64,
    pub range: Range,
    /// Larger values map to younger ages within the interval.
    #[serde(default)]
    pub inverse: bool,
}

impl Board {
    pub fn new(metric_name: impl Into<String>, value_min: f64, value_max: f64, range: Range) -> Self {
        Self {
            metric_name: metric_name.into(),
            value_min,
            value_max,
            range,
            inverse: false,
        }
    }

    pub fn inverted(mut self) -> Self {
        self.inverse = true;
        self
    }

    /// Normalized `(lo, hi)` bounds of the value interval.
    pub fn interval(&self) -> (f64, f64) {
        (
            self.value_min.min(self.value_max),
            self.value_min.max(self.value_max),
        )
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = self.interval();
        value >= lo && value <= hi
    }
}

/// Storage shape of a [`Board`]: the range is referenced by id and joined
/// separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BoardRow {
    pub metric_name: String,
    pub value_min: f64,
    pub value_max: f64,
    pub range_id: Uuid,
    #[serde(default)]
    pub inverse: bool,
}

impl BoardRow {
    pub fn into_board(self, range: Range) -> Board {
        Board {
            metric_name: self.metric_name,
            value_min: self.value_min,
            value_max: self.value_max,
            range,
            inverse: self.inverse,
        }
    }
}
