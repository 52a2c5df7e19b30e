use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;

/// Classification thresholds applied to the rounded differential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ScoringConfig {
    /// Differentials at or below this are rejuvenated.
    pub rejuvenated_threshold: i32,
    /// Differentials at or above this are aged.
    pub aged_threshold: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rejuvenated_threshold: -7,
            aged_threshold: 7,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.rejuvenated_threshold >= self.aged_threshold {
            return Err(ScoringError::InvalidThresholds {
                rejuvenated: self.rejuvenated_threshold,
                aged: self.aged_threshold,
            });
        }
        Ok(())
    }
}
