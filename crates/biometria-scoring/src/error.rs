use thiserror::Error;

use crate::validation::CalibrationIssue;

#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("calibration table has {} issue(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<CalibrationIssue>),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CalibrationError {
    pub fn issues(&self) -> &[CalibrationIssue] {
        match self {
            CalibrationError::Invalid(issues) => issues,
            CalibrationError::Serialization(_) => &[],
        }
    }
}

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(
        "rejuvenated threshold ({rejuvenated}) must be below aged threshold ({aged})"
    )]
    InvalidThresholds { rejuvenated: i32, aged: i32 },
}

fn summarize(issues: &[CalibrationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
