//! biometria-scoring
//!
//! Biophysical age scoring engine. Pure computation — no I/O. Converts raw
//! biometric measurements into per-metric biological ages by interpolating
//! over calibration boards, then aggregates and classifies the result
//! against chronological age.

pub mod aggregate;
pub mod calibration;
pub mod category;
pub mod composite;
pub mod config;
pub mod error;
pub mod table;
pub mod validation;

use biometria_core::models::board::Board;

pub use aggregate::{score_subject, score_subject_with};
pub use calibration::resolve_age;
pub use composite::resolve_composite_age;
pub use config::ScoringConfig;
pub use table::CalibrationTable;

/// A read-only calibration snapshot the engine can query by metric.
pub trait Calibration: Send + Sync {
    /// Boards for `metric_name`, in the order they were supplied.
    fn boards_for<'a>(&'a self, metric_name: &'a str) -> Box<dyn Iterator<Item = &'a Board> + 'a>;
}

impl Calibration for [Board] {
    fn boards_for<'a>(&'a self, metric_name: &'a str) -> Box<dyn Iterator<Item = &'a Board> + 'a> {
        Box::new(self.iter().filter(move |b| b.metric_name == metric_name))
    }
}

impl Calibration for Vec<Board> {
    fn boards_for<'a>(&'a self, metric_name: &'a str) -> Box<dyn Iterator<Item = &'a Board> + 'a> {
        self.as_slice().boards_for(metric_name)
    }
}
