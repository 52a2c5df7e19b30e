use biometria_core::metrics::{self, MetricShape};
use biometria_core::models::board::Board;
use biometria_core::models::measurement::{Measurement, Reading};
use biometria_core::models::score::{MetricAge, UnscorableReason};
use tracing::debug;

use crate::Calibration;
use crate::composite::resolve_composite_age;

/// Biological age for a single metric value.
///
/// The first board for `metric_name` whose normalized interval contains
/// `value` (inclusive on both ends) is interpolated. Boards are tried in the
/// order the calibration supplies them.
pub fn resolve_age<C: Calibration + ?Sized>(
    metric_name: &str,
    value: Option<f64>,
    boards: &C,
) -> MetricAge {
    let Some(value) = value else {
        return UnscorableReason::NotMeasured.into();
    };
    if !value.is_finite() {
        return UnscorableReason::NotNumeric.into();
    }

    let mut candidates = boards.boards_for(metric_name).peekable();
    if candidates.peek().is_none() {
        debug!(metric = metric_name, "no calibration boards for metric");
        return UnscorableReason::UnknownMetric.into();
    }

    match candidates.find(|b| b.contains(value)) {
        Some(board) => {
            let age = interpolate(board, value);
            debug!(metric = metric_name, value, age, "resolved metric age");
            MetricAge::Scored(age)
        }
        None => {
            debug!(metric = metric_name, value, "value outside calibrated ranges");
            UnscorableReason::OutOfRange.into()
        }
    }
}

/// Resolve a raw form reading, parsing it first.
pub fn resolve_reading<C: Calibration + ?Sized>(
    metric_name: &str,
    reading: &Reading,
    boards: &C,
) -> MetricAge {
    match reading.to_finite() {
        Ok(value) => resolve_age(metric_name, Some(value), boards),
        Err(reason) => reason.into(),
    }
}

/// Dispatch on the measurement's shape.
///
/// Catalog metrics must arrive in their catalog shape; metrics outside the
/// catalog are scored as given.
pub fn resolve_measurement<C: Calibration + ?Sized>(
    metric_name: &str,
    measurement: &Measurement,
    boards: &C,
) -> MetricAge {
    let given = match measurement {
        Measurement::Scalar(_) => MetricShape::Scalar,
        Measurement::Composite(_) => MetricShape::Composite,
    };
    if let Some(info) = metrics::metric_info(metric_name)
        && info.shape != given
    {
        debug!(metric = metric_name, expected = ?info.shape, ?given, "measurement shape mismatch");
        return UnscorableReason::ShapeMismatch.into();
    }

    match measurement {
        Measurement::Scalar(reading) => resolve_reading(metric_name, reading, boards),
        Measurement::Composite(dims) => resolve_composite_age(metric_name, dims, boards),
    }
}

/// Map `value` linearly from the board's value interval onto its age range.
///
/// The caller guarantees `value` lies inside the board's interval. Flat age
/// bands and zero-width value intervals both yield `range.min_age`.
pub fn interpolate(board: &Board, value: f64) -> i32 {
    let range = board.range;
    if range.is_flat() {
        return range.min_age;
    }

    let (lo, hi) = board.interval();
    let width = hi - lo;
    if width <= 0.0 {
        return range.min_age;
    }

    let mut proportion = (value - lo) / width;
    if board.inverse {
        proportion = 1.0 - proportion;
    }

    let span = f64::from(range.max_age) - f64::from(range.min_age);
    let age = (f64::from(range.min_age) + proportion * span).round() as i32;

    // Stored bands may be inverted; clamp needs min <= max.
    let youngest = range.min_age.min(range.max_age);
    let oldest = range.min_age.max(range.max_age);
    age.clamp(youngest, oldest)
}
