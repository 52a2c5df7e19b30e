use biometria_core::models::measurement::Dimensions;
use biometria_core::models::score::MetricAge;
use tracing::debug;

use crate::Calibration;
use crate::calibration::resolve_age;

/// Biological age for a three-dimension metric: the mean of `high`, `long`
/// and `width` is looked up as a single value.
///
/// All three dimensions must parse; otherwise the metric is unscorable.
pub fn resolve_composite_age<C: Calibration + ?Sized>(
    metric_name: &str,
    dims: &Dimensions,
    boards: &C,
) -> MetricAge {
    match dims.mean() {
        Ok(mean) => resolve_age(metric_name, Some(mean), boards),
        Err(reason) => {
            debug!(metric = metric_name, ?reason, "composite metric not averaged");
            reason.into()
        }
    }
}
