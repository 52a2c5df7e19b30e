use biometria_core::models::measurement::MeasurementInput;
use biometria_core::models::score::{MetricScore, OverallAge, ScoreResult};
use tracing::info;

use crate::Calibration;
use crate::calibration::resolve_measurement;
use crate::category::assess;
use crate::config::ScoringConfig;

/// Score every metric in `inputs` with the default thresholds.
pub fn score_subject<C: Calibration + ?Sized>(
    inputs: &MeasurementInput,
    chronological_age: i32,
    boards: &C,
) -> ScoreResult {
    score_subject_with(inputs, chronological_age, boards, &ScoringConfig::default())
}

pub fn score_subject_with<C: Calibration + ?Sized>(
    inputs: &MeasurementInput,
    chronological_age: i32,
    boards: &C,
    config: &ScoringConfig,
) -> ScoreResult {
    let metrics: Vec<MetricScore> = inputs
        .iter()
        .map(|(name, measurement)| MetricScore::new(name, resolve_measurement(name, measurement, boards)))
        .collect();

    let overall = overall_age(&metrics, chronological_age, config);

    match &overall {
        Some(o) => info!(
            metrics = metrics.len(),
            scored = metrics.iter().filter(|m| m.scored()).count(),
            biological_age = o.biological_age,
            differential = o.differential,
            category = o.category.label(),
            "scored subject"
        ),
        None => info!(metrics = metrics.len(), "no metric could be scored"),
    }

    ScoreResult {
        chronological_age,
        metrics,
        overall,
    }
}

/// Mean of the scored metric ages, classified against `chronological_age`.
///
/// Unscored metrics do not contribute. Returns `None` when nothing was
/// scored.
pub fn overall_age(
    metrics: &[MetricScore],
    chronological_age: i32,
    config: &ScoringConfig,
) -> Option<OverallAge> {
    let ages: Vec<f64> = metrics
        .iter()
        .filter_map(|m| m.outcome.age())
        .map(f64::from)
        .collect();
    if ages.is_empty() {
        return None;
    }
    let biological_age = ages.iter().sum::<f64>() / ages.len() as f64;
    Some(assess(biological_age, chronological_age, config))
}
