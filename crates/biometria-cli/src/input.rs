//! Loading calibration tables and subject measurements from disk.

use std::path::Path;

use biometria_core::metrics::{FAT_ALIAS, fat_metric};
use biometria_core::models::measurement::MeasurementInput;
use biometria_core::models::subject::{Sex, chronological_age};
use biometria_scoring::CalibrationTable;
use biometria_scoring::error::CalibrationError;
use jiff::civil::Date;

pub fn load_calibration(path: &Path) -> eyre::Result<CalibrationTable> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read calibration at {}: {e}", path.display()))?;
    CalibrationTable::from_json(&contents).map_err(|e| match e {
        CalibrationError::Invalid(issues) => {
            for issue in &issues {
                tracing::error!(%issue, "invalid calibration");
            }
            eyre::eyre!(
                "calibration at {} has {} issue(s)",
                path.display(),
                issues.len()
            )
        }
        other => eyre::eyre!("failed to parse calibration at {}: {other}", path.display()),
    })
}

pub fn load_measurements(path: &Path) -> eyre::Result<MeasurementInput> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read measurements at {}: {e}", path.display()))?;
    Ok(MeasurementInput::from_json(&contents)?)
}

/// Rename a generic `fat` entry to the calibration key for the subject.
///
/// Without a known sex the alias is left in place and scores as an unknown
/// metric.
pub fn resolve_fat_alias(input: &mut MeasurementInput, sex: Option<Sex>, athlete: bool) {
    let Some(sex) = sex else {
        if input.get(FAT_ALIAS).is_some() {
            tracing::warn!("`fat` measurement given without --sex; it will not be scored");
        }
        return;
    };
    if let Some(measurement) = input.remove(FAT_ALIAS) {
        let metric = fat_metric(sex, athlete);
        tracing::debug!(metric, "resolved fat measurement");
        input.insert(metric, measurement);
    }
}

/// Chronological age from either an explicit age or a birth date.
///
/// `on` defaults to today's date in the system time zone.
pub fn subject_age(age: Option<i32>, birth_date: Option<Date>, on: Option<Date>) -> eyre::Result<i32> {
    match (age, birth_date) {
        (Some(age), None) => Ok(age),
        (None, Some(birth)) => {
            let on = on.unwrap_or_else(|| jiff::Zoned::now().date());
            Ok(chronological_age(birth, on)?)
        }
        (Some(_), Some(_)) => Err(eyre::eyre!("give either --age or --birth-date, not both")),
        (None, None) => Err(eyre::eyre!("one of --age or --birth-date is required")),
    }
}
