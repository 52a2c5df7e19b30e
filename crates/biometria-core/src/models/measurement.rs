use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::score::UnscorableReason;

/// A single raw reading as collected by the form layer.
///
/// Forms submit numbers, numeric strings or nothing at all; parsing into a
/// finite value happens at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Reading {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl Reading {
    /// Parse into a finite number.
    ///
    /// Blank text counts as not measured. A lone comma is accepted as the
    /// decimal separator (`"12,5"`).
    pub fn to_finite(&self) -> Result<f64, UnscorableReason> {
        match self {
            Reading::Missing => Err(UnscorableReason::NotMeasured),
            Reading::Number(n) if n.is_finite() => Ok(*n),
            Reading::Number(_) => Err(UnscorableReason::NotNumeric),
            Reading::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(UnscorableReason::NotMeasured);
                }
                let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
                    trimmed.replace(',', ".")
                } else {
                    trimmed.to_string()
                };
                match normalized.parse::<f64>() {
                    Ok(n) if n.is_finite() => Ok(n),
                    _ => Err(UnscorableReason::NotNumeric),
                }
            }
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.to_finite(), Err(UnscorableReason::NotMeasured))
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::Number(value)
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Reading::Text(value.to_string())
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Reading::Missing, Reading::Number)
    }
}

/// The three sub-measurements of a composite metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct Dimensions {
    #[serde(default)]
    pub high: Reading,
    #[serde(default)]
    pub long: Reading,
    #[serde(default)]
    pub width: Reading,
}

impl Dimensions {
    pub fn new(high: impl Into<Reading>, long: impl Into<Reading>, width: impl Into<Reading>) -> Self {
        Self {
            high: high.into(),
            long: long.into(),
            width: width.into(),
        }
    }

    /// Arithmetic mean of the three dimensions. Every dimension must parse;
    /// there is no partial averaging.
    pub fn mean(&self) -> Result<f64, UnscorableReason> {
        let parsed = [&self.high, &self.long, &self.width].map(Reading::to_finite);
        if parsed.iter().all(|p| matches!(p, Err(UnscorableReason::NotMeasured))) {
            return Err(UnscorableReason::NotMeasured);
        }
        let mut sum = 0.0;
        for value in parsed {
            sum += value.map_err(|_| UnscorableReason::IncompleteComposite)?;
        }
        Ok(sum / 3.0)
    }
}

/// One metric's measurement: either a scalar reading or a three-dimension
/// composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Measurement {
    Composite(Dimensions),
    Scalar(Reading),
}

impl From<Reading> for Measurement {
    fn from(value: Reading) -> Self {
        Measurement::Scalar(value)
    }
}

impl From<Dimensions> for Measurement {
    fn from(value: Dimensions) -> Self {
        Measurement::Composite(value)
    }
}

/// A subject's measurement set keyed by metric name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementInput {
    metrics: BTreeMap<String, Measurement>,
}

impl MeasurementInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `metric -> reading | {high, long, width}`.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn scalar(mut self, metric: impl Into<String>, reading: impl Into<Reading>) -> Self {
        self.insert(metric, Measurement::Scalar(reading.into()));
        self
    }

    pub fn composite(mut self, metric: impl Into<String>, dims: Dimensions) -> Self {
        self.insert(metric, Measurement::Composite(dims));
        self
    }

    pub fn insert(&mut self, metric: impl Into<String>, measurement: Measurement) -> Option<Measurement> {
        self.metrics.insert(metric.into(), measurement)
    }

    pub fn remove(&mut self, metric: &str) -> Option<Measurement> {
        self.metrics.remove(metric)
    }

    pub fn get(&self, metric: &str) -> Option<&Measurement> {
        self.metrics.get(metric)
    }

    /// Metrics in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Measurement)> {
        self.metrics.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl FromIterator<(String, Measurement)> for MeasurementInput {
    fn from_iter<T: IntoIterator<Item = (String, Measurement)>>(iter: T) -> Self {
        Self {
            metrics: iter.into_iter().collect(),
        }
    }
}
