//! Well-known metric names used as calibration keys.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::subject::Sex;

/// Calibration keys. A board's `metric_name` is one of these.
pub mod name {
    pub const MALE_FAT: &str = "male_fat";
    pub const FEMALE_FAT: &str = "female_fat";
    pub const SPORTY_MALE_FAT: &str = "sporty_male_fat";
    pub const SPORTY_FEMALE_FAT: &str = "sporty_female_fat";
    pub const BODY_MASS: &str = "body_mass";
    pub const DIGITAL_REFLEXES: &str = "digital_reflexes";
    pub const VISUAL_ACCOMMODATION: &str = "visual_accommodation";
    pub const STATIC_BALANCE: &str = "static_balance";
    pub const SKIN_HYDRATION: &str = "skin_hydration";
    pub const SYSTOLIC: &str = "systolic";
    pub const DIASTOLIC: &str = "diastolic";
}

/// Form-side alias for body fat before it is resolved per sex and athlete
/// status.
pub const FAT_ALIAS: &str = "fat";

/// How a metric is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MetricShape {
    Scalar,
    /// Three sub-measurements (`high`, `long`, `width`) averaged before lookup.
    Composite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub shape: MetricShape,
}

const fn scalar(name: &'static str, label: &'static str) -> MetricInfo {
    MetricInfo {
        name,
        label,
        shape: MetricShape::Scalar,
    }
}

const fn composite(name: &'static str, label: &'static str) -> MetricInfo {
    MetricInfo {
        name,
        label,
        shape: MetricShape::Composite,
    }
}

static CATALOG: [MetricInfo; 11] = [
    scalar(name::MALE_FAT, "Body fat (male)"),
    scalar(name::FEMALE_FAT, "Body fat (female)"),
    scalar(name::SPORTY_MALE_FAT, "Body fat (male athlete)"),
    scalar(name::SPORTY_FEMALE_FAT, "Body fat (female athlete)"),
    scalar(name::BODY_MASS, "Body mass index"),
    composite(name::DIGITAL_REFLEXES, "Digital reflexes"),
    scalar(name::VISUAL_ACCOMMODATION, "Visual accommodation"),
    composite(name::STATIC_BALANCE, "Static balance"),
    composite(name::SKIN_HYDRATION, "Skin hydration"),
    scalar(name::SYSTOLIC, "Systolic pressure"),
    scalar(name::DIASTOLIC, "Diastolic pressure"),
];

/// Every well-known metric, in report order.
pub fn catalog() -> &'static [MetricInfo] {
    &CATALOG
}

pub fn metric_info(metric_name: &str) -> Option<&'static MetricInfo> {
    CATALOG.iter().find(|m| m.name == metric_name)
}

/// Display label for a metric, falling back to the raw name for metrics
/// outside the catalog.
pub fn label(metric_name: &str) -> &str {
    metric_info(metric_name).map_or(metric_name, |m| m.label)
}

/// Body fat is calibrated separately per sex and for athletes.
pub fn fat_metric(sex: Sex, athlete: bool) -> &'static str {
    match (sex, athlete) {
        (Sex::Male, false) => name::MALE_FAT,
        (Sex::Female, false) => name::FEMALE_FAT,
        (Sex::Male, true) => name::SPORTY_MALE_FAT,
        (Sex::Female, true) => name::SPORTY_FEMALE_FAT,
    }
}
