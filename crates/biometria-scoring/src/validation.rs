use std::collections::BTreeMap;

use biometria_core::models::board::Board;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// A single defect in a calibration table.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalibrationIssue {
    #[error("board {index}: metric name is empty")]
    EmptyMetricName { index: usize },

    #[error("board {index} ({metric_name}): value bounds must be finite")]
    NonFiniteBound { index: usize, metric_name: String },

    #[error("board {index} ({metric_name}): age band {min_age}..{max_age} is inverted")]
    InvertedAgeBand {
        index: usize,
        metric_name: String,
        min_age: i32,
        max_age: i32,
    },

    #[error("board {index} ({metric_name}): unknown range id {range_id}")]
    UnknownRange {
        index: usize,
        metric_name: String,
        range_id: Uuid,
    },

    #[error("{metric_name}: boards {first} and {second} overlap on [{lo}, {hi}]")]
    Overlap {
        metric_name: String,
        first: usize,
        second: usize,
        lo: f64,
        hi: f64,
    },
}

/// An uncovered stretch between two consecutive intervals of a metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageGap {
    pub metric_name: String,
    pub from: f64,
    pub to: f64,
}

/// Check a board set. Returns every issue found, not just the first.
///
/// Intervals that merely touch at an endpoint are contiguous, not
/// overlapping.
pub fn validate_boards(boards: &[Board]) -> Vec<CalibrationIssue> {
    let mut issues = Vec::new();

    for (index, board) in boards.iter().enumerate() {
        if board.metric_name.trim().is_empty() {
            issues.push(CalibrationIssue::EmptyMetricName { index });
        }
        if !board.value_min.is_finite() || !board.value_max.is_finite() {
            issues.push(CalibrationIssue::NonFiniteBound {
                index,
                metric_name: board.metric_name.clone(),
            });
        }
        if board.range.min_age > board.range.max_age {
            issues.push(CalibrationIssue::InvertedAgeBand {
                index,
                metric_name: board.metric_name.clone(),
                min_age: board.range.min_age,
                max_age: board.range.max_age,
            });
        }
    }

    for (metric_name, indices) in group_by_metric(boards) {
        for (i, &first) in indices.iter().enumerate() {
            for &second in &indices[i + 1..] {
                if let Some((lo, hi)) = overlap(boards[first].interval(), boards[second].interval()) {
                    issues.push(CalibrationIssue::Overlap {
                        metric_name: metric_name.to_string(),
                        first,
                        second,
                        lo,
                        hi,
                    });
                }
            }
        }
    }

    issues
}

/// Gaps between consecutive intervals of each metric, in metric order.
pub fn coverage_gaps(boards: &[Board]) -> Vec<CoverageGap> {
    let mut gaps = Vec::new();
    for (metric_name, indices) in group_by_metric(boards) {
        let mut intervals: Vec<(f64, f64)> = indices
            .iter()
            .map(|&i| boards[i].interval())
            .filter(|(lo, hi)| lo.is_finite() && hi.is_finite())
            .collect();
        intervals.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut covered_to: Option<f64> = None;
        for (lo, hi) in intervals {
            if let Some(end) = covered_to
                && lo > end
            {
                gaps.push(CoverageGap {
                    metric_name: metric_name.to_string(),
                    from: end,
                    to: lo,
                });
            }
            covered_to = Some(covered_to.map_or(hi, |end| end.max(hi)));
        }
    }
    gaps
}

fn group_by_metric(boards: &[Board]) -> BTreeMap<&str, Vec<usize>> {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, board) in boards.iter().enumerate() {
        groups.entry(board.metric_name.as_str()).or_default().push(index);
    }
    groups
}

fn overlap(a: (f64, f64), b: (f64, f64)) -> Option<(f64, f64)> {
    if !(a.0.is_finite() && a.1.is_finite() && b.0.is_finite() && b.1.is_finite()) {
        return None;
    }
    let lo = a.0.max(b.0);
    let hi = a.1.min(b.1);
    if lo > hi {
        return None;
    }
    if lo < hi {
        return Some((lo, hi));
    }
    // A single shared point is only ambiguous when one side is a point board.
    let a_point = a.0 == a.1;
    let b_point = b.0 == b.1;
    (a_point || b_point).then_some((lo, hi))
}
