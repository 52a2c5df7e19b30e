use std::collections::{BTreeMap, HashMap};

use biometria_core::models::board::{Board, BoardRow};
use biometria_core::models::measurement::{Dimensions, MeasurementInput};
use biometria_core::models::range::Range;
use biometria_core::models::score::{MetricAge, ScoreResult};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::Calibration;
use crate::aggregate::score_subject_with;
use crate::calibration::resolve_age;
use crate::composite::resolve_composite_age;
use crate::config::ScoringConfig;
use crate::error::CalibrationError;
use crate::validation::{CalibrationIssue, CoverageGap, coverage_gaps, validate_boards};

/// A validated, immutable calibration snapshot indexed by metric.
///
/// Boards keep the order they were supplied in, so lookups behave exactly
/// like a lookup over the raw board list.
#[derive(Debug, Clone, Default)]
pub struct CalibrationTable {
    boards: Vec<Board>,
    by_metric: BTreeMap<String, Vec<usize>>,
}

/// Stored rows plus the ranges they reference.
#[derive(Debug, Deserialize)]
struct RowsFile {
    ranges: Vec<Range>,
    boards: Vec<BoardRow>,
}

/// Boards with the range already embedded.
#[derive(Debug, Deserialize)]
struct JoinedFile {
    boards: Vec<Board>,
}

impl CalibrationTable {
    /// Validate and index `boards`. Fails with every issue found.
    pub fn new(boards: Vec<Board>) -> Result<Self, CalibrationError> {
        let issues = validate_boards(&boards);
        if !issues.is_empty() {
            return Err(CalibrationError::Invalid(issues));
        }
        Ok(Self::index(boards))
    }

    /// Join stored board rows to their ranges, then validate.
    pub fn from_rows(ranges: &[Range], rows: Vec<BoardRow>) -> Result<Self, CalibrationError> {
        let by_id: HashMap<Uuid, Range> = ranges.iter().map(|r| (r.id, *r)).collect();

        let mut issues = Vec::new();
        let mut boards = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            match by_id.get(&row.range_id) {
                Some(range) => boards.push(row.into_board(*range)),
                None => issues.push(CalibrationIssue::UnknownRange {
                    index,
                    metric_name: row.metric_name,
                    range_id: row.range_id,
                }),
            }
        }

        // Board indices from validation only match row indices once every
        // row has joined.
        if !issues.is_empty() {
            return Err(CalibrationError::Invalid(issues));
        }
        Self::new(boards)
    }

    pub fn from_json(json: &str) -> Result<Self, CalibrationError> {
        // A top-level `ranges` key selects the row format.
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("ranges").is_some() {
            let file: RowsFile = serde_json::from_value(value)?;
            Self::from_rows(&file.ranges, file.boards)
        } else {
            let file: JoinedFile = serde_json::from_value(value)?;
            Self::new(file.boards)
        }
    }

    fn index(boards: Vec<Board>) -> Self {
        let mut by_metric: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, board) in boards.iter().enumerate() {
            by_metric.entry(board.metric_name.clone()).or_default().push(index);
        }

        let table = Self { boards, by_metric };
        for gap in table.coverage_gaps() {
            warn!(metric = %gap.metric_name, from = gap.from, to = gap.to, "calibration gap");
        }
        info!(
            boards = table.boards.len(),
            metrics = table.by_metric.len(),
            "calibration table loaded"
        );
        table
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Metric names with at least one board, in name order.
    pub fn metrics(&self) -> impl Iterator<Item = &str> {
        self.by_metric.keys().map(String::as_str)
    }

    pub fn contains_metric(&self, metric_name: &str) -> bool {
        self.by_metric.contains_key(metric_name)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        coverage_gaps(&self.boards)
    }

    pub fn resolve_age(&self, metric_name: &str, value: Option<f64>) -> MetricAge {
        resolve_age(metric_name, value, self)
    }

    pub fn resolve_composite_age(&self, metric_name: &str, dims: &Dimensions) -> MetricAge {
        resolve_composite_age(metric_name, dims, self)
    }

    pub fn score_subject(
        &self,
        inputs: &MeasurementInput,
        chronological_age: i32,
        config: &ScoringConfig,
    ) -> ScoreResult {
        score_subject_with(inputs, chronological_age, self, config)
    }
}

impl Calibration for CalibrationTable {
    fn boards_for<'a>(&'a self, metric_name: &'a str) -> Box<dyn Iterator<Item = &'a Board> + 'a> {
        Box::new(
            self.by_metric
                .get(metric_name)
                .into_iter()
                .flatten()
                .map(move |&i| &self.boards[i]),
        )
    }
}
