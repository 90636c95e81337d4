//! Project split validation.
//!
//! A split divides one category's recorded hours across multiple projects.
//! The binding invariant is the exact-sum rule: the proposed rows must add
//! up to the category total within [`SPLIT_SUM_TOLERANCE`], with no
//! duplicate projects and positive hours on every row. The check runs on
//! the engine side and is never trusted from client input alone.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SplitError;

/// Floating-point tolerance for the split sum invariant, in hours.
pub const SPLIT_SUM_TOLERANCE: f64 = 0.01;

/// One proposed row of a split: a project and the hours assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitEntry {
    /// Project the hours are assigned to
    pub project_id: String,
    /// Hours assigned (must be positive, at most the category total)
    #[serde(default)]
    pub hours: f64,
}

impl SplitEntry {
    /// Create a new split row.
    pub fn new(project_id: impl Into<String>, hours: f64) -> Self {
        Self {
            project_id: project_id.into(),
            hours,
        }
    }
}

/// A user's attempt to divide one category's hours across projects.
///
/// Transient: it exists only for the duration of one validate/commit call.
/// On success it becomes the category's project allocation in a
/// [`DailyRecord`](crate::record::DailyRecord).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRequest {
    /// The fixed total to distribute, in hours
    pub category_total_hours: f64,
    /// Proposed (project, hours) rows
    pub entries: Vec<SplitEntry>,
}

impl SplitRequest {
    /// Create a split request for a category total.
    pub fn new(category_total_hours: f64, entries: Vec<SplitEntry>) -> Self {
        Self {
            category_total_hours,
            entries,
        }
    }

    /// Sum of the proposed hours.
    pub fn allocated_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.hours).sum()
    }

    /// Validate the request and produce the project allocation.
    ///
    /// Checks, in order:
    /// 1. every row names a project (`EmptyProjectAssignment`)
    /// 2. every row has finite, positive hours (`NonPositiveHours`)
    /// 3. no project appears twice (`DuplicateProject`)
    /// 4. the rows sum to the category total within
    ///    [`SPLIT_SUM_TOLERANCE`] (`SumMismatch`)
    ///
    /// Validation is idempotent: re-validating an accepted allocation yields
    /// the identical mapping and no errors.
    pub fn validate(&self) -> Result<BTreeMap<String, f64>, SplitError> {
        let mut allocation = BTreeMap::new();

        for (row, entry) in self.entries.iter().enumerate() {
            if entry.project_id.trim().is_empty() {
                return Err(SplitError::EmptyProjectAssignment { row });
            }
            if !entry.hours.is_finite() || entry.hours <= 0.0 {
                return Err(SplitError::NonPositiveHours {
                    project_id: entry.project_id.clone(),
                    hours: entry.hours,
                });
            }
            if allocation.insert(entry.project_id.clone(), entry.hours).is_some() {
                return Err(SplitError::DuplicateProject {
                    project_id: entry.project_id.clone(),
                });
            }
        }

        let allocated = self.allocated_hours();
        if (allocated - self.category_total_hours).abs() > SPLIT_SUM_TOLERANCE {
            return Err(SplitError::SumMismatch {
                expected: self.category_total_hours,
                allocated,
            });
        }

        Ok(allocation)
    }
}
