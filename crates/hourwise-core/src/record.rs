//! Daily time records.
//!
//! A [`DailyRecord`] is one user's categorized hours for one calendar date,
//! optionally with per-category project splits. Records are plain values:
//! the engine never persists them, it only reads and validates what the
//! caller supplies. The caller overwrites a record wholesale per
//! (user, date).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::safe_hours;
use crate::category::Category;
use crate::error::SplitError;
use crate::split::{SplitRequest, SPLIT_SUM_TOLERANCE};

/// One day of categorized time for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date, unique per user
    pub date: NaiveDate,
    /// Hours per category; absent categories count as zero
    #[serde(default)]
    pub hours: BTreeMap<Category, f64>,
    /// Per-category division of hours across projects. Each entry must sum
    /// to the category's own hours within [`SPLIT_SUM_TOLERANCE`].
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub project_splits: BTreeMap<Category, BTreeMap<String, f64>>,
}

impl DailyRecord {
    /// Create an empty record for a date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            hours: BTreeMap::new(),
            project_splits: BTreeMap::new(),
        }
    }

    /// Hours recorded for a category. Absent or malformed values coerce to
    /// zero through [`safe_hours`].
    pub fn hours(&self, category: Category) -> f64 {
        safe_hours(self.hours.get(&category).copied().unwrap_or(0.0))
    }

    /// Set the hours for a category, returning the record for chaining.
    pub fn with_hours(mut self, category: Category, hours: f64) -> Self {
        self.hours.insert(category, hours);
        self
    }

    /// Set the hours for a category in place.
    pub fn set_hours(&mut self, category: Category, hours: f64) {
        self.hours.insert(category, hours);
    }

    /// Total hours recorded for the day, across all categories.
    pub fn total_hours(&self) -> f64 {
        Category::ALL.iter().map(|c| self.hours(*c)).sum()
    }

    /// Project allocation for a category, if one was committed.
    pub fn split(&self, category: Category) -> Option<&BTreeMap<String, f64>> {
        self.project_splits.get(&category)
    }

    /// Remove a category's project allocation.
    pub fn clear_split(&mut self, category: Category) {
        self.project_splits.remove(&category);
    }

    /// Validate a split request against this record and commit it.
    ///
    /// The request's declared total is re-checked against the category's
    /// recorded hours before row validation, so a stale or tampered client
    /// total is rejected with `SumMismatch` rather than trusted.
    pub fn apply_split(
        &mut self,
        category: Category,
        request: &SplitRequest,
    ) -> Result<(), SplitError> {
        let recorded = self.hours(category);
        if (request.category_total_hours - recorded).abs() > SPLIT_SUM_TOLERANCE {
            return Err(SplitError::SumMismatch {
                expected: recorded,
                allocated: request.category_total_hours,
            });
        }

        let allocation = request.validate()?;
        if allocation.is_empty() {
            self.project_splits.remove(&category);
        } else {
            self.project_splits.insert(category, allocation);
        }
        Ok(())
    }

    /// Re-verify every committed split against its category's hours.
    ///
    /// Callers run this after loading records from storage, where the split
    /// invariant cannot be assumed to still hold.
    pub fn verify_splits(&self) -> Result<(), SplitError> {
        for (category, allocation) in &self.project_splits {
            let allocated: f64 = allocation.values().sum();
            let recorded = self.hours(*category);
            if (allocated - recorded).abs() > SPLIT_SUM_TOLERANCE {
                return Err(SplitError::SumMismatch {
                    expected: recorded,
                    allocated,
                });
            }
        }
        Ok(())
    }
}
