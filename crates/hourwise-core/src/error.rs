//! Core error types for hourwise-core.
//!
//! The engine has a single validation-kind failure family: rejected project
//! splits. Everything else in the crate is total by policy -- division
//! guards resolve to zero and malformed numeric input is coerced, never
//! raised (see `aggregate::safe_hours`).

use thiserror::Error;

/// Validation failure for a proposed project split.
///
/// Each variant identifies exactly one violated invariant and carries the
/// offending values so the caller can render a corrective message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    /// A proposed row has no project assigned.
    #[error("Row {row} has no project assigned")]
    EmptyProjectAssignment {
        /// Zero-based index of the offending row
        row: usize,
    },

    /// A proposed row has missing, non-numeric, or non-positive hours.
    #[error("Project '{project_id}' must have positive hours (got {hours})")]
    NonPositiveHours { project_id: String, hours: f64 },

    /// The same project appears in more than one row.
    #[error("Project '{project_id}' is assigned more than once")]
    DuplicateProject { project_id: String },

    /// Allocated hours do not match the category total within tolerance.
    #[error("Allocated hours ({allocated}) do not match the category total ({expected})")]
    SumMismatch {
        /// The fixed category total to distribute
        expected: f64,
        /// Sum of the proposed rows
        allocated: f64,
    },
}

/// Result type alias for split validation.
pub type Result<T, E = SplitError> = std::result::Result<T, E>;
