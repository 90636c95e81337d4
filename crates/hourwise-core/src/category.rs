//! Time-use category registry.
//!
//! Categories are a fixed vocabulary of ways a day's hours can be spent,
//! partitioned into a `work` and a `personal` class. Display metadata
//! (labels, recommended ranges) lives here as static lookup data so the
//! numeric modules stay free of presentation concerns.

use serde::{Deserialize, Serialize};

/// Class a category belongs to: paid/occupational time or private time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryClass {
    /// Occupational time (billable or overhead)
    Work,
    /// Private time (rest, family, household)
    Personal,
}

/// Fixed category key for one kind of time use.
///
/// The derived `Ord` follows declaration order, which is also the order of
/// [`Category::ALL`]. That order is the deterministic tie-break used by
/// aggregation (`biggest_contributor`) and the iteration order of every
/// `BTreeMap` keyed by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Billable client work
    ClientWork,
    /// Administration, invoicing, email
    Admin,
    /// Marketing and client acquisition
    Marketing,
    /// Courses, reading, skill building
    Education,
    /// Sleep
    Sleep,
    /// Time with family
    Family,
    /// Personal time (hobbies, exercise, rest)
    Personal,
    /// Household chores and errands
    Household,
}

/// Recommended daily range for a category, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendedRange {
    /// Lower bound (hours/day)
    pub min: f64,
    /// Upper bound (hours/day)
    pub max: f64,
}

impl RecommendedRange {
    /// Check whether a value falls inside the range (inclusive).
    pub fn contains(&self, hours: f64) -> bool {
        hours >= self.min && hours <= self.max
    }
}

impl Category {
    /// All categories, work class first. This order is the tie-break
    /// contract for aggregation.
    pub const ALL: [Category; 8] = [
        Category::ClientWork,
        Category::Admin,
        Category::Marketing,
        Category::Education,
        Category::Sleep,
        Category::Family,
        Category::Personal,
        Category::Household,
    ];

    /// Categories of the work class.
    pub const WORK: [Category; 4] = [
        Category::ClientWork,
        Category::Admin,
        Category::Marketing,
        Category::Education,
    ];

    /// Categories of the personal class.
    pub const PERSONAL: [Category; 4] = [
        Category::Sleep,
        Category::Family,
        Category::Personal,
        Category::Household,
    ];

    /// Stable string key, matching the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            Category::ClientWork => "client_work",
            Category::Admin => "admin",
            Category::Marketing => "marketing",
            Category::Education => "education",
            Category::Sleep => "sleep",
            Category::Family => "family",
            Category::Personal => "personal",
            Category::Household => "household",
        }
    }

    /// Parse a category from its string key.
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Display label for UI layers. Labels are data, not logic, and may be
    /// localized by the caller.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ClientWork => "Client work",
            Category::Admin => "Administration",
            Category::Marketing => "Marketing",
            Category::Education => "Education",
            Category::Sleep => "Sleep",
            Category::Family => "Family",
            Category::Personal => "Personal time",
            Category::Household => "Household",
        }
    }

    /// Class this category belongs to.
    pub fn class(&self) -> CategoryClass {
        match self {
            Category::ClientWork | Category::Admin | Category::Marketing | Category::Education => {
                CategoryClass::Work
            }
            Category::Sleep | Category::Family | Category::Personal | Category::Household => {
                CategoryClass::Personal
            }
        }
    }

    /// Recommended daily range, where one exists.
    pub fn recommended_range(&self) -> Option<RecommendedRange> {
        match self {
            Category::ClientWork => Some(RecommendedRange { min: 4.0, max: 8.0 }),
            Category::Sleep => Some(RecommendedRange { min: 7.0, max: 9.0 }),
            Category::Family => Some(RecommendedRange { min: 1.0, max: 4.0 }),
            Category::Personal => Some(RecommendedRange { min: 1.0, max: 3.0 }),
            _ => None,
        }
    }
}
