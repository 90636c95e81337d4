//! Aggregation over daily time records.
//!
//! All functions here are total and side-effect-free: empty input yields
//! zeros or empty mappings, divisions are guarded, and malformed numeric
//! values pass through the single [`safe_hours`] coercion point. This is a
//! deliberate permissiveness policy -- the upstream record shape is only
//! loosely enforced by the caller, so aggregation coerces instead of
//! rejecting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryClass};
use crate::health::DailyAverages;
use crate::record::DailyRecord;

/// The one coercion point for loosely-shaped numeric input: NaN, infinite,
/// and negative values all count as zero hours.
pub fn safe_hours(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Sum of one category's hours across all records.
pub fn category_total(records: &[DailyRecord], category: Category) -> f64 {
    records.iter().map(|r| r.hours(category)).sum()
}

/// Totals for each requested category.
pub fn category_totals(
    records: &[DailyRecord],
    categories: &[Category],
) -> BTreeMap<Category, f64> {
    categories
        .iter()
        .map(|&c| (c, category_total(records, c)))
        .collect()
}

/// Sum of a subset of precomputed totals, used to roll up the work and
/// personal classes.
pub fn group_total(totals: &BTreeMap<Category, f64>, categories: &[Category]) -> f64 {
    categories
        .iter()
        .map(|c| safe_hours(totals.get(c).copied().unwrap_or(0.0)))
        .sum()
}

/// Sum of all category hours in one record.
pub fn total_hours(record: &DailyRecord) -> f64 {
    record.total_hours()
}

/// `value / total * 100`, or zero when the total is zero.
pub fn percentage(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

/// `total / day_count`, or zero when there are no days.
pub fn average(total: f64, day_count: usize) -> f64 {
    if day_count > 0 {
        total / day_count as f64
    } else {
        0.0
    }
}

/// The category with the largest total, excluding the given set.
///
/// Ties break to the earlier category in [`Category::ALL`] order; the first
/// encountered strictly-larger value wins. Typically called with the
/// billable category excluded, so the insight highlights overhead rather
/// than paid work.
pub fn biggest_contributor(
    totals: &BTreeMap<Category, f64>,
    exclude: &[Category],
) -> Option<(Category, f64)> {
    let mut best: Option<(Category, f64)> = None;
    for category in Category::ALL {
        if exclude.contains(&category) {
            continue;
        }
        let Some(&total) = totals.get(&category) else {
            continue;
        };
        let total = safe_hours(total);
        match best {
            Some((_, current)) if total <= current => {}
            _ => best = Some((category, total)),
        }
    }
    best
}

/// Number of records where at least one of the given categories has hours
/// greater than zero.
pub fn completed_day_count(records: &[DailyRecord], categories: &[Category]) -> usize {
    records
        .iter()
        .filter(|r| categories.iter().any(|&c| r.hours(c) > 0.0))
        .count()
}

/// Share of the week's hours taken by one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Category the row describes
    pub category: Category,
    /// Total hours across the period
    pub total_hours: f64,
    /// Share of all tracked hours (0-100)
    pub share_pct: f64,
}

/// Aggregate view of a period of daily records.
///
/// Everything a caller needs to render the weekly overview and to feed the
/// health score engine, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Total tracked hours across all categories
    pub total_hours: f64,
    /// Work-class hours (billable plus overhead)
    pub work_hours: f64,
    /// Personal-class hours
    pub personal_hours: f64,
    /// Per-category totals and shares, in `Category::ALL` order
    pub by_category: Vec<CategoryBreakdown>,
    /// Largest non-billable time sink, if any time was tracked
    pub top_non_billable: Option<(Category, f64)>,
    /// Days with at least one non-zero category
    pub tracked_days: usize,
    /// Per-day averages for the health score engine
    pub averages: DailyAverages,
}

impl WeekSummary {
    /// Build a summary from a period of records.
    pub fn from_records(records: &[DailyRecord]) -> Self {
        let totals = category_totals(records, &Category::ALL);
        let total = group_total(&totals, &Category::ALL);
        let work_hours = group_total(&totals, &Category::WORK);
        let personal_hours = group_total(&totals, &Category::PERSONAL);
        let tracked_days = completed_day_count(records, &Category::ALL);

        let by_category = Category::ALL
            .iter()
            .map(|&category| {
                let category_hours = totals.get(&category).copied().unwrap_or(0.0);
                CategoryBreakdown {
                    category,
                    total_hours: category_hours,
                    share_pct: percentage(category_hours, total),
                }
            })
            .collect();

        let averages = DailyAverages {
            sleep: average(totals[&Category::Sleep], tracked_days),
            work: average(work_hours, tracked_days),
            personal: average(totals[&Category::Personal], tracked_days),
            family: average(totals[&Category::Family], tracked_days),
        };

        Self {
            total_hours: total,
            work_hours,
            personal_hours,
            by_category,
            top_non_billable: if total > 0.0 {
                biggest_contributor(&totals, &[Category::ClientWork])
            } else {
                None
            },
            tracked_days,
            averages,
        }
    }

    /// Work-class share of all tracked hours (0-100).
    pub fn work_share_pct(&self) -> f64 {
        percentage(self.work_hours, self.total_hours)
    }

    /// Class rollup for one side of the work/personal divide.
    pub fn class_hours(&self, class: CategoryClass) -> f64 {
        match class {
            CategoryClass::Work => self.work_hours,
            CategoryClass::Personal => self.personal_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn record(day: u32, hours: &[(Category, f64)]) -> DailyRecord {
        let mut r = DailyRecord::new(NaiveDate::from_ymd_opt(2025, 6, day).unwrap());
        for (category, h) in hours {
            r.set_hours(*category, *h);
        }
        r
    }

    fn sample_week() -> Vec<DailyRecord> {
        vec![
            record(
                2,
                &[
                    (Category::ClientWork, 6.0),
                    (Category::Admin, 2.0),
                    (Category::Sleep, 8.0),
                    (Category::Family, 1.5),
                    (Category::Personal, 1.0),
                ],
            ),
            record(
                3,
                &[
                    (Category::ClientWork, 7.0),
                    (Category::Marketing, 1.0),
                    (Category::Sleep, 7.0),
                    (Category::Family, 2.0),
                    (Category::Personal, 1.0),
                ],
            ),
            record(4, &[]),
        ]
    }

    #[test]
    fn test_category_total() {
        let records = sample_week();
        assert_eq!(category_total(&records, Category::ClientWork), 13.0);
        assert_eq!(category_total(&records, Category::Household), 0.0);
        assert_eq!(category_total(&[], Category::Sleep), 0.0);
    }

    #[test]
    fn test_totals_conserve_hours() {
        // No category is dropped or double-counted.
        let records = sample_week();
        let totals = category_totals(&records, &Category::ALL);
        let from_totals: f64 = totals.values().sum();
        let from_records: f64 = records.iter().map(total_hours).sum();
        assert!((from_totals - from_records).abs() < 1e-9);
    }

    #[test]
    fn test_group_total_rolls_up_classes() {
        let records = sample_week();
        let totals = category_totals(&records, &Category::ALL);
        assert_eq!(group_total(&totals, &Category::WORK), 16.0);
        assert_eq!(group_total(&totals, &Category::PERSONAL), 20.5);
    }

    #[test]
    fn test_percentage_guards_zero_total() {
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, 20.0), 25.0);
    }

    #[test]
    fn test_average_guards_zero_days() {
        assert_eq!(average(14.0, 0), 0.0);
        assert_eq!(average(14.0, 7), 2.0);
    }

    #[test]
    fn test_biggest_contributor_excludes_billable() {
        let records = sample_week();
        let totals = category_totals(&records, &Category::ALL);
        // Sleep (15h) dominates once client work (13h) is excluded.
        assert_eq!(
            biggest_contributor(&totals, &[Category::ClientWork]),
            Some((Category::Sleep, 15.0))
        );
        assert_eq!(
            biggest_contributor(&totals, &[]),
            Some((Category::Sleep, 15.0))
        );
    }

    #[test]
    fn test_biggest_contributor_tie_break_is_all_order() {
        let mut totals = BTreeMap::new();
        totals.insert(Category::Admin, 3.0);
        totals.insert(Category::Marketing, 3.0);
        totals.insert(Category::Sleep, 3.0);
        // Admin comes first in Category::ALL, so it wins the tie.
        assert_eq!(
            biggest_contributor(&totals, &[]),
            Some((Category::Admin, 3.0))
        );
    }

    #[test]
    fn test_biggest_contributor_empty() {
        assert_eq!(biggest_contributor(&BTreeMap::new(), &[]), None);
    }

    #[test]
    fn test_completed_day_count_skips_empty_days() {
        let records = sample_week();
        assert_eq!(completed_day_count(&records, &Category::ALL), 2);
        assert_eq!(completed_day_count(&records, &[Category::Marketing]), 1);
        assert_eq!(completed_day_count(&[], &Category::ALL), 0);
    }

    #[test]
    fn test_week_summary() {
        let records = sample_week();
        let summary = WeekSummary::from_records(&records);

        assert_eq!(summary.tracked_days, 2);
        assert_eq!(summary.work_hours, 16.0);
        assert_eq!(summary.personal_hours, 20.5);
        assert!((summary.total_hours - 36.5).abs() < 1e-9);
        assert_eq!(summary.top_non_billable, Some((Category::Sleep, 15.0)));
        assert_eq!(summary.averages.sleep, 7.5);
        assert_eq!(summary.averages.work, 8.0);
        assert_eq!(summary.averages.family, 1.75);
        assert_eq!(summary.averages.personal, 1.0);

        let shares: f64 = summary.by_category.iter().map(|b| b.share_pct).sum();
        assert!((shares - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_week_summary_empty_input() {
        let summary = WeekSummary::from_records(&[]);
        assert_eq!(summary.tracked_days, 0);
        assert_eq!(summary.total_hours, 0.0);
        assert_eq!(summary.top_non_billable, None);
        assert_eq!(summary.averages.sleep, 0.0);
        assert_eq!(summary.work_share_pct(), 0.0);
    }

    proptest! {
        /// safe_hours never lets a non-finite or negative value through.
        #[test]
        fn prop_safe_hours_total(value in proptest::num::f64::ANY) {
            let coerced = safe_hours(value);
            prop_assert!(coerced.is_finite());
            prop_assert!(coerced >= 0.0);
        }

        /// Summing per-category totals equals summing per-record totals.
        #[test]
        fn prop_totals_conservation(
            days in proptest::collection::vec(
                proptest::collection::vec(0.0f64..12.0, 8),
                0..8,
            ),
        ) {
            let records: Vec<DailyRecord> = days
                .iter()
                .enumerate()
                .map(|(i, hours)| {
                    let mut r = DailyRecord::new(
                        NaiveDate::from_ymd_opt(2025, 6, i as u32 + 1).unwrap(),
                    );
                    for (category, h) in Category::ALL.iter().zip(hours) {
                        r.set_hours(*category, *h);
                    }
                    r
                })
                .collect();

            let totals = category_totals(&records, &Category::ALL);
            let from_totals: f64 = totals.values().sum();
            let from_records: f64 = records.iter().map(total_hours).sum();
            prop_assert!((from_totals - from_records).abs() < 1e-6);
        }
    }
}
