//! Work-life health scoring.
//!
//! Converts per-day averages (sleep, work, personal, family hours) into a
//! 0-100 score, a rating band, and tagged recommendations. Deductions are
//! tiered and mutually exclusive per metric: the lowest matching threshold
//! wins, so an average can never be penalized twice for the same topic.
//!
//! All thresholds and penalties live in [`HealthThresholds`] so they can be
//! tuned without touching the scoring code.

use serde::{Deserialize, Serialize};

/// Per-day averages over a tracked period, caller-computed as
/// total / day-count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyAverages {
    /// Average sleep hours per day
    pub sleep: f64,
    /// Average work-class hours per day
    pub work: f64,
    /// Average personal time per day
    pub personal: f64,
    /// Average family time per day
    pub family: f64,
}

impl DailyAverages {
    /// Create averages from the four metrics.
    pub fn new(sleep: f64, work: f64, personal: f64, family: f64) -> Self {
        Self {
            sleep,
            work,
            personal,
            family,
        }
    }
}

/// Thresholds and penalties for the health score.
///
/// Each metric has tiered cut-offs checked lowest-first; the matching
/// tier's penalty is subtracted from the starting score of 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthThresholds {
    /// Sleep below this is a severe deficit
    pub sleep_critical_below: f64,
    /// Sleep below this (but not severe) is short
    pub sleep_warning_below: f64,
    /// Sleep above this counts as oversleeping
    pub sleep_excess_above: f64,
    /// Work above this is overload
    pub work_critical_above: f64,
    /// Work above this (but not overload) is heavy
    pub work_warning_above: f64,
    /// Personal time below this is near-absent
    pub personal_critical_below: f64,
    /// Personal time below this is thin
    pub personal_warning_below: f64,
    /// Family time below this is near-absent
    pub family_critical_below: f64,
    /// Family time below this is thin
    pub family_warning_below: f64,

    /// Penalty for severe sleep deficit
    pub sleep_critical_penalty: u8,
    /// Penalty for short sleep
    pub sleep_warning_penalty: u8,
    /// Penalty for oversleeping
    pub sleep_excess_penalty: u8,
    /// Penalty for work overload
    pub work_critical_penalty: u8,
    /// Penalty for heavy work
    pub work_warning_penalty: u8,
    /// Penalty for near-absent personal time
    pub personal_critical_penalty: u8,
    /// Penalty for thin personal time
    pub personal_warning_penalty: u8,
    /// Penalty for near-absent family time
    pub family_critical_penalty: u8,
    /// Penalty for thin family time
    pub family_warning_penalty: u8,

    /// Lower bound of the ideal sleep band (all-clear check)
    pub sleep_ideal_min: f64,
    /// Upper bound of the ideal sleep band (all-clear check)
    pub sleep_ideal_max: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            sleep_critical_below: 6.0,
            sleep_warning_below: 7.0,
            sleep_excess_above: 9.0,
            work_critical_above: 12.0,
            work_warning_above: 10.0,
            personal_critical_below: 0.5,
            personal_warning_below: 1.0,
            family_critical_below: 0.5,
            family_warning_below: 1.0,

            sleep_critical_penalty: 40,
            sleep_warning_penalty: 20,
            sleep_excess_penalty: 10,
            work_critical_penalty: 30,
            work_warning_penalty: 15,
            personal_critical_penalty: 20,
            personal_warning_penalty: 10,
            family_critical_penalty: 10,
            family_warning_penalty: 5,

            sleep_ideal_min: 7.0,
            sleep_ideal_max: 8.0,
        }
    }
}

/// Rating band for a health score. The highest qualifying band wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthRating {
    /// Score 80 and above
    Excellent,
    /// Score 70-79
    Good,
    /// Score 60-69
    NeedsImprovement,
    /// Score 59 and below
    Critical,
}

impl HealthRating {
    /// Band for a score.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            HealthRating::Excellent
        } else if score >= 70 {
            HealthRating::Good
        } else if score >= 60 {
            HealthRating::NeedsImprovement
        } else {
            HealthRating::Critical
        }
    }
}

/// Severity of a recommendation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Success,
}

/// Metric a recommendation is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Sleep,
    Work,
    Personal,
    Family,
    Overall,
}

/// One tagged recommendation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// How urgent the message is
    pub severity: Severity,
    /// Metric it concerns
    pub topic: Topic,
    /// Human-readable text; data, not logic, freely localizable
    pub message: String,
}

impl Recommendation {
    fn new(severity: Severity, topic: Topic, message: impl Into<String>) -> Self {
        Self {
            severity,
            topic,
            message: message.into(),
        }
    }
}

/// Complete result of a health evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Composite score, 0-100
    pub score: u8,
    /// Rating band for the score
    pub rating: HealthRating,
    /// Ordered recommendation messages
    pub recommendations: Vec<Recommendation>,
}

/// Analyzer turning daily averages into a health report.
#[derive(Debug, Clone, Default)]
pub struct HealthAnalyzer {
    /// Tunable thresholds and penalties
    pub thresholds: HealthThresholds,
}

impl HealthAnalyzer {
    /// Create an analyzer with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom thresholds.
    pub fn with_thresholds(thresholds: HealthThresholds) -> Self {
        Self { thresholds }
    }

    /// Composite 0-100 score for a set of averages.
    ///
    /// Starts at 100 and subtracts one penalty per metric at most; the
    /// result is clamped at zero.
    pub fn score(&self, averages: &DailyAverages) -> u8 {
        let t = &self.thresholds;
        let mut score: i32 = 100;

        if averages.sleep < t.sleep_critical_below {
            score -= t.sleep_critical_penalty as i32;
        } else if averages.sleep < t.sleep_warning_below {
            score -= t.sleep_warning_penalty as i32;
        } else if averages.sleep > t.sleep_excess_above {
            score -= t.sleep_excess_penalty as i32;
        }

        if averages.work > t.work_critical_above {
            score -= t.work_critical_penalty as i32;
        } else if averages.work > t.work_warning_above {
            score -= t.work_warning_penalty as i32;
        }

        if averages.personal < t.personal_critical_below {
            score -= t.personal_critical_penalty as i32;
        } else if averages.personal < t.personal_warning_below {
            score -= t.personal_warning_penalty as i32;
        }

        if averages.family < t.family_critical_below {
            score -= t.family_critical_penalty as i32;
        } else if averages.family < t.family_warning_below {
            score -= t.family_warning_penalty as i32;
        }

        score.max(0) as u8
    }

    /// Recommendations for a set of averages.
    ///
    /// Uses the same threshold tests as [`score`](Self::score). When every
    /// metric sits in its healthy band and nothing else fired, exactly one
    /// all-clear success message is emitted instead.
    pub fn recommendations(&self, averages: &DailyAverages) -> Vec<Recommendation> {
        let t = &self.thresholds;
        let mut messages = Vec::new();

        if averages.sleep < t.sleep_critical_below {
            messages.push(Recommendation::new(
                Severity::Critical,
                Topic::Sleep,
                "Severe sleep deficit. Aim for at least 7 hours a night before anything else.",
            ));
        } else if averages.sleep < t.sleep_warning_below {
            messages.push(Recommendation::new(
                Severity::Warning,
                Topic::Sleep,
                "You are sleeping a bit short. Try moving bedtime earlier.",
            ));
        } else if averages.sleep > t.sleep_excess_above {
            messages.push(Recommendation::new(
                Severity::Warning,
                Topic::Sleep,
                "You sleep more than 9 hours a day. Very long sleep can signal exhaustion.",
            ));
        }

        if averages.work > t.work_critical_above {
            messages.push(Recommendation::new(
                Severity::Critical,
                Topic::Work,
                "Over 12 hours of work a day is unsustainable. Cut scope or raise your rate.",
            ));
        } else if averages.work > t.work_warning_above {
            messages.push(Recommendation::new(
                Severity::Warning,
                Topic::Work,
                "Long work days. Watch for creeping overtime.",
            ));
        }

        if averages.personal < t.personal_critical_below {
            messages.push(Recommendation::new(
                Severity::Critical,
                Topic::Personal,
                "Almost no personal time. Block at least an hour a day for yourself.",
            ));
        } else if averages.personal < t.personal_warning_below {
            messages.push(Recommendation::new(
                Severity::Warning,
                Topic::Personal,
                "Less than an hour of personal time a day. A little more keeps you resilient.",
            ));
        }

        if averages.family < t.family_critical_below {
            messages.push(Recommendation::new(
                Severity::Critical,
                Topic::Family,
                "Family time is nearly absent from your week.",
            ));
        } else if averages.family < t.family_warning_below {
            messages.push(Recommendation::new(
                Severity::Warning,
                Topic::Family,
                "Family time is running thin. An hour a day makes a difference.",
            ));
        }

        if messages.is_empty() && self.in_healthy_band(averages) {
            messages.push(Recommendation::new(
                Severity::Success,
                Topic::Overall,
                "Your week is well balanced. Keep it up.",
            ));
        }

        messages
    }

    /// Full evaluation: score, rating band, and recommendations.
    pub fn evaluate(&self, averages: &DailyAverages) -> HealthReport {
        let score = self.score(averages);
        HealthReport {
            score,
            rating: HealthRating::from_score(score),
            recommendations: self.recommendations(averages),
        }
    }

    /// Whether every metric sits inside its healthy band: sleep in the
    /// ideal range, work at or under the warning line, personal and family
    /// at or over theirs.
    fn in_healthy_band(&self, averages: &DailyAverages) -> bool {
        let t = &self.thresholds;
        averages.sleep >= t.sleep_ideal_min
            && averages.sleep <= t.sleep_ideal_max
            && averages.work <= t.work_warning_above
            && averages.personal >= t.personal_warning_below
            && averages.family >= t.family_warning_below
    }
}
