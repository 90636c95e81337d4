//! # Hourwise Core Library
//!
//! Pricing and time-allocation calculation engine for self-employed
//! service providers. The surrounding application handles persistence,
//! authentication, and rendering; this crate is the pure numeric core it
//! calls into, operating only on in-memory values.
//!
//! ## Architecture
//!
//! - **Category registry**: fixed vocabulary of time-use categories with
//!   static display metadata and recommended ranges
//! - **Aggregation**: totals, averages, percentages, and biggest-contributor
//!   analysis over daily records
//! - **Rate calculator**: cost baseline -> billable-hour baseline ->
//!   market-adjusted minimum/recommended/premium hourly rates
//! - **Health score**: threshold-based 0-100 work-life score with tagged
//!   recommendations
//! - **Split allocator**: validation of dividing one category's hours
//!   across projects under an exact-sum invariant
//!
//! ## Key Components
//!
//! - [`RateCalculator`]: deterministic three-layer rate pipeline
//! - [`HealthAnalyzer`]: score, rating band, and recommendations
//! - [`WeekSummary`]: one-pass aggregate view of a period of records
//! - [`SplitRequest`]: validate-then-commit project splits
//! - [`EngineConfig`]: the single tunables surface

pub mod aggregate;
pub mod category;
pub mod config;
pub mod error;
pub mod health;
pub mod rate;
pub mod record;
pub mod split;

pub use aggregate::{
    average, biggest_contributor, category_total, category_totals, completed_day_count,
    group_total, percentage, safe_hours, total_hours, CategoryBreakdown, WeekSummary,
};
pub use category::{Category, CategoryClass, RecommendedRange};
pub use config::EngineConfig;
pub use error::SplitError;
pub use health::{
    DailyAverages, HealthAnalyzer, HealthRating, HealthReport, HealthThresholds, Recommendation,
    Severity, Topic,
};
pub use rate::{
    ExperienceLevel, MarketDemand, MarketFactorTable, MarketProfile, PortfolioStrength,
    RateBreakdown, RateCalculator, RateConfig, RateInput, Specialization,
};
pub use record::DailyRecord;
pub use split::{SplitEntry, SplitRequest, SPLIT_SUM_TOLERANCE};
