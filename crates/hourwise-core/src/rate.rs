//! Hourly rate calculation.
//!
//! A deterministic three-layer pipeline: monthly cost baseline, billable
//! hour baseline, market-adjusted rate. The output carries every
//! intermediate figure so the caller can explain the final numbers
//! (minimum / recommended / premium hourly).
//!
//! All outputs are plain reals; rounding and currency formatting are the
//! caller's concern.

use serde::{Deserialize, Serialize};

/// Years of relevant experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// 0-2 years
    #[default]
    Junior,
    /// 3-5 years
    Mid,
    /// 6-10 years
    Senior,
    /// More than 10 years
    Expert,
}

/// Breadth of positioning on the market.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialization {
    /// Takes any work in the field
    #[default]
    Generalist,
    /// Narrow, named niche
    Specialist,
}

/// Strength of the public portfolio and references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioStrength {
    /// Nothing to show yet
    #[default]
    None,
    /// A few published pieces or references
    Some,
    /// Strong, recognizable body of work
    Strong,
}

/// Current demand for the provider's services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketDemand {
    /// Actively looking for clients
    #[default]
    Low,
    /// Steady inquiries
    Medium,
    /// More inquiries than capacity
    High,
    /// Clients wait for a free slot
    WaitingList,
}

impl ExperienceLevel {
    /// Parse from a string key; unknown keys fall back to the 1.00
    /// baseline rather than failing.
    pub fn from_key(key: &str) -> Self {
        match key {
            "mid" | "3-5" => ExperienceLevel::Mid,
            "senior" | "6-10" => ExperienceLevel::Senior,
            "expert" | "10+" => ExperienceLevel::Expert,
            _ => ExperienceLevel::Junior,
        }
    }

    fn factor(self, table: &MarketFactorTable) -> f64 {
        match self {
            ExperienceLevel::Junior => table.experience_junior,
            ExperienceLevel::Mid => table.experience_mid,
            ExperienceLevel::Senior => table.experience_senior,
            ExperienceLevel::Expert => table.experience_expert,
        }
    }
}

impl Specialization {
    /// Parse from a string key; unknown keys fall back to the baseline.
    pub fn from_key(key: &str) -> Self {
        match key {
            "specialist" => Specialization::Specialist,
            _ => Specialization::Generalist,
        }
    }

    fn factor(self, table: &MarketFactorTable) -> f64 {
        match self {
            Specialization::Generalist => table.specialization_generalist,
            Specialization::Specialist => table.specialization_specialist,
        }
    }
}

impl PortfolioStrength {
    /// Parse from a string key; unknown keys fall back to the baseline.
    pub fn from_key(key: &str) -> Self {
        match key {
            "some" => PortfolioStrength::Some,
            "strong" => PortfolioStrength::Strong,
            _ => PortfolioStrength::None,
        }
    }

    fn factor(self, table: &MarketFactorTable) -> f64 {
        match self {
            PortfolioStrength::None => table.portfolio_none,
            PortfolioStrength::Some => table.portfolio_some,
            PortfolioStrength::Strong => table.portfolio_strong,
        }
    }
}

impl MarketDemand {
    /// Parse from a string key; unknown keys fall back to the baseline.
    pub fn from_key(key: &str) -> Self {
        match key {
            "medium" => MarketDemand::Medium,
            "high" => MarketDemand::High,
            "waiting_list" | "waiting-list" => MarketDemand::WaitingList,
            _ => MarketDemand::Low,
        }
    }

    fn factor(self, table: &MarketFactorTable) -> f64 {
        match self {
            MarketDemand::Low => table.demand_low,
            MarketDemand::Medium => table.demand_medium,
            MarketDemand::High => table.demand_high,
            MarketDemand::WaitingList => table.demand_waiting_list,
        }
    }
}

/// Multiplier table for the market coefficients, one named field per
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketFactorTable {
    pub experience_junior: f64,
    pub experience_mid: f64,
    pub experience_senior: f64,
    pub experience_expert: f64,
    pub specialization_generalist: f64,
    pub specialization_specialist: f64,
    pub portfolio_none: f64,
    pub portfolio_some: f64,
    pub portfolio_strong: f64,
    pub demand_low: f64,
    pub demand_medium: f64,
    pub demand_high: f64,
    pub demand_waiting_list: f64,
}

impl Default for MarketFactorTable {
    fn default() -> Self {
        Self {
            experience_junior: 1.00,
            experience_mid: 1.20,
            experience_senior: 1.35,
            experience_expert: 1.50,
            specialization_generalist: 1.00,
            specialization_specialist: 1.30,
            portfolio_none: 1.00,
            portfolio_some: 1.10,
            portfolio_strong: 1.20,
            demand_low: 1.00,
            demand_medium: 1.15,
            demand_high: 1.30,
            demand_waiting_list: 1.40,
        }
    }
}

/// The four market positioning selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketProfile {
    pub experience: ExperienceLevel,
    pub specialization: Specialization,
    pub portfolio: PortfolioStrength,
    pub demand: MarketDemand,
}

impl MarketProfile {
    /// Build a profile from raw string keys, e.g. straight from a form
    /// payload. Unknown keys default each selection to its baseline.
    pub fn from_keys(experience: &str, specialization: &str, portfolio: &str, demand: &str) -> Self {
        Self {
            experience: ExperienceLevel::from_key(experience),
            specialization: Specialization::from_key(specialization),
            portfolio: PortfolioStrength::from_key(portfolio),
            demand: MarketDemand::from_key(demand),
        }
    }

    /// Product of the four looked-up factors.
    pub fn coefficient(&self, table: &MarketFactorTable) -> f64 {
        self.experience.factor(table)
            * self.specialization.factor(table)
            * self.portfolio.factor(table)
            * self.demand.factor(table)
    }
}

/// Tunables for the rate pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Surcharge on monthly costs modeling self-employed tax and
    /// contribution load (0.15 = 15%)
    pub tax_reserve_rate: f64,
    /// Fixed weeks-per-month approximation for billable hours
    pub weeks_per_month: f64,
    /// Markup of the premium rate over the recommended rate (0.30 = 30%)
    pub premium_markup: f64,
    /// Market coefficient lookup table
    pub factors: MarketFactorTable,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            tax_reserve_rate: 0.15,
            weeks_per_month: 4.0,
            premium_markup: 0.30,
            factors: MarketFactorTable::default(),
        }
    }
}

/// Input for one rate calculation: monthly costs, time reality, market
/// positioning.
///
/// The engine accepts `weekly_billable_hours` greater than
/// `weekly_total_hours`; the caller may warn, the pipeline does not reject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RateInput {
    /// Monthly housing costs
    pub housing_costs: f64,
    /// Monthly living costs
    pub living_costs: f64,
    /// Monthly business costs
    pub business_costs: f64,
    /// Monthly savings target
    pub savings: f64,
    /// Total hours worked per week
    pub weekly_total_hours: f64,
    /// Hours directly chargeable to clients per week
    pub weekly_billable_hours: f64,
    /// Market positioning selections
    pub market: MarketProfile,
}

/// Derived rate figures; a pure function of the input, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBreakdown {
    /// Sum of the four monthly cost fields
    pub cost_subtotal: f64,
    /// Costs plus the tax reserve surcharge
    pub minimum_monthly: f64,
    /// Billable hours per month (weekly billable x weeks per month)
    pub monthly_billable_hours: f64,
    /// Break-even hourly rate; zero when there are no billable hours yet
    pub minimum_hourly: f64,
    /// Product of the four market factors
    pub coefficient: f64,
    /// Minimum hourly adjusted by the market coefficient
    pub recommended_hourly: f64,
    /// Recommended hourly plus the premium markup
    pub premium_hourly: f64,
}

/// Calculator running the three-layer rate pipeline.
#[derive(Debug, Clone, Default)]
pub struct RateCalculator {
    /// Tunable surcharges and factor table
    pub config: RateConfig,
}

impl RateCalculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom configuration.
    pub fn with_config(config: RateConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline. Deterministic: identical input always produces an
    /// identical breakdown.
    pub fn calculate(&self, input: &RateInput) -> RateBreakdown {
        let cost_subtotal =
            input.housing_costs + input.living_costs + input.business_costs + input.savings;
        let minimum_monthly = cost_subtotal * (1.0 + self.config.tax_reserve_rate);

        let monthly_billable_hours = input.weekly_billable_hours * self.config.weeks_per_month;
        // "Not enough data yet" resolves to zero, never a division error.
        let minimum_hourly = if monthly_billable_hours > 0.0 {
            minimum_monthly / monthly_billable_hours
        } else {
            0.0
        };

        let coefficient = input.market.coefficient(&self.config.factors);
        let recommended_hourly = minimum_hourly * coefficient;
        let premium_hourly = recommended_hourly * (1.0 + self.config.premium_markup);

        RateBreakdown {
            cost_subtotal,
            minimum_monthly,
            monthly_billable_hours,
            minimum_hourly,
            coefficient,
            recommended_hourly,
            premium_hourly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_input() -> RateInput {
        RateInput {
            housing_costs: 15000.0,
            living_costs: 10000.0,
            business_costs: 3000.0,
            savings: 5000.0,
            weekly_total_hours: 45.0,
            weekly_billable_hours: 20.0,
            market: MarketProfile {
                experience: ExperienceLevel::Mid,
                specialization: Specialization::Specialist,
                portfolio: PortfolioStrength::Some,
                demand: MarketDemand::Medium,
            },
        }
    }

    #[test]
    fn test_cost_baseline() {
        let breakdown = RateCalculator::new().calculate(&sample_input());
        assert_eq!(breakdown.cost_subtotal, 33000.0);
        assert!((breakdown.minimum_monthly - 37950.0).abs() < 1e-9);
    }

    #[test]
    fn test_billable_hour_baseline() {
        let breakdown = RateCalculator::new().calculate(&sample_input());
        assert_eq!(breakdown.monthly_billable_hours, 80.0);
        assert!((breakdown.minimum_hourly - 474.375).abs() < 1e-9);
    }

    #[test]
    fn test_market_adjusted_rates() {
        let breakdown = RateCalculator::new().calculate(&sample_input());
        // 1.20 * 1.30 * 1.10 * 1.15
        assert!((breakdown.coefficient - 1.9734).abs() < 1e-9);
        assert!((breakdown.recommended_hourly - 474.375 * 1.9734).abs() < 1e-6);
        assert!((breakdown.premium_hourly - breakdown.recommended_hourly * 1.30).abs() < 1e-6);
        // Ballpark figures from the worked example.
        assert!((breakdown.recommended_hourly - 936.2).abs() < 0.2);
        assert!((breakdown.premium_hourly - 1217.1).abs() < 0.2);
    }

    #[test]
    fn test_zero_billable_hours_guard() {
        let input = RateInput {
            weekly_billable_hours: 0.0,
            ..sample_input()
        };
        let breakdown = RateCalculator::new().calculate(&input);
        assert_eq!(breakdown.minimum_hourly, 0.0);
        assert_eq!(breakdown.recommended_hourly, 0.0);
        assert_eq!(breakdown.premium_hourly, 0.0);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let calculator = RateCalculator::new();
        let input = sample_input();
        let first = calculator.calculate(&input);
        let second = calculator.calculate(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_billable_above_total_is_accepted() {
        // The engine does not constrain billable <= total hours.
        let input = RateInput {
            weekly_total_hours: 10.0,
            weekly_billable_hours: 20.0,
            ..sample_input()
        };
        let breakdown = RateCalculator::new().calculate(&input);
        assert!(breakdown.minimum_hourly > 0.0);
    }

    #[test]
    fn test_unknown_keys_default_to_baseline() {
        let profile = MarketProfile::from_keys("??", "??", "??", "??");
        assert_eq!(profile, MarketProfile::default());
        assert_eq!(profile.coefficient(&MarketFactorTable::default()), 1.0);
    }

    #[test]
    fn test_from_keys_parses_known_selections() {
        let profile = MarketProfile::from_keys("3-5", "specialist", "some", "medium");
        assert_eq!(profile.experience, ExperienceLevel::Mid);
        assert_eq!(profile.specialization, Specialization::Specialist);
        assert_eq!(profile.portfolio, PortfolioStrength::Some);
        assert_eq!(profile.demand, MarketDemand::Medium);
    }

    #[test]
    fn test_baseline_profile_keeps_minimum_rate() {
        let input = RateInput {
            market: MarketProfile::default(),
            ..sample_input()
        };
        let breakdown = RateCalculator::new().calculate(&input);
        assert_eq!(breakdown.coefficient, 1.0);
        assert_eq!(breakdown.recommended_hourly, breakdown.minimum_hourly);
    }

    proptest! {
        /// Raising any single market factor never lowers the recommended
        /// rate.
        #[test]
        fn prop_coefficient_monotone(
            housing in 0.0f64..100_000.0,
            billable in 1.0f64..60.0,
            experience_idx in 0usize..4,
            specialization_idx in 0usize..2,
            portfolio_idx in 0usize..3,
            demand_idx in 0usize..4,
        ) {
            const EXPERIENCE: [ExperienceLevel; 4] = [
                ExperienceLevel::Junior,
                ExperienceLevel::Mid,
                ExperienceLevel::Senior,
                ExperienceLevel::Expert,
            ];
            const SPECIALIZATION: [Specialization; 2] =
                [Specialization::Generalist, Specialization::Specialist];
            const PORTFOLIO: [PortfolioStrength; 3] = [
                PortfolioStrength::None,
                PortfolioStrength::Some,
                PortfolioStrength::Strong,
            ];
            const DEMAND: [MarketDemand; 4] = [
                MarketDemand::Low,
                MarketDemand::Medium,
                MarketDemand::High,
                MarketDemand::WaitingList,
            ];

            let calculator = RateCalculator::new();
            let input = RateInput {
                housing_costs: housing,
                living_costs: 8000.0,
                business_costs: 2000.0,
                savings: 1000.0,
                weekly_total_hours: 40.0,
                weekly_billable_hours: billable,
                market: MarketProfile {
                    experience: EXPERIENCE[experience_idx],
                    specialization: SPECIALIZATION[specialization_idx],
                    portfolio: PORTFOLIO[portfolio_idx],
                    demand: DEMAND[demand_idx],
                },
            };
            let base = calculator.calculate(&input);

            // Step each selection up one notch, holding the others fixed.
            if experience_idx + 1 < EXPERIENCE.len() {
                let mut bumped = input;
                bumped.market.experience = EXPERIENCE[experience_idx + 1];
                prop_assert!(
                    calculator.calculate(&bumped).recommended_hourly
                        >= base.recommended_hourly
                );
            }
            if specialization_idx + 1 < SPECIALIZATION.len() {
                let mut bumped = input;
                bumped.market.specialization = SPECIALIZATION[specialization_idx + 1];
                prop_assert!(
                    calculator.calculate(&bumped).recommended_hourly
                        >= base.recommended_hourly
                );
            }
            if portfolio_idx + 1 < PORTFOLIO.len() {
                let mut bumped = input;
                bumped.market.portfolio = PORTFOLIO[portfolio_idx + 1];
                prop_assert!(
                    calculator.calculate(&bumped).recommended_hourly
                        >= base.recommended_hourly
                );
            }
            if demand_idx + 1 < DEMAND.len() {
                let mut bumped = input;
                bumped.market.demand = DEMAND[demand_idx + 1];
                prop_assert!(
                    calculator.calculate(&bumped).recommended_hourly
                        >= base.recommended_hourly
                );
            }
        }
    }
}
