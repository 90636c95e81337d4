//! Engine configuration.
//!
//! The coefficient table and the health thresholds are the engine's only
//! tunables; this module gathers them into one structure so they can be
//! adjusted without touching algorithm code. Category metadata and
//! recommended ranges are static data in [`crate::category`] and are not
//! user-tunable.

use serde::{Deserialize, Serialize};

use crate::health::{HealthAnalyzer, HealthThresholds};
use crate::rate::{RateCalculator, RateConfig};

/// All tunables of the calculation engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rate pipeline surcharges and market factor table
    pub rate: RateConfig,
    /// Health score thresholds and penalties
    pub health: HealthThresholds,
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rate calculator using this configuration.
    pub fn rate_calculator(&self) -> RateCalculator {
        RateCalculator::with_config(self.rate)
    }

    /// Health analyzer using this configuration.
    pub fn health_analyzer(&self) -> HealthAnalyzer {
        HealthAnalyzer::with_thresholds(self.health)
    }
}
