//! Plan-derivation configuration schema and validation.

use serde::{Deserialize, Serialize};

use carepath_contracts::error::{CarepathError, CarepathResult};

/// The default partition point between the LOW and HIGH regimes.
pub const DEFAULT_HIGH_RISK_THRESHOLD: f64 = 0.7;

fn default_threshold() -> f64 {
    DEFAULT_HIGH_RISK_THRESHOLD
}

/// Configuration for the threshold planner.
///
/// Parsed from the same TOML document as the scoring configuration — each
/// side ignores the other's keys, so a deployment ships one file.
///
/// Example:
/// ```toml
/// high_risk_threshold = 0.7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Scores strictly above this value fall into the HIGH regime; scores
    /// at or below it fall into LOW. Must lie in [0.0, 1.0].
    #[serde(default = "default_threshold")]
    pub high_risk_threshold: f64,
}

impl PlanConfig {
    /// Check the configuration's structural rules.
    ///
    /// Returns `CarepathError::ConfigError` when the threshold is not a
    /// finite value in [0.0, 1.0].
    pub fn validate(&self) -> CarepathResult<()> {
        if !self.high_risk_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.high_risk_threshold)
        {
            return Err(CarepathError::ConfigError {
                reason: format!(
                    "high_risk_threshold must be within [0.0, 1.0], got {}",
                    self.high_risk_threshold
                ),
            });
        }
        Ok(())
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            high_risk_threshold: DEFAULT_HIGH_RISK_THRESHOLD,
        }
    }
}
