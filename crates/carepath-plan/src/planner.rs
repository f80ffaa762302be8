//! Threshold-gated plan derivation.
//!
//! `ThresholdPlanner` implements the `PlanDeriver` trait from carepath-core.
//! A single threshold partitions the score domain into exactly two regimes —
//! there is no third state:
//!
//! - score > threshold  → HIGH: weekly follow-up
//! - score <= threshold → LOW: monthly follow-up
//!
//! A score exactly equal to the threshold belongs to LOW. The `<=` tie-break
//! is a fixed compatibility policy carried over from the system this engine
//! replaced; do not re-derive it.

use std::path::Path;

use tracing::debug;

use carepath_contracts::{
    error::{CarepathError, CarepathResult},
    patient::PatientAttributes,
    plan::{CarePlan, FollowUpCadence},
    score::RiskScore,
};
use carepath_core::traits::PlanDeriver;

use crate::config::PlanConfig;

/// The two care regimes a score can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareRegime {
    /// score > threshold: intensive weekly follow-up.
    High,
    /// score <= threshold: regular monthly monitoring.
    Low,
}

impl std::fmt::Display for CareRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            CareRegime::High => "HIGH",
            CareRegime::Low => "LOW",
        })
    }
}

/// A `PlanDeriver` implementation gated on a configured risk threshold.
///
/// Construct via `new`, `from_toml_str`, or `from_file`; every constructor
/// validates the configuration first.
#[derive(Debug)]
pub struct ThresholdPlanner {
    config: PlanConfig,
}

impl ThresholdPlanner {
    /// Build a planner over `config`, validating it first.
    pub fn new(config: PlanConfig) -> CarepathResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build a planner with the default threshold (0.7).
    pub fn with_defaults() -> Self {
        Self {
            config: PlanConfig::default(),
        }
    }

    /// Parse `s` as TOML and build a `ThresholdPlanner`.
    ///
    /// Returns `CarepathError::ConfigError` if the TOML is malformed or the
    /// threshold is out of range.
    pub fn from_toml_str(s: &str) -> CarepathResult<Self> {
        let config: PlanConfig = toml::from_str(s).map_err(|e| CarepathError::ConfigError {
            reason: format!("failed to parse plan TOML: {}", e),
        })?;
        Self::new(config)
    }

    /// Read the file at `path` and parse it as TOML plan configuration.
    pub fn from_file(path: &Path) -> CarepathResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CarepathError::ConfigError {
            reason: format!("failed to read plan file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The active partition threshold.
    pub fn threshold(&self) -> f64 {
        self.config.high_risk_threshold
    }

    /// Classify a score into its regime. Equality goes to LOW.
    pub fn regime_for(&self, score: RiskScore) -> CareRegime {
        if score.value() > self.config.high_risk_threshold {
            CareRegime::High
        } else {
            CareRegime::Low
        }
    }

    /// Derive a plan from a raw, unchecked float score.
    ///
    /// This is the boundary for scores arriving from outside the engine
    /// (e.g. replayed from storage): returns `CarepathError::InvalidInput`
    /// when `score` lies outside [0.0, 1.0], then delegates to
    /// `derive_plan`.
    pub fn derive_plan_raw(
        &self,
        score: f64,
        attributes: Option<&PatientAttributes>,
    ) -> CarepathResult<CarePlan> {
        let score = RiskScore::new(score)?;
        self.derive_plan(score, attributes)
    }
}

impl PlanDeriver for ThresholdPlanner {
    /// Derive the plan for `score`'s regime.
    ///
    /// `attributes` is accepted for forward compatibility with
    /// attribute-specific recommendations; the current regimes do not read
    /// it. The first recommendation is the primary directive.
    fn derive_plan(
        &self,
        score: RiskScore,
        _attributes: Option<&PatientAttributes>,
    ) -> CarepathResult<CarePlan> {
        let regime = self.regime_for(score);

        debug!(
            score = score.value(),
            threshold = self.config.high_risk_threshold,
            regime = %regime,
            "derived care regime"
        );

        let plan = match regime {
            CareRegime::High => CarePlan {
                recommendations: vec!["Intensive follow-up required.".to_string()],
                cadence: FollowUpCadence::Weekly,
                reminders: vec!["Check blood pressure weekly".to_string()],
            },
            CareRegime::Low => CarePlan {
                recommendations: vec!["Regular monitoring is sufficient.".to_string()],
                cadence: FollowUpCadence::Monthly,
                reminders: vec!["Check blood pressure monthly".to_string()],
            },
        };

        Ok(plan)
    }
}
