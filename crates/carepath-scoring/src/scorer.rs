//! Weighted-aggregation risk scorer implementation.
//!
//! `WeightedScorer` loads a `ScoringConfig` from a TOML string or file and
//! implements the `RiskScorer` trait from carepath-core.
//!
//! Scoring algorithm:
//!
//! 1. Baseline = the baseline of the last age bucket with `min_age <= age`.
//! 2. Add the configured weight for every chronic condition present in the
//!    weight table. Conditions the table does not name contribute zero.
//! 3. Clip the sum to [0.0, 1.0].
//!
//! Extra features are reserved and contribute nothing.

use std::path::Path;

use tracing::debug;

use carepath_contracts::{
    error::{CarepathError, CarepathResult},
    patient::PatientAttributes,
    score::RiskScore,
};
use carepath_core::traits::RiskScorer;

use crate::config::ScoringConfig;

/// A `RiskScorer` implementation driven by a TOML weight table.
///
/// Construct via `new`, `from_toml_str`, or `from_file`, then hand to an
/// `Assessor` or call `score` directly. Every constructor validates the
/// configuration; a `WeightedScorer` in hand is always backed by a
/// well-formed table.
///
/// ```rust,ignore
/// use carepath_scoring::WeightedScorer;
///
/// let scorer = WeightedScorer::from_file(Path::new("carepath.toml"))?;
/// ```
#[derive(Debug)]
pub struct WeightedScorer {
    config: ScoringConfig,
}

impl WeightedScorer {
    /// Build a scorer over `config`, validating it first.
    ///
    /// Returns `CarepathError::ConfigError` if any structural rule is
    /// violated (see `ScoringConfig::validate`).
    pub fn new(config: ScoringConfig) -> CarepathResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build a scorer over the bundled default calibration.
    pub fn with_defaults() -> Self {
        // The default table is a constant known to satisfy validate().
        Self {
            config: ScoringConfig::default(),
        }
    }

    /// Parse `s` as TOML and build a `WeightedScorer`.
    ///
    /// Returns `CarepathError::ConfigError` if the TOML is malformed, does
    /// not match the `ScoringConfig` schema, or violates a structural rule.
    pub fn from_toml_str(s: &str) -> CarepathResult<Self> {
        let config: ScoringConfig = toml::from_str(s).map_err(|e| CarepathError::ConfigError {
            reason: format!("failed to parse scoring TOML: {}", e),
        })?;
        Self::new(config)
    }

    /// Read the file at `path` and parse it as TOML scoring configuration.
    pub fn from_file(path: &Path) -> CarepathResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CarepathError::ConfigError {
            reason: format!("failed to read scoring file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The validated configuration this scorer runs on.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// The baseline for `age`: the last bucket whose `min_age` does not
    /// exceed it. Total over all ages because validation pins the first
    /// bucket to `min_age = 0`.
    fn baseline_for(&self, age: u32) -> f64 {
        self.config
            .age_buckets
            .iter()
            .take_while(|bucket| bucket.min_age <= age)
            .last()
            .map(|bucket| bucket.baseline)
            .unwrap_or(0.0)
    }
}

impl RiskScorer for WeightedScorer {
    /// Score `attributes` against the loaded weight table.
    ///
    /// Weights are applied in the table's key order; the floating-point
    /// summation order is therefore identical on every call, and repeated
    /// calls over identical input return a bit-identical score.
    fn score(&self, attributes: &PatientAttributes) -> CarepathResult<RiskScore> {
        let baseline = self.baseline_for(attributes.age);
        let mut total = baseline;

        for (name, weight) in &self.config.condition_weights {
            if attributes.chronic_conditions.contains(name) {
                total += weight;
            }
        }

        let score = RiskScore::clamped(total);

        debug!(
            age = attributes.age,
            baseline,
            raw_total = total,
            score = score.value(),
            "scored patient attributes"
        );

        Ok(score)
    }
}
