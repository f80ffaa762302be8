//! Scoring configuration schema and validation.
//!
//! A `ScoringConfig` is deserialized from TOML and holds the age-baseline
//! step function plus the per-condition weight table. The exact weights are
//! a configuration surface, not hard-coded constants — deployments
//! recalibrate without code changes. Every structural rule is enforced at
//! load time; a live scorer never holds an invalid table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use carepath_contracts::error::{CarepathError, CarepathResult};

/// One step of the age-baseline function.
///
/// Example in TOML:
/// ```toml
/// [[age_buckets]]
/// min_age = 70
/// baseline = 0.60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBucket {
    /// Inclusive lower bound of the bucket. The bucket covers all ages from
    /// `min_age` up to the next bucket's `min_age` (exclusive), or upward
    /// without bound for the last bucket.
    pub min_age: u32,

    /// Baseline risk contribution for ages in this bucket. Must lie in
    /// [0.0, 1.0].
    pub baseline: f64,
}

/// The top-level structure deserialized from a TOML scoring configuration.
///
/// Example:
/// ```toml
/// [[age_buckets]]
/// min_age = 0
/// baseline = 0.05
///
/// [[age_buckets]]
/// min_age = 70
/// baseline = 0.60
///
/// [condition_weights]
/// diabetes = 0.20
/// hypertension = 0.15
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// The age-baseline step function. Buckets must start at `min_age = 0`
    /// and strictly increase in both `min_age` and `baseline` — the
    /// monotonicity invariant of the scorer is a property of this table.
    pub age_buckets: Vec<AgeBucket>,

    /// Additive weight per chronic condition. Conditions absent from this
    /// table contribute zero weight. Weights may be negative: an
    /// age-independent additive constant cannot break age monotonicity.
    #[serde(default)]
    pub condition_weights: BTreeMap<String, f64>,
}

impl ScoringConfig {
    /// Check every structural rule of the configuration.
    ///
    /// Returns `CarepathError::ConfigError` naming the first violated rule:
    /// - `age_buckets` must not be empty
    /// - the first bucket must start at `min_age = 0` (every valid age needs
    ///   a baseline)
    /// - `min_age` must strictly increase across buckets
    /// - `baseline` must strictly increase across buckets
    /// - every baseline must lie in [0.0, 1.0]
    /// - every condition weight must be finite
    pub fn validate(&self) -> CarepathResult<()> {
        if self.age_buckets.is_empty() {
            return Err(CarepathError::ConfigError {
                reason: "age_buckets must not be empty".to_string(),
            });
        }

        if self.age_buckets[0].min_age != 0 {
            return Err(CarepathError::ConfigError {
                reason: format!(
                    "first age bucket must start at min_age = 0, got {}",
                    self.age_buckets[0].min_age
                ),
            });
        }

        for bucket in &self.age_buckets {
            if !bucket.baseline.is_finite() || !(0.0..=1.0).contains(&bucket.baseline) {
                return Err(CarepathError::ConfigError {
                    reason: format!(
                        "baseline for min_age {} must be within [0.0, 1.0], got {}",
                        bucket.min_age, bucket.baseline
                    ),
                });
            }
        }

        for pair in self.age_buckets.windows(2) {
            if pair[1].min_age <= pair[0].min_age {
                return Err(CarepathError::ConfigError {
                    reason: format!(
                        "age buckets must strictly increase in min_age: {} does not follow {}",
                        pair[1].min_age, pair[0].min_age
                    ),
                });
            }
            if pair[1].baseline <= pair[0].baseline {
                return Err(CarepathError::ConfigError {
                    reason: format!(
                        "age buckets must strictly increase in baseline: {} (min_age {}) does not follow {}",
                        pair[1].baseline, pair[1].min_age, pair[0].baseline
                    ),
                });
            }
        }

        for (name, weight) in &self.condition_weights {
            if !weight.is_finite() {
                return Err(CarepathError::ConfigError {
                    reason: format!("weight for condition '{}' must be finite, got {}", name, weight),
                });
            }
        }

        Ok(())
    }
}

impl Default for ScoringConfig {
    /// The bundled default calibration.
    ///
    /// Baselines: 0→0.05, 18→0.10, 40→0.20, 55→0.35, 70→0.60.
    /// Weights: diabetes 0.20, hypertension 0.15, heart_failure 0.25,
    /// chronic_kidney_disease 0.20, copd 0.15, asthma 0.10.
    fn default() -> Self {
        let buckets = [
            (0, 0.05),
            (18, 0.10),
            (40, 0.20),
            (55, 0.35),
            (70, 0.60),
        ];
        let weights = [
            ("diabetes", 0.20),
            ("hypertension", 0.15),
            ("heart_failure", 0.25),
            ("chronic_kidney_disease", 0.20),
            ("copd", 0.15),
            ("asthma", 0.10),
        ];

        Self {
            age_buckets: buckets
                .into_iter()
                .map(|(min_age, baseline)| AgeBucket { min_age, baseline })
                .collect(),
            condition_weights: weights
                .into_iter()
                .map(|(name, weight)| (name.to_string(), weight))
                .collect(),
        }
    }
}
