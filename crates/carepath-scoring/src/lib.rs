//! # carepath-scoring
//!
//! The TOML-driven weighted risk scorer for the Carepath engine.
//!
//! ## Overview
//!
//! This crate provides [`WeightedScorer`], which implements the
//! [`RiskScorer`](carepath_core::traits::RiskScorer) trait. A score is a
//! bounded weighted aggregation: an age-bucket baseline plus a fixed
//! additive weight per recognized chronic condition, clipped to [0.0, 1.0].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use carepath_scoring::WeightedScorer;
//!
//! let scorer = WeightedScorer::from_file(Path::new("carepath.toml"))?;
//! // Pass `scorer` to `carepath_core::Assessor::new(...)`.
//! ```
//!
//! ## Guarantees
//!
//! Scoring is deterministic (bit-identical results for identical input),
//! monotonic over age, and total over all valid attributes. Both properties
//! are enforced structurally: configuration validation pins the baseline
//! table to a strictly increasing step function starting at age 0, and
//! weights are summed in fixed table order.

pub mod config;
pub mod scorer;

pub use config::{AgeBucket, ScoringConfig};
pub use scorer::WeightedScorer;

// ── Tests ─────────────────────────────────────────────────────────────────────
