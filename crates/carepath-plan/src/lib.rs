//! # carepath-plan
//!
//! The threshold-gated care plan deriver for the Carepath engine.
//!
//! ## Overview
//!
//! This crate provides [`ThresholdPlanner`], which implements the
//! [`PlanDeriver`](carepath_core::traits::PlanDeriver) trait. One
//! configurable threshold (default 0.7) splits the score domain into the
//! HIGH and LOW regimes; a score exactly at the threshold is LOW.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use carepath_plan::ThresholdPlanner;
//!
//! let planner = ThresholdPlanner::with_defaults();
//! // Pass `planner` to `carepath_core::Assessor::new(...)`.
//! ```

pub mod config;
pub mod planner;

pub use config::{PlanConfig, DEFAULT_HIGH_RISK_THRESHOLD};
pub use planner::{CareRegime, ThresholdPlanner};

// ── Tests ─────────────────────────────────────────────────────────────────────
