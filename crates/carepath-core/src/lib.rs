//! # carepath-core
//!
//! The composition layer of the Carepath risk engine.
//!
//! This crate provides:
//! - The two trait seams (`RiskScorer`, `PlanDeriver`)
//! - The `Assessor` that wires them into the fixed
//!   attributes → score → plan pipeline
//!
//! ## Usage
//!
//! ```rust,ignore
//! use carepath_core::{Assessor, traits::{RiskScorer, PlanDeriver}};
//! ```

pub mod assessor;
pub mod traits;

pub use assessor::Assessor;
