//! Core trait definitions for the Carepath assessment pipeline.
//!
//! The two traits define the engine's decision seam:
//!
//! - `RiskScorer`  — maps patient attributes to a normalized risk score
//! - `PlanDeriver` — maps a risk score (plus optional attributes) to a care plan
//!
//! The deriver depends only on the scorer's output contract, never its
//! internals — the two sides are independently replaceable. Both must be
//! pure: no I/O, no shared mutable state, no clocks. `Send + Sync` bounds
//! make concurrent use from arbitrarily many callers sound without
//! coordination.

use carepath_contracts::{
    error::CarepathResult,
    patient::PatientAttributes,
    plan::CarePlan,
    score::RiskScore,
};

/// Maps a patient's attribute set to a normalized risk score.
pub trait RiskScorer: Send + Sync {
    /// Produce a risk score in [0.0, 1.0] for the given attributes.
    ///
    /// Implementations MUST be deterministic (identical input yields a
    /// bit-identical score) and monotonic over age: holding all other
    /// attributes fixed, a greater age never yields a lesser score.
    ///
    /// Unrecognized chronic conditions and extra features are ignored, not
    /// errors — they contribute zero weight.
    fn score(&self, attributes: &PatientAttributes) -> CarepathResult<RiskScore>;
}

/// Converts a risk score into an actionable, discrete care plan.
pub trait PlanDeriver: Send + Sync {
    /// Derive a plan for `score`.
    ///
    /// `attributes` is reserved for attribute-specific recommendations;
    /// implementations may ignore it. The plan must be a pure function of
    /// its arguments — same inputs, same plan, no history dependency.
    fn derive_plan(
        &self,
        score: RiskScore,
        attributes: Option<&PatientAttributes>,
    ) -> CarepathResult<CarePlan>;
}
