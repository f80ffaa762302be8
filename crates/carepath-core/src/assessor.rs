//! The Carepath assessor: the fixed attributes → score → plan pipeline.
//!
//! The assessor adds nothing to the decision logic. It exists so that
//! collaborators depend on one entry point, and so the scorer and deriver
//! stay independently replaceable behind their trait seams.

use chrono::Utc;
use tracing::{debug, info};

use carepath_contracts::{
    assessment::Assessment,
    error::CarepathResult,
    patient::PatientAttributes,
};

use crate::traits::{PlanDeriver, RiskScorer};

/// Composes a `RiskScorer` and a `PlanDeriver` into one assessment pipeline.
///
/// The assessor and both components are immutable after construction. A
/// collaborator that recalibrates configuration at runtime builds a fresh
/// `Assessor` and swaps an `Arc<Assessor>` — a single atomic pointer swap,
/// so no in-flight call ever observes a partially updated weight table.
pub struct Assessor {
    scorer: Box<dyn RiskScorer>,
    deriver: Box<dyn PlanDeriver>,
}

impl Assessor {
    /// Create an assessor from the given components.
    pub fn new(scorer: Box<dyn RiskScorer>, deriver: Box<dyn PlanDeriver>) -> Self {
        Self { scorer, deriver }
    }

    /// Run one assessment.
    ///
    /// # Pipeline
    ///
    /// 1. `RiskScorer::score()` over the attributes
    /// 2. `PlanDeriver::derive_plan()` over the score, with the raw
    ///    attributes alongside for attribute-aware derivers
    /// 3. Stamp the result as an `Assessment`
    ///
    /// The timestamp is applied here — the scorer and deriver themselves
    /// never read clocks.
    ///
    /// # Errors
    ///
    /// Propagates `CarepathError::InvalidInput` from either component
    /// unmodified.
    pub fn assess(&self, attributes: &PatientAttributes) -> CarepathResult<Assessment> {
        debug!(
            age = attributes.age,
            conditions = attributes.chronic_conditions.len(),
            "assessment starting"
        );

        let score = self.scorer.score(attributes)?;
        let plan = self.deriver.derive_plan(score, Some(attributes))?;

        info!(
            score = score.value(),
            cadence = %plan.cadence,
            "assessment complete"
        );

        Ok(Assessment {
            score,
            plan,
            assessed_at: Utc::now(),
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use carepath_contracts::{
        error::{CarepathError, CarepathResult},
        patient::PatientAttributes,
        plan::{CarePlan, FollowUpCadence},
        score::RiskScore,
    };

    use crate::traits::{PlanDeriver, RiskScorer};

    use super::Assessor;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    /// A scorer that always returns a pre-configured value.
    struct MockScorer {
        value: f64,
        call_count: Arc<Mutex<u32>>,
    }

    impl MockScorer {
        fn new(value: f64) -> Self {
            Self {
                value,
                call_count: Arc::new(Mutex::new(0)),
            }
        }
    }

    impl RiskScorer for MockScorer {
        fn score(&self, _attributes: &PatientAttributes) -> CarepathResult<RiskScore> {
            *self.call_count.lock().unwrap() += 1;
            Ok(RiskScore::clamped(self.value))
        }
    }

    /// A scorer that always fails.
    struct FailingScorer;

    impl RiskScorer for FailingScorer {
        fn score(&self, _attributes: &PatientAttributes) -> CarepathResult<RiskScore> {
            Err(CarepathError::InvalidInput {
                reason: "scorer rejected input".to_string(),
            })
        }
    }

    /// A deriver that records the score it received.
    struct MockDeriver {
        seen_scores: Arc<Mutex<Vec<f64>>>,
        derive_count: Arc<Mutex<u32>>,
    }

    impl MockDeriver {
        fn new() -> Self {
            Self {
                seen_scores: Arc::new(Mutex::new(vec![])),
                derive_count: Arc::new(Mutex::new(0)),
            }
        }
    }

    impl PlanDeriver for MockDeriver {
        fn derive_plan(
            &self,
            score: RiskScore,
            _attributes: Option<&PatientAttributes>,
        ) -> CarepathResult<CarePlan> {
            self.seen_scores.lock().unwrap().push(score.value());
            *self.derive_count.lock().unwrap() += 1;
            Ok(CarePlan {
                recommendations: vec!["Regular monitoring is sufficient.".to_string()],
                cadence: FollowUpCadence::Monthly,
                reminders: vec!["Check blood pressure monthly".to_string()],
            })
        }
    }

    // ── Test cases ────────────────────────────────────────────────────────────

    /// A successful assessment calls each component exactly once and hands
    /// the deriver the scorer's exact value.
    #[test]
    fn assess_pipes_score_into_deriver() {
        let scorer = MockScorer::new(0.42);
        let score_calls = scorer.call_count.clone();
        let deriver = MockDeriver::new();
        let seen = deriver.seen_scores.clone();
        let derive_calls = deriver.derive_count.clone();

        let assessor = Assessor::new(Box::new(scorer), Box::new(deriver));
        let attrs = PatientAttributes::new(50);
        let assessment = assessor.assess(&attrs).unwrap();

        assert_eq!(*score_calls.lock().unwrap(), 1);
        assert_eq!(*derive_calls.lock().unwrap(), 1);
        assert_eq!(seen.lock().unwrap().as_slice(), &[0.42]);
        assert_eq!(assessment.score.value(), 0.42);
        assert_eq!(assessment.plan.cadence, FollowUpCadence::Monthly);
    }

    /// When the scorer fails, the deriver must never be called and the error
    /// propagates unmodified.
    #[test]
    fn scorer_failure_short_circuits() {
        let deriver = MockDeriver::new();
        let derive_calls = deriver.derive_count.clone();

        let assessor = Assessor::new(Box::new(FailingScorer), Box::new(deriver));
        let attrs = PatientAttributes::new(50);
        let result = assessor.assess(&attrs);

        assert_eq!(
            *derive_calls.lock().unwrap(),
            0,
            "derive_plan() must not be called when scoring fails"
        );
        match result {
            Err(CarepathError::InvalidInput { reason }) => {
                assert!(reason.contains("scorer rejected input"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    /// Assessments over identical attributes produce identical scores — the
    /// pipeline introduces no variation of its own.
    #[test]
    fn repeated_assessments_agree() {
        let assessor = Assessor::new(
            Box::new(MockScorer::new(0.8)),
            Box::new(MockDeriver::new()),
        );
        let attrs = PatientAttributes::new(75).with_condition("diabetes");

        let first = assessor.assess(&attrs).unwrap();
        let second = assessor.assess(&attrs).unwrap();
        assert_eq!(first.score.value(), second.score.value());
        assert_eq!(first.plan, second.plan);
    }
}
