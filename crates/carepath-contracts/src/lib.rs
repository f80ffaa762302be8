//! # carepath-contracts
//!
//! Shared types and contracts for the Carepath risk engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod assessment;
pub mod error;
pub mod patient;
pub mod plan;
pub mod score;

#[cfg(test)]
mod tests {
    use super::*;
    use error::CarepathError;
    use patient::{PatientAttributes, PatientId};
    use plan::{CarePlan, FollowUpCadence};
    use score::RiskScore;

    // ── PatientAttributes ────────────────────────────────────────────────────

    #[test]
    fn attributes_condition_add_and_has() {
        let attrs = PatientAttributes::new(60)
            .with_condition("diabetes")
            .with_condition("hypertension");

        assert!(attrs.has_condition("diabetes"));
        assert!(attrs.has_condition("hypertension"));
        assert!(!attrs.has_condition("asthma"));
    }

    #[test]
    fn attributes_duplicate_condition_is_idempotent() {
        let attrs = PatientAttributes::new(60)
            .with_condition("diabetes")
            .with_condition("diabetes");

        // BTreeSet semantics: duplicates are silently dropped.
        assert_eq!(attrs.chronic_conditions.len(), 1);
    }

    #[test]
    fn attributes_from_raw_age_accepts_valid_age() {
        let attrs = PatientAttributes::from_raw_age(Some(75)).unwrap();
        assert_eq!(attrs.age, 75);
        assert!(attrs.chronic_conditions.is_empty());
    }

    #[test]
    fn attributes_from_raw_age_rejects_missing_age() {
        let err = PatientAttributes::from_raw_age(None).unwrap_err();
        match err {
            CarepathError::InvalidInput { reason } => {
                assert!(reason.contains("required"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn attributes_from_raw_age_rejects_negative_age() {
        let err = PatientAttributes::from_raw_age(Some(-1)).unwrap_err();
        match err {
            CarepathError::InvalidInput { reason } => {
                assert!(reason.contains("-1"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    // ── RiskScore ────────────────────────────────────────────────────────────

    #[test]
    fn risk_score_accepts_range_bounds() {
        assert_eq!(RiskScore::new(0.0).unwrap().value(), 0.0);
        assert_eq!(RiskScore::new(1.0).unwrap().value(), 1.0);
        assert_eq!(RiskScore::new(0.7).unwrap().value(), 0.7);
    }

    #[test]
    fn risk_score_rejects_out_of_range() {
        assert!(RiskScore::new(1.5).is_err());
        assert!(RiskScore::new(-0.1).is_err());
        assert!(RiskScore::new(f64::NAN).is_err());
        assert!(RiskScore::new(f64::INFINITY).is_err());
    }

    #[test]
    fn risk_score_clamped_clips_into_range() {
        assert_eq!(RiskScore::clamped(1.4).value(), 1.0);
        assert_eq!(RiskScore::clamped(-0.2).value(), 0.0);
        assert_eq!(RiskScore::clamped(0.35).value(), 0.35);
        assert_eq!(RiskScore::clamped(f64::NAN).value(), 0.0);
    }

    #[test]
    fn risk_score_serde_rejects_out_of_range() {
        // Deserialization goes through TryFrom<f64>, so a stored score that
        // was tampered with cannot re-enter the engine.
        let ok: Result<RiskScore, _> = serde_json::from_str("0.8");
        assert_eq!(ok.unwrap().value(), 0.8);

        let bad: Result<RiskScore, _> = serde_json::from_str("1.5");
        assert!(bad.is_err());
    }

    // ── Plan serde round-trips ───────────────────────────────────────────────

    #[test]
    fn cadence_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&FollowUpCadence::Weekly).unwrap(),
            "\"weekly\""
        );
        assert_eq!(
            serde_json::to_string(&FollowUpCadence::Monthly).unwrap(),
            "\"monthly\""
        );
    }

    #[test]
    fn care_plan_round_trips() {
        let original = CarePlan {
            recommendations: vec!["Intensive follow-up required.".to_string()],
            cadence: FollowUpCadence::Weekly,
            reminders: vec!["Check blood pressure weekly".to_string()],
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: CarePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    // ── PatientId ────────────────────────────────────────────────────────────

    #[test]
    fn patient_id_new_produces_unique_values() {
        let ids: Vec<PatientId> = (0..100).map(|_| PatientId::new()).collect();

        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── CarepathError display messages ───────────────────────────────────────

    #[test]
    fn error_invalid_input_display() {
        let err = CarepathError::InvalidInput {
            reason: "age must not be negative, got -5".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid input"));
        assert!(msg.contains("-5"));
    }

    #[test]
    fn error_config_error_display() {
        let err = CarepathError::ConfigError {
            reason: "age_buckets must not be empty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("age_buckets"));
    }
}
