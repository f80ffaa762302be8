//! Simulated patient data for the Carepath demo.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. This module acts as a stand-in for the real intake layer
//! in a production deployment.

use carepath_contracts::patient::{PatientAttributes, PatientRecord};

/// Return the fictional demo cohort.
///
/// The cohort is chosen to land on each interesting spot of the default
/// calibration:
/// - a clear HIGH (75, diabetes → 0.80)
/// - a score exactly at the threshold, which stays LOW (72, asthma → 0.70)
/// - a clipped score (81, heart failure + diabetes → raw 1.05, clipped 1.00)
/// - plain LOW cases, one carrying reserved extra features
pub fn mock_cohort() -> Vec<PatientRecord> {
    vec![
        PatientRecord::new(
            "Elena Vasquez",
            PatientAttributes::new(75).with_condition("diabetes"),
        ),
        PatientRecord::new(
            "Marcus Webb",
            PatientAttributes::new(72).with_condition("asthma"),
        ),
        PatientRecord::new(
            "Priya Raman",
            PatientAttributes::new(42).with_condition("asthma"),
        ),
        PatientRecord::new(
            "Tomás Ferreira",
            PatientAttributes::new(81)
                .with_condition("heart_failure")
                .with_condition("diabetes"),
        ),
        PatientRecord::new("June Okafor", PatientAttributes::new(29)),
        PatientRecord::new(
            "Harold Lindqvist",
            PatientAttributes::new(67)
                .with_condition("copd")
                .with_feature("bmi", 31.5)
                .with_feature("hba1c", 6.9),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use carepath_contracts::plan::FollowUpCadence;
    use carepath_core::{traits::RiskScorer, Assessor};
    use carepath_plan::ThresholdPlanner;
    use carepath_scoring::WeightedScorer;

    use super::mock_cohort;

    /// End-to-end over the bundled configuration: every mock patient lands
    /// on the documented score and regime.
    #[test]
    fn cohort_assessments_match_default_calibration() {
        let config = include_str!("../config/carepath.toml");
        let scorer = WeightedScorer::from_toml_str(config).unwrap();
        let planner = ThresholdPlanner::from_toml_str(config).unwrap();
        let assessor = Assessor::new(Box::new(scorer), Box::new(planner));

        let expected = [
            ("Elena Vasquez", 0.80, FollowUpCadence::Weekly),
            ("Marcus Webb", 0.70, FollowUpCadence::Monthly),
            ("Priya Raman", 0.30, FollowUpCadence::Monthly),
            ("Tomás Ferreira", 1.00, FollowUpCadence::Weekly),
            ("June Okafor", 0.10, FollowUpCadence::Monthly),
            ("Harold Lindqvist", 0.50, FollowUpCadence::Monthly),
        ];

        let cohort = mock_cohort();
        assert_eq!(cohort.len(), expected.len());

        for (record, (name, score, cadence)) in cohort.iter().zip(expected) {
            assert_eq!(record.name, name);
            let assessment = assessor.assess(&record.attributes).unwrap();
            assert!(
                (assessment.score.value() - score).abs() < 1e-12,
                "{}: expected score {}, got {}",
                name,
                score,
                assessment.score.value()
            );
            assert_eq!(assessment.plan.cadence, cadence, "{}: wrong cadence", name);
        }
    }

    /// The bundled TOML and the in-code defaults describe the same
    /// calibration.
    #[test]
    fn bundled_config_matches_code_defaults() {
        let config = include_str!("../config/carepath.toml");
        let from_file = WeightedScorer::from_toml_str(config).unwrap();
        let from_code = WeightedScorer::with_defaults();

        assert_eq!(from_file.config(), from_code.config());

        let planner = ThresholdPlanner::from_toml_str(config).unwrap();
        assert_eq!(planner.threshold(), 0.7);

        // Spot check: the two scorers agree on a mock patient.
        let attrs = &mock_cohort()[0].attributes;
        assert_eq!(
            from_file.score(attrs).unwrap().value(),
            from_code.score(attrs).unwrap().value()
        );
    }
}
