//! Care plan types.
//!
//! A `CarePlan` is a pure function of (risk score, patient attributes) — no
//! hidden state, no history dependency. Plans are recomputed on demand and
//! optionally cached by the collaborator on the patient record.

use serde::{Deserialize, Serialize};

/// How often the patient should be seen under the current plan.
///
/// Expressed as a plain kebab-case string on the wire:
/// ```json
/// "weekly"
/// "monthly"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FollowUpCadence {
    Weekly,
    Monthly,
}

impl std::fmt::Display for FollowUpCadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FollowUpCadence::Weekly => write!(f, "weekly"),
            FollowUpCadence::Monthly => write!(f, "monthly"),
        }
    }
}

/// An actionable, discrete care plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarePlan {
    /// Ordered recommendations. The first item is the primary directive.
    pub recommendations: Vec<String>,
    /// Follow-up cadence for this plan.
    pub cadence: FollowUpCadence,
    /// Ordered reminder messages for the patient.
    pub reminders: Vec<String>,
}
