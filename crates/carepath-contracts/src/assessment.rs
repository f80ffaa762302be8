//! The derived assessment record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::plan::CarePlan;
use crate::score::RiskScore;

/// The result of one assessment: score plus derived plan.
///
/// Stamped by the composition layer, persisted by the collaborator alongside
/// the patient record. The pure operations (`score`, `derive_plan`) never
/// read the timestamp — it exists for the record, not the decision logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// The normalized risk score.
    pub score: RiskScore,
    /// The care plan derived from the score.
    pub plan: CarePlan,
    /// Wall-clock time the assessment was produced (UTC).
    pub assessed_at: DateTime<Utc>,
}
