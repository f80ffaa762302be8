//! Patient identity and attribute types.
//!
//! `PatientAttributes` is the sole input to the risk engine. It is immutable
//! per call and carries no record identity — identifiers and timestamps live
//! on `PatientRecord`, which only the collaborator (persistence/demo layer)
//! touches.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::error::{CarepathError, CarepathResult};

/// Unique identifier for a patient record.
///
/// Assigned by the collaborator when a record is created. The scoring and
/// plan-derivation operations never see it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(pub uuid::Uuid);

impl PatientId {
    /// Create a new, unique patient ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for PatientId {
    fn default() -> Self {
        Self::new()
    }
}

/// The clinical attribute set the risk engine scores.
///
/// Collections are ordered (BTree) so that no downstream iteration order
/// depends on hash seeds — determinism is part of the scoring contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAttributes {
    /// Age in years. Required; a domain-reasonable upper bound (e.g. ≤ 130)
    /// is the collaborator's validation concern.
    pub age: u32,

    /// Chronic condition names (e.g. "diabetes", "hypertension"). May be
    /// empty. Conditions the scorer does not recognize contribute zero
    /// weight — they are never an error.
    #[serde(default)]
    pub chronic_conditions: BTreeSet<String>,

    /// Open-ended numeric features, reserved for future scoring factors.
    /// Ignored by the current scorer.
    #[serde(default)]
    pub extra_features: BTreeMap<String, f64>,
}

impl PatientAttributes {
    /// Construct attributes for a patient of the given age, with no
    /// conditions and no extra features.
    pub fn new(age: u32) -> Self {
        Self {
            age,
            chronic_conditions: BTreeSet::new(),
            extra_features: BTreeMap::new(),
        }
    }

    /// Construct attributes from a raw, collaborator-supplied age value.
    ///
    /// This is the checked boundary for untyped input: returns
    /// `CarepathError::InvalidInput` when the age is missing or negative.
    pub fn from_raw_age(raw: Option<i64>) -> CarepathResult<Self> {
        match raw {
            None => Err(CarepathError::InvalidInput {
                reason: "age is required".to_string(),
            }),
            Some(age) if age < 0 => Err(CarepathError::InvalidInput {
                reason: format!("age must not be negative, got {}", age),
            }),
            Some(age) => Ok(Self::new(age as u32)),
        }
    }

    /// Add a chronic condition. Duplicates are silently dropped.
    pub fn with_condition(mut self, name: impl Into<String>) -> Self {
        self.chronic_conditions.insert(name.into());
        self
    }

    /// Add a named numeric feature.
    pub fn with_feature(mut self, name: impl Into<String>, value: f64) -> Self {
        self.extra_features.insert(name.into(), value);
        self
    }

    /// Return true if the given chronic condition is present.
    pub fn has_condition(&self, name: &str) -> bool {
        self.chronic_conditions.contains(name)
    }
}

/// A patient record as the collaborator stores it.
///
/// The engine only ever reads `attributes`; `assessment` is where the
/// collaborator caches the most recent derived values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Record identity, assigned at creation.
    pub id: PatientId,
    /// Display name. Fictional in all bundled data.
    pub name: String,
    /// The attribute set assessments are computed from.
    pub attributes: PatientAttributes,
    /// The most recent assessment, if one has been recorded.
    pub assessment: Option<Assessment>,
}

impl PatientRecord {
    /// Create a record with a fresh ID and no assessment.
    pub fn new(name: impl Into<String>, attributes: PatientAttributes) -> Self {
        Self {
            id: PatientId::new(),
            name: name.into(),
            attributes,
            assessment: None,
        }
    }
}
