//! In-memory patient registry.
//!
//! `PatientRegistry` is the demo's stand-in for the persistence collaborator:
//! it keeps records in a `Vec` protected by a `Mutex`, making it safe to
//! share across threads while assessments are recorded. Durable storage,
//! migration, and querying belong to a real collaborator, not this crate.

use std::sync::Mutex;

use carepath_contracts::{
    assessment::Assessment,
    error::{CarepathError, CarepathResult},
    patient::{PatientId, PatientRecord},
};

/// A Mutex-guarded, in-memory patient store.
pub struct PatientRegistry {
    state: Mutex<Vec<PatientRecord>>,
}

impl PatientRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(Vec::new()),
        }
    }

    /// Insert a record, returning its ID.
    pub fn insert(&self, record: PatientRecord) -> PatientId {
        let id = record.id.clone();
        self.state.lock().expect("registry lock poisoned").push(record);
        id
    }

    /// Look up a record by ID.
    pub fn get(&self, id: &PatientId) -> Option<PatientRecord> {
        self.state
            .lock()
            .expect("registry lock poisoned")
            .iter()
            .find(|record| &record.id == id)
            .cloned()
    }

    /// Attach an assessment to the record with the given ID, replacing any
    /// previous one.
    ///
    /// Returns `CarepathError::InvalidInput` when no record has that ID.
    pub fn record_assessment(
        &self,
        id: &PatientId,
        assessment: Assessment,
    ) -> CarepathResult<()> {
        let mut records = self.state.lock().expect("registry lock poisoned");
        match records.iter_mut().find(|record| &record.id == id) {
            Some(record) => {
                record.assessment = Some(assessment);
                Ok(())
            }
            None => Err(CarepathError::InvalidInput {
                reason: format!("no patient record with id {}", id.0),
            }),
        }
    }

    /// Snapshot of all records in insertion order.
    pub fn all(&self) -> Vec<PatientRecord> {
        self.state.lock().expect("registry lock poisoned").clone()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.state.lock().expect("registry lock poisoned").len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PatientRegistry {
    fn default() -> Self {
        Self::new()
    }
}
