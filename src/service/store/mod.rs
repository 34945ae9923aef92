//! Persistence seam for triage records.
//!
//! Storage belongs to the surrounding backend; this crate only defines the
//! interface it hands finished records to.

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{Res, TriageRecord, Void};

// Traits.

/// Generic triage store trait that persistence backends must implement.
#[async_trait]
pub trait GenericTriageStore: Send + Sync + 'static {
    /// Persist a finished triage record.
    async fn save_triage(&self, record: &TriageRecord) -> Void;

    /// Get every triage record stored for a patient.
    ///
    /// No ordering is required of implementations.
    async fn list_triages(&self, patient_id: &str) -> Res<Vec<TriageRecord>>;
}

// Structs.

/// Triage store for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct TriageStore {
    inner: Arc<dyn GenericTriageStore>,
}

impl Deref for TriageStore {
    type Target = dyn GenericTriageStore;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl TriageStore {
    pub fn new(inner: Arc<dyn GenericTriageStore>) -> Self {
        Self { inner }
    }
}
