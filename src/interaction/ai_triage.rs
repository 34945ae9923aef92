//! The AI-triage request flow the host backend runs for a patient.

use tracing::{info, instrument};

use crate::{
    base::types::{Res, TriageRecord},
    service::store::TriageStore,
    triage::TriageClassifier,
};

/// Classify a patient's symptoms and persist the resulting record.
///
/// Classification cannot fail; only store errors are returned.
#[instrument(skip_all, fields(patient_id = ?patient_id))]
pub async fn handle_ai_triage(symptoms: &str, patient_id: Option<String>, classifier: &TriageClassifier, store: &TriageStore) -> Res<TriageRecord> {
    let result = classifier.classify(symptoms).await;
    let record = TriageRecord::new(patient_id, symptoms, result);

    store.save_triage(&record).await?;

    info!(severity = %record.result.severity, "Stored triage record");

    Ok(record)
}

/// Get a patient's triage history, newest first.
#[instrument(skip(store))]
pub async fn get_patient_triages(patient_id: &str, store: &TriageStore) -> Res<Vec<TriageRecord>> {
    let mut records = store.list_triages(patient_id).await?;

    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(records)
}
