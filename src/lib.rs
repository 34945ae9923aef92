//! Library root for `medicare-triage`.
//!
//! Symptom triage for the medicare telehealth backend. A free-text symptom
//! description is mapped to a severity (low, medium, high, critical) with advice
//! and a consultation recommendation:
//! - The configured Ollama model is asked first.
//! - Any failure of that call falls back to a deterministic keyword classifier.
//!
//! Persistence, authentication and the GraphQL layer belong to the host backend;
//! they meet this crate through the traits in [`service`].

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;
pub mod triage;

use base::{config::Config, types::{Res, TriageResult}};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Builds the runtime from `config` and classifies a single symptom description.
pub async fn start(config: Config, symptoms: &str) -> Res<TriageResult> {
    info!("Starting medicare-triage ...");

    let runtime = runtime::Runtime::new(config)?;

    Ok(runtime.triage.classify(symptoms).await)
}
