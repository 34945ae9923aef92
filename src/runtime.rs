//! Runtime services and shared state for the triage service.

use tracing::instrument;

use crate::{
    base::{config::Config, types::Res},
    service::llm::LlmClient,
    triage::TriageClassifier,
};

/// Runtime service context that can be shared across the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The LLM client instance.
    pub llm: LlmClient,
    /// The triage classifier, backed by `llm`.
    pub triage: TriageClassifier,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the LLM client.
        let llm = LlmClient::ollama(&config)?;

        Ok(Self::with_llm(config, llm))
    }

    /// Create a runtime around an existing LLM client.
    pub fn with_llm(config: Config, llm: LlmClient) -> Self {
        let triage = TriageClassifier::new(&config, llm.clone());

        Self { config, llm, triage }
    }
}
