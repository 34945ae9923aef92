//! Symptom triage.
//!
//! The classifier asks the model first and falls back to keyword matching on
//! any failure, so `classify` always produces a result.

pub mod fallback;
pub mod parse;

use tracing::{info, instrument, warn};

use crate::{
    base::{
        config::Config,
        prompts::build_triage_prompt,
        types::{TriageFailure, TriageResult},
    },
    service::llm::LlmClient,
};

/// Maps symptom descriptions to a severity with advice.
///
/// This is trivially cloneable and holds no state between calls.
#[derive(Clone)]
pub struct TriageClassifier {
    llm: LlmClient,
    system_directive: String,
}

impl TriageClassifier {
    pub fn new(config: &Config, llm: LlmClient) -> Self {
        Self {
            llm,
            system_directive: config.triage_system_directive.clone(),
        }
    }

    /// Classify a symptom description.
    ///
    /// Never fails: remote errors are logged and the keyword classifier answers instead.
    #[instrument(name = "TriageClassifier::classify", skip_all, fields(symptoms_len = symptoms.len()))]
    pub async fn classify(&self, symptoms: &str) -> TriageResult {
        match self.classify_remote(symptoms).await {
            Ok(result) => {
                info!(severity = %result.severity, "Model triage succeeded");
                result
            }
            Err(err) => {
                warn!("Model triage failed, using keyword fallback: {err}");

                let result = fallback::classify_by_keywords(symptoms);
                info!(severity = %result.severity, "Keyword triage completed");
                result
            }
        }
    }

    /// Single attempt at the model path.
    async fn classify_remote(&self, symptoms: &str) -> Result<TriageResult, TriageFailure> {
        let prompt = build_triage_prompt(&self.system_directive, symptoms);
        let content = self.llm.generate(&prompt).await?;

        parse::parse_model_output(&content)
    }
}

// Tests.
