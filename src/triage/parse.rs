//! Decoding of model-generated triage text.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::base::types::{RemoteTriagePayload, Severity, TriageFailure, TriageResult};

/// Advice used when the model omits it.
pub const DEFAULT_ADVICE: &str = "monitor symptoms and consult a doctor if necessary";
/// Recommendation used when the model omits it.
pub const DEFAULT_RECOMMENDATION: &str = "monitoring recommended";

// Statics.

static EMBEDDED_OBJECT: OnceLock<Regex> = OnceLock::new();

/// First brace-delimited object, allowing one level of nested braces.
fn embedded_object_regex() -> &'static Regex {
    EMBEDDED_OBJECT.get_or_init(|| Regex::new(r"\{[^{}]*(?:\{[^{}]*\}[^{}]*)*\}").unwrap())
}

/// Parse the text produced by the model into a triage result.
///
/// The text is parsed as JSON directly; failing that, the first embedded
/// object is extracted and parsed. Missing or invalid fields get defaults.
pub fn parse_model_output(content: &str) -> Result<TriageResult, TriageFailure> {
    if content.is_empty() {
        return Err(TriageFailure::EmptyResponse);
    }

    let value = match serde_json::from_str::<Value>(content) {
        Ok(value) => value,
        Err(_) => {
            let found = embedded_object_regex()
                .find(content)
                .ok_or_else(|| TriageFailure::MalformedContent("no JSON object in model output".to_string()))?;

            serde_json::from_str(found.as_str()).map_err(|e| TriageFailure::MalformedContent(e.to_string()))?
        }
    };

    if !value.is_object() {
        return Err(TriageFailure::MalformedContent(format!("expected a JSON object, got `{value}`")));
    }

    let payload: RemoteTriagePayload = serde_json::from_value(value).map_err(|e| TriageFailure::MalformedContent(e.to_string()))?;

    Ok(normalize_payload(payload))
}

/// Apply defaults and severity coercion to a decoded payload.
pub fn normalize_payload(payload: RemoteTriagePayload) -> TriageResult {
    let severity = payload.severity.as_deref().map(Severity::from_model_value).unwrap_or(Severity::Medium);

    TriageResult {
        severity,
        advice: non_empty(payload.advice).unwrap_or_else(|| DEFAULT_ADVICE.to_string()),
        recommendation: non_empty(payload.recommendation).unwrap_or_else(|| DEFAULT_RECOMMENDATION.to_string()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// Tests.
