//! Common types shared across the triage pipeline.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Urgency of a symptom report, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, least urgent first.
    pub const ALL: [Severity; 4] = [Severity::Low, Severity::Medium, Severity::High, Severity::Critical];

    /// The wire value (`low`, `medium`, `high`, `critical`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Human-facing label shown to patients.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Faible",
            Severity::Medium => "Modérée",
            Severity::High => "Élevée",
            Severity::Critical => "Critique",
        }
    }

    /// Interpret a severity reported by the model.
    ///
    /// Matching is case-insensitive; anything outside the four known values becomes `Medium`.
    pub fn from_model_value(value: &str) -> Self {
        value.parse().unwrap_or(Severity::Medium)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Err;

    fn from_str(s: &str) -> Res<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(anyhow::anyhow!("Invalid severity: {s}. Must be one of: low, medium, high, critical")),
        }
    }
}

/// The outcome of classifying one symptom report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub severity: Severity,
    pub advice: String,
    pub recommendation: String,
}

/// The JSON object the model is asked to produce.
///
/// Every field is optional; defaults are applied by the classifier.
#[derive(Debug, Default, Deserialize)]
pub struct RemoteTriagePayload {
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Reasons the remote classification step can fail.
///
/// These never leave the classifier: each one selects the keyword fallback.
#[derive(Debug, Error)]
pub enum TriageFailure {
    #[error("connection to the model endpoint failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("model request timed out after {0}s")]
    Timeout(u64),
    #[error("model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("model returned an empty response")]
    EmptyResponse,
    #[error("model response could not be parsed: {0}")]
    MalformedContent(String),
}

/// A triage result attributed to a patient, ready to be handed to persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRecord {
    /// The patient who submitted the symptoms, if known.
    pub patient_id: Option<String>,
    /// The raw symptom description.
    pub symptoms: String,
    #[serde(flatten)]
    pub result: TriageResult,
    pub created_at: DateTime<Utc>,
}

impl TriageRecord {
    pub fn new(patient_id: Option<String>, symptoms: &str, result: TriageResult) -> Self {
        Self {
            patient_id,
            symptoms: symptoms.to_string(),
            result,
            created_at: Utc::now(),
        }
    }
}

// Tests.
