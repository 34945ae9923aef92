//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use crate::base::prompts;

use super::types::Res;

/// Default Ollama generate endpoint.
fn default_ollama_api_url() -> String {
    "https://ollama.com/api/generate".to_string()
}

/// Default Ollama model to use.
fn default_ollama_model() -> String {
    "llama3.2".to_string()
}

/// Default sampling temperature for triage requests.
fn default_ollama_temperature() -> f32 {
    0.3
}

/// Default max generated tokens (`num_predict`).
fn default_ollama_max_tokens() -> u32 {
    500
}

/// Default request timeout, in seconds.
fn default_ollama_timeout_secs() -> u64 {
    30
}

/// Default system directive for the triage model.
fn default_triage_system_directive() -> String {
    prompts::TRIAGE_SYSTEM_DIRECTIVE.to_string()
}

/// Configuration for the triage service.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Configuration values, deserialized from the environment and config file.
#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Ollama API key, sent as a bearer token (`OLLAMA_API_KEY`).
    pub ollama_api_key: String,
    /// Ollama generate endpoint (`OLLAMA_API_URL`).
    #[serde(default = "default_ollama_api_url")]
    pub ollama_api_url: String,
    /// Model identifier (`OLLAMA_MODEL`).
    #[serde(default = "default_ollama_model")]
    pub ollama_model: String,
    /// Sampling temperature (`OLLAMA_TEMPERATURE`).
    /// Value between 0 and 2. Lower values keep the classification consistent.
    #[serde(default = "default_ollama_temperature")]
    pub ollama_temperature: f32,
    /// Maximum number of tokens the model may generate (`OLLAMA_MAX_TOKENS`).
    #[serde(default = "default_ollama_max_tokens")]
    pub ollama_max_tokens: u32,
    /// Overall request timeout in seconds (`OLLAMA_TIMEOUT_SECS`).
    #[serde(default = "default_ollama_timeout_secs")]
    pub ollama_timeout_secs: u64,
    /// Optional custom system directive to override the default (`TRIAGE_SYSTEM_DIRECTIVE`).
    #[serde(default = "default_triage_system_directive")]
    pub triage_system_directive: String,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            ollama_api_key: String::new(),
            ollama_api_url: default_ollama_api_url(),
            ollama_model: default_ollama_model(),
            ollama_temperature: default_ollama_temperature(),
            ollama_max_tokens: default_ollama_max_tokens(),
            ollama_timeout_secs: default_ollama_timeout_secs(),
            triage_system_directive: default_triage_system_directive(),
        }
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("MEDICARE_TRIAGE"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize::<ConfigInner>()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Res<()> {
        if self.ollama_api_url.trim().is_empty() {
            return Err(anyhow::anyhow!("Ollama API URL must not be empty."));
        }

        if self.ollama_temperature < 0.0 || self.ollama_temperature > 2.0 {
            return Err(anyhow::anyhow!("Ollama temperature must be between 0 and 2."));
        }

        if self.ollama_max_tokens < 1 || self.ollama_max_tokens > 128000 {
            return Err(anyhow::anyhow!("Ollama max tokens must be between 1 and 128000."));
        }

        if self.ollama_timeout_secs < 1 {
            return Err(anyhow::anyhow!("Ollama timeout must be at least 1 second."));
        }

        Ok(())
    }
}

// Tests.
