//! Integration with Large Language Model services.
//!
//! The `GenericLlmClient` trait is the seam between the triage classifier and
//! whatever hosts the model. The default implementation talks to Ollama.

pub mod ollama;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::TriageFailure;

// Traits.

/// Generic LLM client trait that clients must implement.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Run a single non-streaming generation for `prompt`.
    ///
    /// Returns the raw generated text. Implementations must not retry: the
    /// caller decides what to do with a failure.
    async fn generate(&self, prompt: &str) -> Result<String, TriageFailure>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }
}
