//! Service integrations for external APIs and collaborators.
//!
//! - LLM services (e.g., Ollama)
//! - Triage record storage (provided by the host backend)
//!
//! Each service module defines a generic trait plus a cloneable handle,
//! allowing for extensibility and easy testing.

pub mod llm;
pub mod store;
