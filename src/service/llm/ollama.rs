//! Ollama `/api/generate` client.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument};

use crate::base::{
    config::Config,
    types::{Res, TriageFailure},
};

use super::{GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the ollama implementation.

impl LlmClient {
    pub fn ollama(config: &Config) -> Res<Self> {
        let client = OllamaLlmClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Wire types.

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

// Specific implementations.

/// Ollama LLM client implementation.
#[derive(Clone)]
pub struct OllamaLlmClient {
    client: reqwest::Client,
    config: Config,
}

impl OllamaLlmClient {
    /// Create a new Ollama LLM client.
    #[instrument(name = "OllamaLlmClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self { client, config: config.clone() })
    }

    /// Send the request and read the body, without the timeout applied.
    async fn send(&self, prompt: &str) -> Result<String, TriageFailure> {
        let request = GenerateRequest {
            model: &self.config.ollama_model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.ollama_temperature,
                num_predict: self.config.ollama_max_tokens,
            },
        };

        let response = self.client.post(&self.config.ollama_api_url).bearer_auth(&self.config.ollama_api_key).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(TriageFailure::Status { status: status.as_u16(), body });
        }

        let decoded: GenerateResponse = serde_json::from_str(&body).map_err(|e| TriageFailure::MalformedContent(e.to_string()))?;

        match decoded.response {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(TriageFailure::EmptyResponse),
        }
    }
}

#[async_trait]
impl GenericLlmClient for OllamaLlmClient {
    #[instrument(name = "OllamaLlmClient::generate", skip_all, fields(model = %self.config.ollama_model))]
    async fn generate(&self, prompt: &str) -> Result<String, TriageFailure> {
        let limit = self.config.ollama_timeout_secs;

        debug!("Sending generate request ({} prompt bytes)", prompt.len());

        match timeout(Duration::from_secs(limit), self.send(prompt)).await {
            Ok(Err(TriageFailure::Network(err))) if err.is_timeout() => Err(TriageFailure::Timeout(limit)),
            Ok(result) => result,
            Err(_) => Err(TriageFailure::Timeout(limit)),
        }
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    use super::*;
    use crate::base::config::ConfigInner;

    fn create_test_config(server: &MockServer) -> Config {
        Config::from(ConfigInner {
            ollama_api_key: "test_key".to_string(),
            ollama_api_url: format!("{}/api/generate", server.uri()),
            ollama_timeout_secs: 1,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_generate_sends_expected_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(header("authorization", "Bearer test_key"))
            .and(body_partial_json(serde_json::json!({
                "model": "llama3.2",
                "prompt": "hello",
                "stream": false,
                "options": { "num_predict": 500 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": "{\"severity\":\"low\"}", "done": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::ollama(&create_test_config(&server)).unwrap();
        let text = client.generate("hello").await.unwrap();

        assert_eq!(text, "{\"severity\":\"low\"}");
    }

    #[tokio::test]
    async fn test_generate_maps_non_200_to_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let client = LlmClient::ollama(&create_test_config(&server)).unwrap();
        let result = client.generate("hello").await;

        match result {
            Err(TriageFailure::Status { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "unauthorized");
            }
            other => panic!("Expected a status failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_maps_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": "" })))
            .mount(&server)
            .await;

        let client = LlmClient::ollama(&create_test_config(&server)).unwrap();

        assert!(matches!(client.generate("hello").await, Err(TriageFailure::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_generate_maps_invalid_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let client = LlmClient::ollama(&create_test_config(&server)).unwrap();

        assert!(matches!(client.generate("hello").await, Err(TriageFailure::MalformedContent(_))));
    }

    #[tokio::test]
    async fn test_generate_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": "{}" })).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = LlmClient::ollama(&create_test_config(&server)).unwrap();

        assert!(matches!(client.generate("hello").await, Err(TriageFailure::Timeout(1))));
    }

    #[tokio::test]
    async fn test_generate_connection_refused() {
        let config = Config::from(ConfigInner {
            ollama_api_key: "test_key".to_string(),
            ollama_api_url: "http://127.0.0.1:9/api/generate".to_string(),
            ollama_timeout_secs: 5,
            ..Default::default()
        });

        let client = LlmClient::ollama(&config).unwrap();

        assert!(client.generate("hello").await.is_err());
    }
}
