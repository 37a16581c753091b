// src/services/generator.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub num_return_sequences: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self { max_length: 50, num_return_sequences: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("model returned no output")]
    EmptyOutput,
}

/// Text-generation backend used when no rule matches.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<GeneratedText>, GenerationError>;
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

/// Client for a hosted Hugging Face text-generation endpoint.
///
/// Built once at startup; the underlying `reqwest::Client` is shared by every
/// request and never reconfigured.
#[derive(Debug, Clone)]
pub struct HuggingFaceGenerator {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HuggingFaceGenerator {
    pub fn new(
        base_url: &str,
        model: &str,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{}/{}", base_url.trim_end_matches('/'), model);
        Ok(Self { client, endpoint, api_token })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<GeneratedText>, GenerationError> {
        let mut req = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest { inputs: prompt, parameters: params });

        if let Some(token) = &self.api_token {
            req = req.bearer_auth(token);
        }

        let res = req.send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(GenerationError::Status { status, body });
        }

        debug!(endpoint = %self.endpoint, bytes = body.len(), "model responded");
        Ok(serde_json::from_str(&body)?)
    }
}

/// Ask the model for a continuation of `cleaned`. Both arms are display text:
/// `Err` carries the apology built from whatever went wrong.
pub async fn fallback_reply(generator: &dyn TextGenerator, cleaned: &str) -> Result<String, String> {
    let outcome = generator
        .generate(cleaned, &GenerationParams::default())
        .await
        .and_then(|out| {
            out.into_iter()
                .next()
                .map(|first| first.generated_text)
                .ok_or(GenerationError::EmptyOutput)
        });

    outcome.map_err(|e| {
        warn!(error = %e, "text generation failed");
        format!("Sorry, I encountered an error: {}", e)
    })
}
