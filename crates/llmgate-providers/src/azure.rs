//! Azure OpenAI client.
//!
//! Azure differs from the other REST providers in two ways: authentication
//! uses an `api-key` header instead of a Bearer token, and the request goes
//! to a full deployment URL (which already names the model and API version),
//! so the body carries no `model` field.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, error};

use llmgate_core::types::{ChatRequest, ChatResponse, Completion};
use llmgate_core::{GateError, Result};

use crate::resolver::ProviderConfig;
use crate::traits::Provider;

/// A client for an Azure OpenAI deployment.
pub struct AzureClient {
    client: reqwest::Client,
    /// Full deployment URL, e.g.
    /// `https://<resource>.openai.azure.com/openai/deployments/<dep>/chat/completions?api-version=...`
    api_url: String,
    api_key: String,
    /// Logical model name the caller asked for (the deployment implies the
    /// real model; this is kept for reporting only).
    model: String,
}

impl std::fmt::Debug for AzureClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

impl AzureClient {
    /// Create a new client from a resolved config.
    pub fn new(config: ProviderConfig, model: &str) -> Self {
        AzureClient {
            client: reqwest::Client::new(),
            api_url: config.endpoint,
            api_key: config.api_key,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl Provider for AzureClient {
    async fn respond(&self, prompt: &str) -> Result<Completion> {
        let start = Instant::now();
        let body = ChatRequest::single_turn(None, prompt);

        debug!(model = %self.model, "Sending Azure chat completion request");

        let response = self
            .client
            .post(&self.api_url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Azure HTTP request failed");
                GateError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(status = %status, body = %error_body, "Azure API error");
            return Err(GateError::provider_request(status.as_u16(), error_body));
        }

        let chat_resp: ChatResponse = response
            .json()
            .await
            .map_err(|e| GateError::malformed(e.to_string()))?;

        let text = chat_resp.into_text().ok_or_else(|| {
            GateError::malformed("no assistant content in choices[0].message")
        })?;

        Ok(Completion {
            text,
            elapsed: start.elapsed(),
        })
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn display_name(&self) -> &str {
        "Azure OpenAI"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
