//! Generic client for OpenAI-compatible `/chat/completions` APIs.
//!
//! Covers OpenAI, xAI and DeepSeek — the three providers that differ only in
//! base URL and API key. Which one a given instance talks to is decided by
//! the [`ProviderSpec`] it was built from.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, error};

use llmgate_core::types::{ChatRequest, ChatResponse, Completion};
use llmgate_core::{GateError, Result};

use crate::registry::ProviderSpec;
use crate::resolver::ProviderConfig;
use crate::traits::Provider;

// ─────────────────────────────────────────────
// ChatClient
// ─────────────────────────────────────────────

/// A client for any OpenAI-compatible chat completions endpoint.
pub struct ChatClient {
    /// HTTP client (connection-pooled, default transport settings).
    client: reqwest::Client,
    /// API base URL (e.g. `"https://api.openai.com/v1"`).
    api_base: String,
    /// API key for Bearer authentication.
    api_key: String,
    /// The model this client is bound to.
    model: String,
    /// Static spec, for display names in logs.
    spec: &'static ProviderSpec,
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("provider", &self.spec.display_name)
            .finish()
    }
}

impl ChatClient {
    /// Create a new client from a resolved config and its spec.
    pub fn new(config: ProviderConfig, spec: &'static ProviderSpec, model: &str) -> Self {
        ChatClient {
            client: reqwest::Client::new(),
            api_base: config.endpoint,
            api_key: config.api_key,
            model: model.to_string(),
            spec,
        }
    }

    /// Build the full chat completions URL.
    fn completions_url(&self) -> String {
        let base = self.api_base.trim_end_matches('/');
        format!("{}/chat/completions", base)
    }
}

#[async_trait]
impl Provider for ChatClient {
    async fn respond(&self, prompt: &str) -> Result<Completion> {
        let start = Instant::now();
        let url = self.completions_url();
        let body = ChatRequest::single_turn(Some(&self.model), prompt);

        debug!(
            provider = self.spec.display_name,
            model = %self.model,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = self.spec.display_name, error = %e, "HTTP request failed");
                GateError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(
                provider = self.spec.display_name,
                status = %status,
                body = %error_body,
                "API error"
            );
            return Err(GateError::provider_request(status.as_u16(), error_body));
        }

        let chat_resp: ChatResponse = response
            .json()
            .await
            .map_err(|e| GateError::malformed(e.to_string()))?;

        let text = chat_resp.into_text().ok_or_else(|| {
            GateError::malformed("no assistant content in choices[0].message")
        })?;

        let elapsed = start.elapsed();
        debug!(
            provider = self.spec.display_name,
            elapsed_secs = elapsed.as_secs_f64(),
            "Chat completion received"
        );

        Ok(Completion { text, elapsed })
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn display_name(&self) -> &str {
        self.spec.display_name
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
