//! AWS Bedrock client for Claude models.
//!
//! Unlike the REST providers, Bedrock calls go through the AWS SDK so the
//! request gets SigV4-signed. The payload is the Anthropic messages format
//! with Bedrock's `anthropic_version` marker, and the response text lives at
//! `content[0].text`.

use std::time::Instant;

use async_trait::async_trait;
use aws_sdk_bedrockruntime::config::retry::RetryConfig;
use aws_sdk_bedrockruntime::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_smithy_types::error::display::DisplayErrorContext;
use tracing::{debug, error};

use llmgate_core::types::{
    ClaudeMessage, ClaudeRequest, ClaudeResponse, Completion, ANTHROPIC_VERSION,
};
use llmgate_core::{GateError, Result};

use crate::resolver::AwsConfig;
use crate::traits::Provider;

// ─────────────────────────────────────────────
// ClaudeParams
// ─────────────────────────────────────────────

/// Decoding parameters sent with every Bedrock Claude request.
#[derive(Clone, Debug)]
pub struct ClaudeParams {
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub stop_sequences: Vec<String>,
}

impl Default for ClaudeParams {
    fn default() -> Self {
        Self {
            max_tokens: 200,
            temperature: 1.0,
            top_p: 0.999,
            top_k: 250,
            stop_sequences: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────
// BedrockClient
// ─────────────────────────────────────────────

/// A client for one Claude model on AWS Bedrock.
pub struct BedrockClient {
    client: aws_sdk_bedrockruntime::Client,
    model: String,
    params: ClaudeParams,
}

impl std::fmt::Debug for BedrockClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BedrockClient")
            .field("model", &self.model)
            .field("params", &self.params)
            .finish()
    }
}

impl BedrockClient {
    /// Create a new client from resolved AWS credentials.
    ///
    /// Retries are disabled on the SDK config — one call, one round trip.
    pub fn new(config: AwsConfig, model: &str, params: ClaudeParams) -> Self {
        let credentials = Credentials::new(
            config.access_key_id,
            config.secret_access_key,
            None,
            None,
            "llmgate",
        );

        let mut builder = aws_sdk_bedrockruntime::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled());

        if let Some(url) = config.endpoint_url {
            builder = builder.endpoint_url(url);
        }

        BedrockClient {
            client: aws_sdk_bedrockruntime::Client::from_conf(builder.build()),
            model: model.to_string(),
            params,
        }
    }

    fn request_body(&self, prompt: &str) -> ClaudeRequest {
        ClaudeRequest {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            top_p: self.params.top_p,
            top_k: self.params.top_k,
            stop_sequences: self.params.stop_sequences.clone(),
            messages: vec![ClaudeMessage::user(prompt)],
        }
    }
}

#[async_trait]
impl Provider for BedrockClient {
    async fn respond(&self, prompt: &str) -> Result<Completion> {
        let start = Instant::now();
        let body = serde_json::to_vec(&self.request_body(prompt))
            .map_err(|e| GateError::malformed(e.to_string()))?;

        debug!(model = %self.model, "Invoking Bedrock model");

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                let status = e.raw_response().map(|r| r.status().as_u16());
                let detail = DisplayErrorContext(&e).to_string();
                error!(model = %self.model, error = %detail, "Bedrock invocation failed");
                match status {
                    Some(code) => GateError::provider_request(code, detail),
                    None => GateError::transport(detail),
                }
            })?;

        let claude_resp: ClaudeResponse = serde_json::from_slice(&response.body.into_inner())
            .map_err(|e| GateError::malformed(e.to_string()))?;

        let text = claude_resp
            .into_text()
            .ok_or_else(|| GateError::malformed("no text block in content[0]"))?;

        Ok(Completion {
            text,
            elapsed: start.elapsed(),
        })
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn display_name(&self) -> &str {
        "AWS Claude"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
