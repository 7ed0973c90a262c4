//! Wire types for the provider APIs.
//!
//! Two JSON dialects are spoken here:
//! - the OpenAI-compatible `/chat/completions` format (OpenAI, xAI, DeepSeek,
//!   Azure) — request [`ChatRequest`], response [`ChatResponse`];
//! - the Bedrock Claude `invoke_model` format — request [`ClaudeRequest`],
//!   response [`ClaudeResponse`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Completion — what every provider call returns
// ─────────────────────────────────────────────

/// The result of one prompt/response round trip.
#[derive(Clone, Debug)]
pub struct Completion {
    /// The assistant's text.
    pub text: String,
    /// Wall-clock duration of the round trip, as observed by the client.
    pub elapsed: Duration,
}

impl Completion {
    /// Elapsed time in seconds, as a float.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

// ─────────────────────────────────────────────
// OpenAI-compatible chat format
// ─────────────────────────────────────────────

/// A single chat message. The facade only ever sends the user role.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// Create a user message wrapping the prompt.
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for an OpenAI-compatible chat completions endpoint.
///
/// `model` is omitted for Azure, where the deployment in the URL implies it.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// Build a single-turn request for `model` (or no model field for Azure).
    pub fn single_turn(model: Option<&str>, prompt: &str) -> Self {
        ChatRequest {
            model: model.map(String::from),
            messages: vec![Message::user(prompt)],
        }
    }
}

/// Response body from an OpenAI-compatible chat completions endpoint.
/// Only the fields needed to extract `choices[0].message.content`.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// A single choice in a chat completions response.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
}

/// The assistant message within a choice.
#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Extract the assistant text, consuming the response.
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}

// ─────────────────────────────────────────────
// Bedrock Claude format
// ─────────────────────────────────────────────

/// The `anthropic_version` value Bedrock expects.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Request body for a Bedrock Claude `invoke_model` call.
#[derive(Debug, Serialize)]
pub struct ClaudeRequest {
    pub anthropic_version: &'static str,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub stop_sequences: Vec<String>,
    pub messages: Vec<ClaudeMessage>,
}

/// A Claude message — content is a list of typed blocks, not a string.
#[derive(Clone, Debug, Serialize)]
pub struct ClaudeMessage {
    pub role: String,
    pub content: Vec<ClaudeContentBlock>,
}

impl ClaudeMessage {
    /// Create a user message with a single text block.
    pub fn user(text: impl Into<String>) -> Self {
        ClaudeMessage {
            role: "user".to_string(),
            content: vec![ClaudeContentBlock {
                block_type: "text".to_string(),
                text: text.into(),
            }],
        }
    }
}

/// A typed content block in a Claude message.
#[derive(Clone, Debug, Serialize)]
pub struct ClaudeContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: String,
}

/// Response body from a Bedrock Claude `invoke_model` call.
/// Only the fields needed to extract `content[0].text`.
#[derive(Debug, Deserialize)]
pub struct ClaudeResponse {
    pub content: Vec<ClaudeText>,
}

/// A text block in a Claude response.
#[derive(Debug, Deserialize)]
pub struct ClaudeText {
    pub text: String,
}

impl ClaudeResponse {
    /// Extract the assistant text, consuming the response.
    pub fn into_text(self) -> Option<String> {
        self.content.into_iter().next().map(|b| b.text)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
