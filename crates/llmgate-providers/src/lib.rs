//! Provider clients for llmgate.
//!
//! # Architecture
//!
//! - [`traits::Provider`] — trait that all provider clients implement
//! - [`registry`] — static specs for the 5 supported providers + model lookup
//! - [`chat::ChatClient`] — generic OpenAI-compatible HTTP client
//!   (OpenAI, xAI, DeepSeek)
//! - [`azure::AzureClient`] — Azure OpenAI deployment client
//! - [`bedrock::BedrockClient`] — AWS Bedrock Claude client
//! - [`resolver::resolve`] — model name + environment → ready client

pub mod azure;
pub mod bedrock;
pub mod chat;
pub mod registry;
pub mod resolver;
pub mod traits;

// Re-export main types for convenience
pub use azure::AzureClient;
pub use bedrock::{BedrockClient, ClaudeParams};
pub use chat::ChatClient;
pub use registry::{ProviderKind, ProviderSpec, PROVIDERS};
pub use resolver::{resolve, resolve_with_params, AwsConfig, ProviderConfig};
pub use traits::Provider;
