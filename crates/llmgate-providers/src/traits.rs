//! The provider abstraction — one trait, one method that matters.

use async_trait::async_trait;
use llmgate_core::{Completion, Result};

/// Trait that all provider clients implement.
///
/// A client is fully configured at construction time (the resolver enforces
/// credential presence there), so `respond` never has to validate config.
#[async_trait]
pub trait Provider: Send + Sync + std::fmt::Debug {
    /// Send `prompt` as a single user message and return the assistant text
    /// together with the wall-clock time the round trip took.
    ///
    /// One synchronous network call per invocation — no retries, no
    /// streaming, no fallback to another provider.
    async fn respond(&self, prompt: &str) -> Result<Completion>;

    /// The model this client is bound to.
    fn model(&self) -> &str;

    /// Display name for logging.
    fn display_name(&self) -> &str;
}
