//! Error taxonomy for llmgate.
//!
//! Two families matter to callers: configuration problems (caught before any
//! network traffic) and provider request failures (the upstream said no).
//! Nothing here is retried or recovered internally — every error is surfaced
//! as-is to the caller.

use thiserror::Error;

/// Result type alias used across the llmgate crates.
pub type Result<T> = std::result::Result<T, GateError>;

/// All errors the facade can produce.
#[derive(Error, Debug)]
pub enum GateError {
    /// Unknown model name, or a required credential is unset/empty.
    /// Raised at resolution time, never during a request.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The provider answered with a non-success HTTP status.
    /// Carries the upstream status code and response body verbatim.
    #[error("provider request failed with status {status}: {body}")]
    ProviderRequest { status: u16, body: String },

    /// The request never produced an HTTP status (connect failure, DNS, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx response that doesn't contain the expected text field.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl GateError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a provider request error from an upstream status and body.
    pub fn provider_request(status: u16, body: impl Into<String>) -> Self {
        Self::ProviderRequest {
            status,
            body: body.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
