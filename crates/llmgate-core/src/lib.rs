//! Shared types for llmgate.
//!
//! - [`types`] — wire request/response shapes for the two JSON dialects
//!   (OpenAI-compatible chat and Bedrock Claude) plus [`types::Completion`]
//! - [`error`] — the [`error::GateError`] taxonomy and `Result` alias

pub mod error;
pub mod types;

pub use error::{GateError, Result};
pub use types::Completion;
