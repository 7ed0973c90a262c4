//! Configuration resolver — model name + environment → ready provider client.
//!
//! Resolution happens once, up front: the model name is matched against the
//! registry, every required environment variable is read and validated, and
//! a fully configured client comes back. An unset or empty variable fails
//! here with a configuration error so that `respond` never has to check.

use tracing::debug;

use llmgate_core::{GateError, Result};

use crate::azure::AzureClient;
use crate::bedrock::{BedrockClient, ClaudeParams};
use crate::chat::ChatClient;
use crate::registry::{self, ProviderKind, ProviderSpec};
use crate::traits::Provider;

// ─────────────────────────────────────────────
// Resolved configuration
// ─────────────────────────────────────────────

/// Resolved configuration for one REST provider client.
///
/// Built once per `resolve` call and moved into the client — request paths
/// never look at the process environment.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: String,
    /// Base URL for the chat providers; full deployment URL for Azure.
    pub endpoint: String,
}

/// Resolved AWS credentials for the Bedrock client.
#[derive(Clone, Debug)]
pub struct AwsConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    /// Endpoint override (`AWS_ENDPOINT_URL`); None for the real service.
    pub endpoint_url: Option<String>,
}

// ─────────────────────────────────────────────
// Resolution
// ─────────────────────────────────────────────

/// Resolve `model` into a ready-to-use provider client, reading credentials
/// from the process environment.
///
/// Fails with [`GateError::Configuration`] when the model is unknown or a
/// required environment variable is unset/empty.
pub fn resolve(model: &str) -> Result<Box<dyn Provider>> {
    resolve_with_params(model, ClaudeParams::default())
}

/// Resolve with caller-supplied decoding parameters.
///
/// The parameters only reach the Bedrock Claude client — the REST chat
/// payloads carry no tunables.
pub fn resolve_with_params(model: &str, params: ClaudeParams) -> Result<Box<dyn Provider>> {
    resolve_with_env(model, params, |name| std::env::var(name).ok())
}

/// Resolve against an arbitrary environment lookup.
///
/// `resolve` passes `std::env::var`; tests pass a map so they never mutate
/// process-global state.
pub fn resolve_with_env<F>(
    model: &str,
    params: ClaudeParams,
    env: F,
) -> Result<Box<dyn Provider>>
where
    F: Fn(&str) -> Option<String>,
{
    let spec = registry::find_by_model(model).ok_or_else(|| {
        GateError::configuration(format!(
            "unknown model '{}' (known models: {})",
            model,
            registry::known_models().join(", ")
        ))
    })?;

    debug!(provider = spec.display_name, model, "Resolving provider");

    match spec.kind {
        ProviderKind::OpenAi | ProviderKind::Xai | ProviderKind::DeepSeek => {
            let api_key = required(spec, spec.required_env[0], &env)?;
            let endpoint = base_url(spec, &env);
            let config = ProviderConfig {
                kind: spec.kind,
                api_key,
                endpoint,
            };
            Ok(Box::new(ChatClient::new(config, spec, model)))
        }
        ProviderKind::Azure => {
            let api_key = required(spec, "AZURE_OPENAI_API_KEY", &env)?;
            let endpoint = required(spec, "AZURE_OPENAI_URL", &env)?;
            let config = ProviderConfig {
                kind: spec.kind,
                api_key,
                endpoint,
            };
            Ok(Box::new(AzureClient::new(config, model)))
        }
        ProviderKind::AwsClaude => {
            let config = AwsConfig {
                access_key_id: required(spec, "AWS_ACCESS_KEY_ID", &env)?,
                secret_access_key: required(spec, "AWS_SECRET_ACCESS_KEY", &env)?,
                region: required(spec, "AWS_REGION", &env)?,
                endpoint_url: env("AWS_ENDPOINT_URL").filter(|v| !v.is_empty()),
            };
            Ok(Box::new(BedrockClient::new(config, model, params)))
        }
    }
}

/// Read a required environment variable; unset or empty is a configuration
/// error naming the variable and the provider.
fn required<F>(spec: &ProviderSpec, name: &str, env: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match env(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(GateError::configuration(format!(
            "{} is not set ({} credentials missing)",
            name, spec.display_name
        ))),
    }
}

/// Resolve the base URL for a chat provider: env override, else the spec
/// default.
fn base_url<F>(spec: &ProviderSpec, env: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    spec.env_base
        .and_then(|var| env(var))
        .filter(|v| !v.is_empty())
        .or_else(|| spec.default_api_base.map(String::from))
        .unwrap_or_default()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_resolve_openai() {
        let env = env_from(&[("OPENAI_API_KEY", "sk-test-123")]);
        let client = resolve_with_env("gpt-4o", ClaudeParams::default(), env).unwrap();
        assert_eq!(client.model(), "gpt-4o");
        assert_eq!(client.display_name(), "OpenAI");
    }

    #[test]
    fn test_resolve_xai() {
        let env = env_from(&[("XAI_API_KEY", "xai-test")]);
        let client = resolve_with_env("grok-2-latest", ClaudeParams::default(), env).unwrap();
        assert_eq!(client.model(), "grok-2-latest");
        assert_eq!(client.display_name(), "xAI");
    }

    #[test]
    fn test_resolve_deepseek() {
        let env = env_from(&[("DEEPSEEK_API_KEY", "ds-test")]);
        let client = resolve_with_env("deepseek-reasoner", ClaudeParams::default(), env).unwrap();
        assert_eq!(client.display_name(), "DeepSeek");
    }

    #[test]
    fn test_resolve_azure() {
        let env = env_from(&[
            ("AZURE_OPENAI_API_KEY", "azure-test"),
            (
                "AZURE_OPENAI_URL",
                "https://example.openai.azure.com/openai/deployments/o3-mini/chat/completions?api-version=2024-12-01-preview",
            ),
        ]);
        let client = resolve_with_env("azure-o3-mini", ClaudeParams::default(), env).unwrap();
        assert_eq!(client.model(), "azure-o3-mini");
        assert_eq!(client.display_name(), "Azure OpenAI");
    }

    #[test]
    fn test_resolve_aws_claude() {
        let env = env_from(&[
            ("AWS_ACCESS_KEY_ID", "AKIATEST"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_REGION", "eu-west-1"),
        ]);
        let client =
            resolve_with_env("anthropic.claude-3-7-sonnet-20250219-v1:0", ClaudeParams::default(), env).unwrap();
        assert_eq!(client.display_name(), "AWS Claude");
    }

    #[test]
    fn test_resolve_unknown_model() {
        let env = env_from(&[("OPENAI_API_KEY", "sk-test")]);
        let err = resolve_with_env("invalid-model", ClaudeParams::default(), env).unwrap_err();
        match err {
            GateError::Configuration(msg) => {
                assert!(msg.contains("invalid-model"));
                assert!(msg.contains("gpt-4o"));
            }
            other => panic!("Expected Configuration, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_missing_key() {
        let env = env_from(&[]);
        let err = resolve_with_env("gpt-4o", ClaudeParams::default(), env).unwrap_err();
        match err {
            GateError::Configuration(msg) => assert!(msg.contains("OPENAI_API_KEY")),
            other => panic!("Expected Configuration, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_empty_key_is_missing() {
        let env = env_from(&[("DEEPSEEK_API_KEY", "")]);
        let err = resolve_with_env("deepseek-reasoner", ClaudeParams::default(), env).unwrap_err();
        assert!(matches!(err, GateError::Configuration(_)));
    }

    #[test]
    fn test_resolve_missing_key_with_other_providers_configured() {
        // Other providers' credentials must not satisfy xAI's requirement
        let env = env_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("DEEPSEEK_API_KEY", "ds-test"),
        ]);
        let err = resolve_with_env("grok-2-latest", ClaudeParams::default(), env).unwrap_err();
        match err {
            GateError::Configuration(msg) => assert!(msg.contains("XAI_API_KEY")),
            other => panic!("Expected Configuration, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_azure_requires_url() {
        // Azure has no default endpoint
        let env = env_from(&[("AZURE_OPENAI_API_KEY", "azure-test")]);
        let err = resolve_with_env("azure-o3-mini", ClaudeParams::default(), env).unwrap_err();
        match err {
            GateError::Configuration(msg) => assert!(msg.contains("AZURE_OPENAI_URL")),
            other => panic!("Expected Configuration, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_aws_partial_credentials() {
        let env = env_from(&[
            ("AWS_ACCESS_KEY_ID", "AKIATEST"),
            ("AWS_REGION", "us-east-1"),
        ]);
        let err =
            resolve_with_env("anthropic.claude-3-7-sonnet-20250219-v1:0", ClaudeParams::default(), env).unwrap_err();
        match err {
            GateError::Configuration(msg) => assert!(msg.contains("AWS_SECRET_ACCESS_KEY")),
            other => panic!("Expected Configuration, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolved_client_round_trip() {
        use wiremock::matchers::{header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "resolved and answered"}}]
            })))
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let env = env_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", uri.as_str()),
        ]);
        let client = resolve_with_env("gpt-4o", ClaudeParams::default(), env).unwrap();
        let completion = client.respond("ping").await.unwrap();

        assert_eq!(completion.text, "resolved and answered");
        assert!(completion.elapsed_secs() >= 0.0);
    }

    #[tokio::test]
    async fn test_resolve_with_params_reaches_bedrock() {
        use wiremock::matchers::{method, path_regex};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex(r"^/model/.+/invoke$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [{"type": "text", "text": "ok"}]
            })))
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let env = env_from(&[
            ("AWS_ACCESS_KEY_ID", "AKIATEST"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_REGION", "us-east-1"),
            ("AWS_ENDPOINT_URL", uri.as_str()),
        ]);
        let params = ClaudeParams {
            max_tokens: 512,
            ..ClaudeParams::default()
        };
        let client = resolve_with_env(
            "anthropic.claude-3-7-sonnet-20250219-v1:0",
            params,
            env,
        )
        .unwrap();
        client.respond("hi").await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["max_tokens"], 512);
    }

    // ── base_url ──

    #[test]
    fn test_base_url_default() {
        let spec = registry::find_by_name("openai").unwrap();
        let env = env_from(&[]);
        assert_eq!(base_url(spec, &env), "https://api.openai.com/v1");
    }

    #[test]
    fn test_base_url_override() {
        let spec = registry::find_by_name("deepseek").unwrap();
        let env = env_from(&[("DEEPSEEK_BASE_URL", "https://proxy.internal/v1")]);
        assert_eq!(base_url(spec, &env), "https://proxy.internal/v1");
    }

    #[test]
    fn test_base_url_empty_override_falls_back() {
        let spec = registry::find_by_name("xai").unwrap();
        let env = env_from(&[("XAI_BASE_URL", "")]);
        assert_eq!(base_url(spec, &env), "https://api.x.ai/v1");
    }
}
