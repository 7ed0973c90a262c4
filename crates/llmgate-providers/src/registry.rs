//! Provider registry — static specs for the 5 supported providers.
//!
//! Each `ProviderSpec` describes how to reach one provider: which model
//! names belong to it, which environment variables hold its credentials,
//! and where its API lives by default.
//!
//! Model lookup is an exact match against the known-model table. An unknown
//! name is a configuration error at the call site, never a silent fallback.

// ─────────────────────────────────────────────
// ProviderKind / ProviderSpec
// ─────────────────────────────────────────────

/// The closed set of supported providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Xai,
    DeepSeek,
    Azure,
    AwsClaude,
}

/// Static specification describing one provider.
#[derive(Clone, Debug)]
pub struct ProviderSpec {
    /// Which client implementation handles this provider.
    pub kind: ProviderKind,
    /// Internal name (e.g. `"deepseek"`).
    pub name: &'static str,
    /// Human-readable name for logs. E.g. `"DeepSeek"`.
    pub display_name: &'static str,
    /// Model identifiers served by this provider (exact match).
    pub models: &'static [&'static str],
    /// Environment variables that must be set and non-empty to use this
    /// provider. The first one is the API key for the REST providers.
    pub required_env: &'static [&'static str],
    /// Environment variable overriding the base URL, if the provider has one.
    pub env_base: Option<&'static str>,
    /// Default base URL when the override variable is absent.
    /// Azure has none — its full deployment URL must come from the env.
    pub default_api_base: Option<&'static str>,
}

// ─────────────────────────────────────────────
// The 5 providers
// ─────────────────────────────────────────────

/// Complete list of supported provider specifications.
pub static PROVIDERS: &[ProviderSpec] = &[
    ProviderSpec {
        kind: ProviderKind::OpenAi,
        name: "openai",
        display_name: "OpenAI",
        models: &["gpt-4o"],
        required_env: &["OPENAI_API_KEY"],
        env_base: Some("OPENAI_BASE_URL"),
        default_api_base: Some("https://api.openai.com/v1"),
    },
    ProviderSpec {
        kind: ProviderKind::Xai,
        name: "xai",
        display_name: "xAI",
        models: &["grok-2-latest"],
        required_env: &["XAI_API_KEY"],
        env_base: Some("XAI_BASE_URL"),
        default_api_base: Some("https://api.x.ai/v1"),
    },
    ProviderSpec {
        kind: ProviderKind::DeepSeek,
        name: "deepseek",
        display_name: "DeepSeek",
        models: &["deepseek-reasoner"],
        required_env: &["DEEPSEEK_API_KEY"],
        env_base: Some("DEEPSEEK_BASE_URL"),
        default_api_base: Some("https://api.deepseek.com/v1"),
    },
    ProviderSpec {
        kind: ProviderKind::Azure,
        name: "azure",
        display_name: "Azure OpenAI",
        models: &["azure-o3-mini"],
        // The full deployment URL is a credential-like requirement here:
        // there is no sensible default endpoint for someone else's deployment.
        required_env: &["AZURE_OPENAI_API_KEY", "AZURE_OPENAI_URL"],
        env_base: None,
        default_api_base: None,
    },
    ProviderSpec {
        kind: ProviderKind::AwsClaude,
        name: "aws-claude",
        display_name: "AWS Claude",
        models: &["anthropic.claude-3-7-sonnet-20250219-v1:0"],
        required_env: &["AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "AWS_REGION"],
        env_base: None,
        default_api_base: None,
    },
];

// ─────────────────────────────────────────────
// Lookups
// ─────────────────────────────────────────────

/// Find the provider spec serving `model` (exact match).
pub fn find_by_model(model: &str) -> Option<&'static ProviderSpec> {
    PROVIDERS
        .iter()
        .find(|spec| spec.models.contains(&model))
}

/// Find a provider spec by internal name.
pub fn find_by_name(name: &str) -> Option<&'static ProviderSpec> {
    PROVIDERS.iter().find(|spec| spec.name == name)
}

/// All model identifiers the facade knows how to route.
pub fn known_models() -> Vec<&'static str> {
    PROVIDERS
        .iter()
        .flat_map(|spec| spec.models.iter().copied())
        .collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
