//! Provider configuration shared by the binaries

use std::time::Duration;

use clap::{Args, ValueEnum};

/// Supported text generation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Provider {
    /// Google Gemini `generateContent`
    #[default]
    Gemini,
    /// OpenAI-compatible `chat/completions`
    #[value(name = "openai")]
    OpenAi,
}

impl Provider {
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-2.5-flash",
            Provider::OpenAi => "gpt-4o-mini",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Provider::OpenAi => "https://api.openai.com/v1",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Provider::Gemini => "gemini",
            Provider::OpenAi => "openai",
        };
        write!(f, "{}", s)
    }
}

/// Settings needed to build a provider client
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub provider: Provider,
    pub api_key: Option<String>,
    /// Falls back to the provider's default model
    pub model: Option<String>,
    /// Falls back to the provider's public endpoint
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(provider: Provider, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key,
            ..Default::default()
        }
    }
}

/// Text generation flags, flattened into each binary's config
#[derive(Debug, Clone, Args)]
pub struct ProviderArgs {
    /// Provider API key; AI features are disabled when unset
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Text generation provider
    #[arg(long, env = "INSIGHTS_PROVIDER", value_enum, default_value_t = Provider::Gemini)]
    pub provider: Provider,

    /// Model name (defaults to the provider's recommended model)
    #[arg(long, env = "INSIGHTS_MODEL")]
    pub model: Option<String>,

    /// API base URL (defaults to the provider's public endpoint)
    #[arg(long, env = "INSIGHTS_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "INSIGHTS_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}

impl ProviderArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            provider: self.provider,
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}
