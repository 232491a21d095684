use reqwest::Url;
use std::env;

/// Bundled config for web and mobile builds, where there is no `.env` on disk
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const ENDPOINT_VAR: &str = "RAG_CHAT_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/chat";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Endpoint and display strings for the chat widget.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatConfig {
    pub endpoint: String,
    pub title: String,
    pub open_label: String,
    pub close_label: String,
    pub placeholder: String,
    pub thinking_label: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            title: "RAG Chatbot".to_string(),
            open_label: "Chat with RAG Bot".to_string(),
            close_label: "Close Chat".to_string(),
            placeholder: "Ask something about the PDF...".to_string(),
            thinking_label: "Thinking...".to_string(),
        }
    }
}

impl ChatConfig {
    /// Resolve the endpoint from the environment (after `.env`), then the
    /// bundled config, then the built-in default.
    pub fn load() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_sources(env::var(ENDPOINT_VAR).ok(), BUNDLED_CONFIG)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default chat config");
            Self::default()
        })
    }

    pub fn from_sources(env_endpoint: Option<String>, bundled: &str) -> Result<Self, ConfigError> {
        let endpoint = env_endpoint
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .or_else(|| bundled_value(bundled, ENDPOINT_VAR).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        validate_endpoint(&endpoint)?;

        Ok(Self {
            endpoint,
            ..Self::default()
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

fn bundled_value<'a>(contents: &'a str, wanted: &str) -> Option<&'a str> {
    contents
        .lines()
        .map(str::trim)
        // Skip comments and empty lines
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == wanted)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };
    let url = Url::parse(endpoint).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}
