use std::env;

/// Default API server (the development backend).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingApiKey,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingApiKey => {
                write!(f, "APEX_API_KEY is not set (or pass --key)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// API key for the Authorization header.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }

    /// Replace the key when `key` is given (CLI `--key`).
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        if let Some(k) = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            self.api_key = Some(k);
        }
        self
    }
}

/// Load configuration from the environment (after dotenv).
pub fn load() -> Config {
    load_from(|name| env::var(name).ok())
}

fn load_from(var: impl Fn(&str) -> Option<String>) -> Config {
    let base_url = var("APEX_BASE_URL")
        .map(|u| u.trim().trim_end_matches('/').to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let api_key = var("APEX_API_KEY")
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    Config { base_url, api_key }
}
