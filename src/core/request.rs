//! HTTP requests for the inference API, built as plain values.
//!
//! Nothing here performs I/O: the request is rendered (or turned into a `curl`
//! command) and sending it is left to the caller.

use crate::core::config::{Config, ConfigError};
use crate::core::contract;
use crate::core::normalize::{self, Payload};

pub const RUN_INFERENCE_PATH: &str = "/api/run_inference";
pub const RESULTS_PATH: &str = "/api/results";

/// Errors when building a request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Input is empty; nothing to send")]
    EmptyInput,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

fn bearer(key: &str) -> (String, String) {
    ("Authorization".to_string(), format!("Bearer {}", key))
}

/// `POST /api/run_inference` for the text box `input`. The body is the
/// normalized payload, JSON-encoded with no envelope.
pub fn inference_request(config: &Config, input: &str) -> Result<HttpRequest, RequestError> {
    let payload = normalize::normalize_input(input).ok_or(RequestError::EmptyInput)?;
    let key = config.api_key()?;
    warn_untextual(&payload);
    Ok(HttpRequest {
        method: Method::Post,
        url: format!("{}{}", config.base_url, RUN_INFERENCE_PATH),
        headers: vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            bearer(key),
        ],
        body: Some(payload.to_body()?),
    })
}

/// `GET /api/results` for the configured key.
pub fn results_request(config: &Config) -> Result<HttpRequest, RequestError> {
    let key = config.api_key()?;
    Ok(HttpRequest {
        method: Method::Get,
        url: format!("{}{}", config.base_url, RESULTS_PATH),
        headers: vec![bearer(key)],
        body: None,
    })
}

fn warn_untextual(payload: &Payload) {
    let missing = contract::untextual_messages(payload);
    if !missing.is_empty() {
        log::warn!(
            "Messages {:?} have none of the fields {:?}; the server will find no text in them",
            missing,
            contract::TEXT_KEYS
        );
    }
}

/// Quote `s` for a POSIX shell.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

impl HttpRequest {
    /// Equivalent `curl` command line.
    pub fn to_curl(&self) -> String {
        let mut parts = vec![format!(
            "curl -X {} {}",
            self.method.as_str(),
            shell_quote(&self.url)
        )];
        for (name, value) in &self.headers {
            parts.push(format!("-H {}", shell_quote(&format!("{}: {}", name, value))));
        }
        if let Some(body) = &self.body {
            parts.push(format!("-d {}", shell_quote(body)));
        }
        parts.join(" \\\n  ")
    }
}

impl std::fmt::Display for HttpRequest {
    /// Raw HTTP/1.1-style rendering: request line, headers, blank line, body.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {}", self.method.as_str(), self.url)?;
        for (name, value) in &self.headers {
            writeln!(f, "{}: {}", name, value)?;
        }
        if let Some(body) = &self.body {
            writeln!(f)?;
            write!(f, "{}", body)?;
        }
        Ok(())
    }
}
