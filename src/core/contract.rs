//! Server-side "smart normalization" contract, modelled for the client.
//!
//! The inference endpoint accepts message objects carrying their text under any
//! of [`TEXT_KEYS`] and synthesizes `author` and `time` when they are missing.
//! Reconciling field names is the server's job; the client only inspects
//! payloads so it can warn about messages the server will find no text in.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::core::normalize::Payload;

/// Message fields the server reads the message text from.
pub const TEXT_KEYS: [&str; 4] = ["text", "content", "body", "message"];

/// Text of a loosely-shaped message: the first non-empty string under one of
/// [`TEXT_KEYS`]. Array-of-blocks content (`[{"type": "text", "text": ...}]`) is
/// accepted for `content`.
pub fn message_text(msg: &Value) -> Option<&str> {
    TEXT_KEYS.iter().find_map(|key| {
        let field = msg.get(key)?;
        if let Some(s) = field.as_str() {
            return (!s.is_empty()).then_some(s);
        }
        field
            .as_array()?
            .iter()
            .filter_map(|block| block.get("text").and_then(Value::as_str))
            .find(|s| !s.is_empty())
    })
}

/// Indexes of messages in `payload` that carry no recognizable text.
/// A passthrough payload is opaque and yields none.
pub fn untextual_messages(payload: &Payload) -> Vec<usize> {
    payload
        .messages()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .filter(|(_, msg)| message_text(msg).is_none())
        .map(|(i, _)| i)
        .collect()
}

/// One stored analysis. `result` is opaque to the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultEntry {
    pub result: Value,
    /// Unix seconds.
    pub ts: i64,
}

impl ResultEntry {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.ts, 0)
    }
}

/// `201 Created` body of `POST /api/run_inference`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub entry: ResultEntry,
}

/// Body of `GET /api/results`, scoped to the caller's key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultsResponse {
    pub results: Vec<ResultEntry>,
}

/// Error body (401 missing token, 403 unknown key, 400 bad input).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Any documented response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ServerResponse {
    Submitted(SubmitResponse),
    Results(ResultsResponse),
    Error(ErrorResponse),
}

impl ServerResponse {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
