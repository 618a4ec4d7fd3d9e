//! Turn free-form text box input into the inference request body.
//!
//! The server tolerates loosely-shaped messages (see [`crate::core::contract`]), so
//! this only has to produce something resembling a message list. Field names are
//! never reconciled here.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Message synthesized when the input is not JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMessage {
    pub role: String,
    pub content: String,
}

impl NormalizedMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

impl From<NormalizedMessage> for Value {
    fn from(msg: NormalizedMessage) -> Self {
        json!({ "role": msg.role, "content": msg.content })
    }
}

/// Request body. Serializes as the bare JSON value, with no envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// A message list; elements are forwarded in whatever shape they were given.
    Messages(Vec<Value>),
    /// Any other JSON value, forwarded unchanged (not wrapped in a list).
    Passthrough(Value),
}

impl Payload {
    fn single_user(raw: &str) -> Self {
        Payload::Messages(vec![NormalizedMessage::user(raw).into()])
    }

    /// Messages in the payload, or `None` for a passthrough value.
    pub fn messages(&self) -> Option<&[Value]> {
        match self {
            Payload::Messages(messages) => Some(messages),
            Payload::Passthrough(_) => None,
        }
    }

    /// JSON-encoded request body.
    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(messages) => Payload::Messages(messages),
            other => Payload::Passthrough(other),
        }
    }
}

/// JavaScript truthiness: everything but `null`, `false`, `0` and `""`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parse JSON with no nesting limit. Objects keep their key order.
fn parse_json(raw: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(raw);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Normalize raw input into a request payload. Never fails.
///
/// - not JSON (or `null`): one `{"role": "user", "content": raw}` message
/// - array: used as the message list as-is
/// - object with a truthy `messages` field: that field's value
/// - anything else: the parsed value itself
pub fn normalize(raw: &str) -> Payload {
    let parsed = match parse_json(raw) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("Input is not JSON ({}); sending it as a single message", e);
            return Payload::single_user(raw);
        }
    };
    if let Some(messages) = parsed.get("messages").filter(|m| is_truthy(m)) {
        return Payload::from(messages.clone());
    }
    match parsed {
        Value::Null => Payload::single_user(raw),
        Value::Array(messages) => Payload::Messages(messages),
        other => Payload::Passthrough(other),
    }
}

/// Normalize text box input. Surrounding whitespace is trimmed; blank input
/// yields `None` so no request is made.
pub fn normalize_input(input: &str) -> Option<Payload> {
    let raw = input.trim();
    if raw.is_empty() {
        return None;
    }
    Some(normalize(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(payload: &Payload) -> Value {
        serde_json::to_value(payload).unwrap()
    }

    #[test]
    fn normalize_plain_text_wraps_as_user_message() {
        let payload = normalize("hello world");
        assert_eq!(
            body(&payload),
            json!([{ "role": "user", "content": "hello world" }])
        );
    }

    #[test]
    fn normalize_bare_array_passes_through() {
        let payload = normalize(r#"[{"text":"hi"}]"#);
        assert_eq!(payload, Payload::Messages(vec![json!({"text": "hi"})]));
    }

    #[test]
    fn normalize_messages_field_is_unwrapped() {
        let payload = normalize(r#"{"messages":[{"text":"hi"}]}"#);
        assert_eq!(body(&payload), json!([{ "text": "hi" }]));
    }

    #[test]
    fn normalize_object_without_messages_is_not_wrapped() {
        let payload = normalize(r#"{"foo":"bar"}"#);
        assert_eq!(payload, Payload::Passthrough(json!({"foo": "bar"})));
        assert_eq!(payload.to_body().unwrap(), r#"{"foo":"bar"}"#);
    }

    #[test]
    fn normalize_falsy_messages_keeps_whole_object() {
        for raw in [
            r#"{"messages":null,"x":1}"#,
            r#"{"messages":false,"x":1}"#,
            r#"{"messages":0,"x":1}"#,
            r#"{"messages":"","x":1}"#,
        ] {
            let payload = normalize(raw);
            assert!(
                matches!(&payload, Payload::Passthrough(Value::Object(m)) if m.contains_key("x")),
                "{raw} -> {payload:?}"
            );
        }
    }

    #[test]
    fn normalize_empty_messages_array_is_truthy() {
        assert_eq!(normalize(r#"{"messages":[]}"#), Payload::Messages(vec![]));
    }

    #[test]
    fn normalize_non_array_messages_passes_through() {
        assert_eq!(
            normalize(r#"{"messages":{"text":"hi"}}"#),
            Payload::Passthrough(json!({"text": "hi"}))
        );
        assert_eq!(
            normalize(r#"{"messages":"hi"}"#),
            Payload::Passthrough(json!("hi"))
        );
    }

    #[test]
    fn normalize_null_falls_back_to_single_message() {
        assert_eq!(
            body(&normalize("null")),
            json!([{ "role": "user", "content": "null" }])
        );
    }

    #[test]
    fn normalize_primitives_pass_through() {
        assert_eq!(normalize("42"), Payload::Passthrough(json!(42)));
        assert_eq!(normalize("true"), Payload::Passthrough(json!(true)));
        assert_eq!(normalize(r#""hi""#), Payload::Passthrough(json!("hi")));
    }

    #[test]
    fn normalize_broken_json_is_text() {
        let raw = r#"{"messages": [{"text": "hi"}"#;
        assert_eq!(
            normalize(raw),
            Payload::Messages(vec![json!({"role": "user", "content": raw})])
        );
    }

    #[test]
    fn passthrough_body_keeps_key_order() {
        let raw = r#"[{"text":"hi","author":"u1","time":"10:00"}]"#;
        assert_eq!(normalize(raw).to_body().unwrap(), raw);

        let raw = r#"{"messages":[{"text":"hi","author":"u1"}],"channel":"c"}"#;
        assert_eq!(
            normalize(raw).to_body().unwrap(),
            r#"[{"text":"hi","author":"u1"}]"#
        );

        let raw = r#"{"zeta":1,"alpha":{"y":2,"b":3}}"#;
        assert_eq!(normalize(raw).to_body().unwrap(), raw);
    }

    #[test]
    fn deeply_nested_json_passes_through() {
        let raw = format!("{}{}", "[".repeat(200), "]".repeat(200));
        let payload = normalize(&raw);
        assert_eq!(payload.messages().map(<[Value]>::len), Some(1));
        assert_eq!(payload.to_body().unwrap(), raw);
    }

    #[test]
    fn normalize_input_rejects_blank() {
        assert_eq!(normalize_input(""), None);
        assert_eq!(normalize_input("  \n\t "), None);
    }

    #[test]
    fn normalize_input_trims_before_wrapping() {
        let payload = normalize_input("  hello \n").unwrap();
        assert_eq!(body(&payload), json!([{ "role": "user", "content": "hello" }]));
    }

    #[test]
    fn messages_accessor() {
        assert_eq!(normalize("[1,2]").messages().map(<[Value]>::len), Some(2));
        assert!(normalize(r#"{"a":1}"#).messages().is_none());
    }
}
