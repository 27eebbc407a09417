//! Banner text derived from submission outcomes.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::num::FpCategory;

use serde_json::Value;

use crate::error::TransportError;
use crate::schema::{FALLBACK_ERROR_MESSAGE, SuccessMessage};

/// Render a JSON payload as banner text: strings verbatim, anything else as
/// compact JSON. Falsy payloads (`null`, `false`, `0`, `""`) render nothing.
#[must_use]
pub fn display_payload(payload: &Value) -> Option<String> {
    let text = match payload {
        Value::Null | Value::Bool(false) => return None,
        Value::Number(n) if n.as_f64().is_some_and(|v| v.classify() == FpCategory::Zero) => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Banner message for a successful response.
#[must_use]
pub fn success_message(rule: SuccessMessage, payload: &Value) -> Option<String> {
    match rule {
        SuccessMessage::Field(name) => payload.get(name).and_then(display_payload),
        SuccessMessage::Payload => display_payload(payload),
    }
}

/// Banner message for a failed submission. Falls back to
/// [`FALLBACK_ERROR_MESSAGE`] when the error carries no usable body.
#[must_use]
pub fn failure_message(error: &TransportError) -> String {
    error
        .body()
        .and_then(display_payload)
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned())
}
