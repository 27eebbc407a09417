use super::*;
use serde_json::json;

#[test]
fn display_payload_string_verbatim() {
    assert_eq!(display_payload(&json!("User created")), Some("User created".to_owned()));
}

#[test]
fn display_payload_empty_and_null_are_none() {
    assert_eq!(display_payload(&json!("")), None);
    assert_eq!(display_payload(&Value::Null), None);
}

#[test]
fn display_payload_false_and_zero_are_none() {
    assert_eq!(display_payload(&json!(false)), None);
    assert_eq!(display_payload(&json!(0)), None);
    assert_eq!(display_payload(&json!(0.0)), None);
}

#[test]
fn display_payload_truthy_scalars_render() {
    assert_eq!(display_payload(&json!(true)), Some("true".to_owned()));
    assert_eq!(display_payload(&json!(42)), Some("42".to_owned()));
}

#[test]
fn display_payload_object_as_compact_json() {
    assert_eq!(display_payload(&json!({ "ok": true })), Some(r#"{"ok":true}"#.to_owned()));
}

#[test]
fn success_message_reads_named_field() {
    let payload = json!({ "message": "ok", "token": "T1" });
    assert_eq!(success_message(SuccessMessage::Field("message"), &payload), Some("ok".to_owned()));
}

#[test]
fn success_message_missing_field_is_none() {
    let payload = json!({ "token": "T1" });
    assert_eq!(success_message(SuccessMessage::Field("message"), &payload), None);
}

#[test]
fn success_message_whole_payload() {
    assert_eq!(
        success_message(SuccessMessage::Payload, &json!("Registered successfully")),
        Some("Registered successfully".to_owned())
    );
}

#[test]
fn failure_message_uses_body() {
    let err = TransportError::Status { status: 401, body: Some(json!("Invalid credentials")) };
    assert_eq!(failure_message(&err), "Invalid credentials");
}

#[test]
fn failure_message_falls_back_without_body() {
    let err = TransportError::Status { status: 500, body: None };
    assert_eq!(failure_message(&err), FALLBACK_ERROR_MESSAGE);
    let err = TransportError::Status { status: 500, body: Some(json!("")) };
    assert_eq!(failure_message(&err), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn failure_message_falls_back_for_false_body() {
    let err = TransportError::Status { status: 400, body: Some(json!(false)) };
    assert_eq!(failure_message(&err), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn failure_message_falls_back_for_zero_body() {
    let err = TransportError::Status { status: 400, body: Some(json!(0)) };
    assert_eq!(failure_message(&err), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn success_payload_false_shows_no_banner() {
    assert_eq!(success_message(SuccessMessage::Payload, &json!(false)), None);
    assert_eq!(success_message(SuccessMessage::Payload, &json!(0)), None);
}

#[test]
fn failure_message_falls_back_for_network_errors() {
    let err = TransportError::Network("offline".to_owned());
    assert_eq!(failure_message(&err), "An unexpected error occurred.");
}
