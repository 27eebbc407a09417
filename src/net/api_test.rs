use super::*;
use serde_json::json;

#[test]
fn endpoint_url_joins_with_single_slash() {
    assert_eq!(endpoint_url("http://localhost:5000", "/signin"), "http://localhost:5000/signin");
    assert_eq!(endpoint_url("http://localhost:5000/", "/signup"), "http://localhost:5000/signup");
    assert_eq!(endpoint_url("/api", "signin"), "/api/signin");
}

#[test]
fn parse_body_json_object() {
    assert_eq!(parse_body(r#"{"message":"ok","token":"T1"}"#), Some(json!({ "message": "ok", "token": "T1" })));
}

#[test]
fn parse_body_json_string() {
    assert_eq!(parse_body(r#""Invalid credentials""#), Some(json!("Invalid credentials")));
}

#[test]
fn parse_body_plain_text_kept_verbatim() {
    assert_eq!(parse_body("Invalid credentials"), Some(json!("Invalid credentials")));
}

#[test]
fn parse_body_blank_is_none() {
    assert_eq!(parse_body(""), None);
    assert_eq!(parse_body("  \n"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn post_fails_outside_browser() {
    let transport = HttpTransport::new("http://localhost:5000");
    let result = futures::executor::block_on(transport.post("/signin", &json!({})));
    assert_eq!(result, Err(TransportError::Network("not available outside the browser".to_owned())));
}
