//! HTTP transport for the auth endpoints.
//!
//! Browser builds (`csr`): real `POST` calls via `gloo-net`.
//! Native builds (tests, tooling): every call fails with a network error,
//! since forms are only submitted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`TransportError::Status`] carrying the response
//! body: parsed JSON when it parses, the raw text otherwise, `None` when
//! empty. The form engine turns that body into the banner message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use forms::{Transport, TransportError};
use serde_json::Value;

/// [`Transport`] posting JSON to `{base_url}{endpoint}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl Transport for HttpTransport {
    fn post(&self, endpoint: &str, payload: &Value) -> impl Future<Output = Result<Value, TransportError>> {
        let url = endpoint_url(&self.base_url, endpoint);
        let payload = payload.clone();
        async move {
            #[cfg(feature = "csr")]
            {
                let resp = gloo_net::http::Request::post(&url)
                    .json(&payload)
                    .map_err(|e| TransportError::Network(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| TransportError::Network(e.to_string()))?;
                let status = resp.status();
                let ok = resp.ok();
                let text = resp.text().await.map_err(|e| TransportError::Decode(e.to_string()))?;
                if ok {
                    Ok(parse_body(&text).unwrap_or(Value::Null))
                } else {
                    leptos::logging::warn!("POST {url} failed: {status}");
                    Err(TransportError::Status { status, body: parse_body(&text) })
                }
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (url, payload);
                Err(TransportError::Network("not available outside the browser".to_owned()))
            }
        }
    }
}

/// Join the configured base with an endpoint path.
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint.trim_start_matches('/'))
}

/// Interpret a response body: JSON when it parses, raw text otherwise,
/// `None` when blank.
#[cfg(any(test, feature = "csr"))]
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned())))
}
