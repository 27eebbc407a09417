//! Networking for the auth forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the form engine's `Transport` port over HTTP. Request and
//! response payloads stay `serde_json::Value` since the engine builds them
//! from the form schema.

pub mod api;
