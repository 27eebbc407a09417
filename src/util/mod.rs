//! Browser adapters for the form engine's ports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys`, `gloo-timers` and router glue from page
//! and component logic so forms stay testable outside a browser.

pub mod navigation;
pub mod storage;
pub mod timers;
