//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is app-wide context; `form` adapts a per-page controller signal to
//! the form engine's host trait.

pub mod auth;
pub mod form;
