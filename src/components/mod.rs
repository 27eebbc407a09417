//! Reusable view components for the auth pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_form` binds a schema to the form engine; `form_field` and
//! `alert_card` are its presentational pieces.

pub mod alert_card;
pub mod auth_form;
pub mod form_field;
