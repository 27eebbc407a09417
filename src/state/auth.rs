//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as context by `App` and refreshed from the token store when the
//! home route mounts, after a sign-in has written the token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use forms::{TOKEN_KEY, TokenStore};

/// Whether the browser holds an auth token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    /// Read the token written by a successful sign-in.
    pub fn from_store<S: TokenStore + ?Sized>(store: &S) -> Self {
        Self { token: store.get(TOKEN_KEY).filter(|t| !t.is_empty()) }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}
