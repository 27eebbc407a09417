//! Capabilities the form engine depends on but does not implement.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app backs these with `gloo-net`, `localStorage`,
//! `gloo-timers` and the router; tests back them with in-memory fakes. The
//! engine never reaches for a global.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use serde_json::Value;

use crate::controller::FormController;
use crate::error::{StorageError, TransportError};

/// Issues the single network call of a submission.
pub trait Transport {
    /// POST `payload` as JSON to `endpoint` and return the decoded response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network failure, non-success status,
    /// or an undecodable response body.
    fn post(&self, endpoint: &str, payload: &Value) -> impl Future<Output = Result<Value, TransportError>>;
}

/// Key-value storage for the auth token.
pub trait TokenStore {
    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend is unavailable or rejects
    /// the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn get(&self, key: &str) -> Option<String>;
}

/// Client-side page transition.
pub trait Navigator {
    fn navigate(&self, route: &str);
}

/// Runs a task once after `delay`. Cancellation is layered on top by
/// [`crate::timer::TimerScope`].
pub trait Scheduler {
    fn spawn_after(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Owner of the controller state. Returns `None` once the host has been
/// torn down so late callbacks become no-ops.
pub trait FormHost {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormController) -> R) -> Option<R>;
}

impl FormHost for Rc<RefCell<FormController>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormController) -> R) -> Option<R> {
        match self.try_borrow_mut() {
            Ok(mut form) => Some(f(&mut form)),
            Err(_) => None,
        }
    }
}

/// Process-local [`TokenStore`] for tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}
