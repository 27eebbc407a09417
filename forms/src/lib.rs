//! Configuration-driven auth form engine.
//!
//! This crate owns everything about the sign-in and sign-up forms that does
//! not depend on a UI framework: field schemas and their validation rules,
//! the per-form state machine, banner message derivation, scoped timers, and
//! the async submit workflow. Browser specifics (HTTP, `localStorage`,
//! routing, timers) arrive through the traits in [`ports`].
//!
//! ```text
//! schema ──> controller <── workflow ──> ports (Transport, TokenStore, Navigator, Scheduler)
//!               │                  └──> timer::TimerScope
//!               └──> rules ──> email
//! ```

pub mod controller;
pub mod email;
pub mod error;
pub mod fields;
pub mod message;
pub mod ports;
pub mod rules;
pub mod schema;
pub mod timer;
pub mod workflow;

#[cfg(test)]
#[path = "fakes_test.rs"]
mod fakes;

pub use controller::{FeedbackDelays, FormController, Phase, SubmitRejected};
pub use error::{StorageError, TransportError};
pub use fields::{FieldMap, FormData, FormErrors};
pub use ports::{FormHost, MemoryTokenStore, Navigator, Scheduler, TokenStore, Transport};
pub use schema::{FormSchema, SIGN_IN, SIGN_UP, TOKEN_KEY};
pub use timer::{TimerHandle, TimerScope};
pub use workflow::{FormWorkflow, SubmitOutcome};
