//! Form controller: field state, validation state and submission phase.
//!
//! ARCHITECTURE
//! ============
//! The controller is a synchronous state machine with no I/O. The async
//! half of a submission (network call, timers, navigation) lives in
//! [`crate::workflow`], which drives the controller through these steps:
//!
//! ```text
//! Editing --begin_submit--> Submitting --complete_submit(Ok)--> Succeeded --expire--> Editing + navigate
//!    ^   \--(invalid)--> Editing         \--complete_submit(Err)-> ShowingError --expire--> Editing
//! ```
//!
//! A submit trigger while `Submitting` (or while a success redirect is
//! pending) is rejected, so at most one request is in flight per form.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use serde_json::Value;

use crate::error::TransportError;
use crate::fields::{FieldMap, FormData, FormErrors};
use crate::message::{failure_message, success_message};
use crate::ports::TokenStore;
use crate::rules;
use crate::schema::{FormSchema, TOKEN_KEY};
use crate::timer::TimerHandle;

pub const SUCCESS_FEEDBACK_MS: u64 = 1000;
pub const FAILURE_FEEDBACK_MS: u64 = 1500;

/// Submission lifecycle of one form instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    /// A request is in flight; further submits are rejected.
    Submitting,
    /// Request succeeded; navigation to `destination` follows the banner.
    Succeeded { destination: &'static str },
    /// Request failed; the banner is showing and input is preserved.
    ShowingError,
}

/// How long the outcome banner stays up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackDelays {
    pub success: Duration,
    pub failure: Duration,
}

impl Default for FeedbackDelays {
    fn default() -> Self {
        Self {
            success: Duration::from_millis(SUCCESS_FEEDBACK_MS),
            failure: Duration::from_millis(FAILURE_FEEDBACK_MS),
        }
    }
}

/// Request produced by an accepted submit.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub endpoint: &'static str,
    pub payload: Value,
}

/// Why a submit trigger did not produce a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A previous submission is still running or redirecting.
    InFlight,
    /// Validation failed; field errors are populated.
    Invalid,
}

/// Delayed action to schedule after a submission resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowUp {
    pub delay: Duration,
    pub navigate_to: Option<&'static str>,
}

/// State of one mounted auth form.
#[derive(Clone, Debug)]
pub struct FormController {
    schema: &'static FormSchema,
    delays: FeedbackDelays,
    data: FormData,
    errors: FormErrors,
    message: Option<String>,
    phase: Phase,
    pending_feedback: Option<TimerHandle>,
}

impl FormController {
    #[must_use]
    pub fn new(schema: &'static FormSchema) -> Self {
        Self::with_delays(schema, FeedbackDelays::default())
    }

    #[must_use]
    pub fn with_delays(schema: &'static FormSchema, delays: FeedbackDelays) -> Self {
        Self {
            schema,
            delays,
            data: FieldMap::empty(schema),
            errors: FieldMap::empty(schema),
            message: None,
            phase: Phase::Editing,
            pending_feedback: None,
        }
    }

    #[must_use]
    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    #[must_use]
    pub fn data(&self) -> &FormData {
        &self.data
    }

    #[must_use]
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Current banner text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn value(&self, field: &str) -> &str {
        self.data.get(field).unwrap_or_default()
    }

    #[must_use]
    pub fn error(&self, field: &str) -> &str {
        self.errors.get(field).unwrap_or_default()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Store a new value for `field` and clear that field's error.
    pub fn change(&mut self, field: &str, value: impl Into<String>) {
        if !self.data.set(field, value) {
            log::debug!("form {}: ignoring change to unknown field {field}", self.schema.endpoint);
            return;
        }
        self.errors.set(field, "");
    }

    /// Recompute every field error from the current values.
    pub fn validate(&mut self) -> bool {
        self.errors = rules::validate(self.schema, &self.data);
        rules::is_valid(&self.errors)
    }

    /// Validate and, if accepted, enter `Submitting` and return the request.
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::InFlight`] while a submission is pending (state is
    /// untouched); [`SubmitRejected::Invalid`] when validation fails (only
    /// the error map changes).
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        if matches!(self.phase, Phase::Submitting | Phase::Succeeded { .. }) {
            return Err(SubmitRejected::InFlight);
        }
        if !self.validate() {
            let failing: Vec<_> = self.errors.non_empty().map(|(field, _)| field).collect();
            log::debug!("form {}: validation rejected fields {failing:?}", self.schema.endpoint);
            return Err(SubmitRejected::Invalid);
        }
        self.phase = Phase::Submitting;
        Ok(Submission { endpoint: self.schema.endpoint, payload: self.data.to_payload() })
    }

    /// Apply the transport outcome and return the delayed action to schedule.
    pub fn complete_submit<S>(&mut self, outcome: Result<Value, TransportError>, store: &S) -> FollowUp
    where
        S: TokenStore + ?Sized,
    {
        match outcome {
            Ok(payload) => {
                log::info!("form {}: submission succeeded", self.schema.endpoint);
                self.message = success_message(self.schema.success_message, &payload);
                if let Some(token_field) = self.schema.token_field {
                    persist_token(&payload, token_field, store);
                }
                self.data.clear();
                let destination = self.schema.success_route;
                self.phase = Phase::Succeeded { destination };
                FollowUp { delay: self.delays.success, navigate_to: Some(destination) }
            }
            Err(err) => {
                log::warn!("form {}: submission failed: {err}", self.schema.endpoint);
                self.message = Some(failure_message(&err));
                self.phase = Phase::ShowingError;
                FollowUp { delay: self.delays.failure, navigate_to: None }
            }
        }
    }

    /// Track the banner timer, cancelling the one it replaces so an older
    /// timer never clears a newer message.
    pub fn replace_feedback_timer(&mut self, handle: TimerHandle) {
        if let Some(previous) = self.pending_feedback.replace(handle) {
            previous.cancel();
        }
    }

    /// Banner timer fired: clear the message and leave the outcome phase.
    /// Returns the route to navigate to after a success.
    pub fn expire_feedback(&mut self) -> Option<&'static str> {
        self.message = None;
        self.pending_feedback = None;
        match self.phase {
            Phase::Succeeded { destination } => {
                self.phase = Phase::Editing;
                Some(destination)
            }
            Phase::ShowingError => {
                self.phase = Phase::Editing;
                None
            }
            Phase::Editing | Phase::Submitting => None,
        }
    }
}

fn persist_token<S>(payload: &Value, token_field: &str, store: &S)
where
    S: TokenStore + ?Sized,
{
    let Some(token) = payload.get(token_field).and_then(Value::as_str) else {
        log::warn!("success response carried no `{token_field}` string; nothing stored");
        return;
    };
    if let Err(err) = store.set(TOKEN_KEY, token) {
        log::warn!("failed to persist auth token: {err}");
    }
}
