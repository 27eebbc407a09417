//! Async submit workflow binding the controller to its ports.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `FormWorkflow` is built per mounted form. Event handlers call
//! [`FormWorkflow::change`] on input and spawn [`FormWorkflow::submit`] on
//! submit; the view's cleanup hook disposes [`FormWorkflow::timers`].
//!
//! Controller state is only ever touched inside short `with_form` closures,
//! never across the network await, so input stays live while a request is
//! pending.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use crate::controller::{FollowUp, FormController, SubmitRejected};
use crate::ports::{FormHost, Navigator, Scheduler, TokenStore, Transport};
use crate::timer::TimerScope;

/// Result of one submit trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No request was sent.
    Rejected(SubmitRejected),
    Succeeded,
    Failed,
    /// The host went away before the outcome could be applied.
    Detached,
}

/// Form controller host plus the ports a submission needs.
#[derive(Clone)]
pub struct FormWorkflow<H, T, S, N, C> {
    host: H,
    transport: T,
    store: S,
    navigator: N,
    scheduler: C,
    timers: TimerScope,
}

impl<H, T, S, N, C> FormWorkflow<H, T, S, N, C>
where
    H: FormHost + Clone + 'static,
    T: Transport,
    S: TokenStore,
    N: Navigator + Clone + 'static,
    C: Scheduler,
{
    pub fn new(host: H, transport: T, store: S, navigator: N, scheduler: C) -> Self {
        Self { host, transport, store, navigator, scheduler, timers: TimerScope::new() }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Scope owning every banner timer this workflow schedules. Dispose it
    /// when the view unmounts.
    pub fn timers(&self) -> &TimerScope {
        &self.timers
    }

    /// Field input event.
    pub fn change(&self, field: &str, value: String) {
        self.host.with_form(|form| form.change(field, value));
    }

    /// Submit event: validate, send, apply the outcome, schedule the banner
    /// timeout (and redirect on success).
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(begun) = self.host.with_form(FormController::begin_submit) else {
            return SubmitOutcome::Detached;
        };
        let submission = match begun {
            Ok(submission) => submission,
            Err(rejected) => return SubmitOutcome::Rejected(rejected),
        };

        let outcome = self.transport.post(submission.endpoint, &submission.payload).await;
        let succeeded = outcome.is_ok();

        let Some(follow_up) = self.host.with_form(|form| form.complete_submit(outcome, &self.store)) else {
            log::debug!("form {} torn down before response; outcome dropped", submission.endpoint);
            return SubmitOutcome::Detached;
        };
        self.schedule_follow_up(follow_up);

        if succeeded { SubmitOutcome::Succeeded } else { SubmitOutcome::Failed }
    }

    fn schedule_follow_up(&self, follow_up: FollowUp) {
        let host = self.host.clone();
        let navigator = self.navigator.clone();
        let handle = self.timers.schedule(&self.scheduler, follow_up.delay, move || {
            if let Some(route) = host.with_form(FormController::expire_feedback).flatten() {
                navigator.navigate(route);
            }
        });
        self.host.with_form(|form| form.replace_feedback_timer(handle));
    }
}
