//! Delayed tasks on the browser event loop.

use std::time::Duration;

use forms::Scheduler;

/// [`Scheduler`] backed by `gloo-timers` sleeps on the Leptos local executor.
///
/// Cancellation is handled by `forms::TimerScope`; this type only delays.
/// Without `csr` nothing is ever scheduled.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn spawn_after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            task();
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay, task);
        }
    }
}
