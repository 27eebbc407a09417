//! Scoped, cancellable delayed tasks.
//!
//! DESIGN
//! ======
//! A [`TimerScope`] belongs to one mounted form. Every task scheduled through
//! it checks two flags right before running: its own [`TimerHandle`] and the
//! scope. Disposing the scope on teardown therefore silences every timer that
//! is still queued in the underlying [`Scheduler`], whatever that scheduler
//! is. Flags are atomics so handles can live inside `Send + Sync` UI state.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::ports::Scheduler;

/// Group of timers that can be disposed together.
#[derive(Clone, Debug, Default)]
pub struct TimerScope {
    disposed: Arc<AtomicBool>,
}

/// Cancellation handle for one scheduled task.
#[derive(Clone, Debug, Default)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` after `delay`. The task is skipped if the returned
    /// handle is cancelled or the scope disposed before it fires.
    pub fn schedule<C>(&self, scheduler: &C, delay: Duration, task: impl FnOnce() + 'static) -> TimerHandle
    where
        C: Scheduler + ?Sized,
    {
        let handle = TimerHandle::default();
        let disposed = Arc::clone(&self.disposed);
        let cancelled = Arc::clone(&handle.cancelled);
        scheduler.spawn_after(
            delay,
            Box::new(move || {
                if disposed.load(Ordering::Relaxed) || cancelled.load(Ordering::Relaxed) {
                    return;
                }
                task();
            }),
        );
        handle
    }

    /// Cancel every task scheduled through this scope, now and later.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Relaxed)
    }
}

impl TimerHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
