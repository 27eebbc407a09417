//! Reactive host for one form controller.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use forms::{FormController, FormHost};
use leptos::prelude::*;

/// [`FormHost`] over an `RwSignal`. Updates notify the view; once the owning
/// route unmounts the signal is disposed and every access yields `None`.
#[derive(Clone, Copy, Debug)]
pub struct SignalHost(pub RwSignal<FormController>);

impl FormHost for SignalHost {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormController) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
