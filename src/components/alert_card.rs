//! Slide-in banner showing the latest submission outcome.

#[cfg(test)]
#[path = "alert_card_test.rs"]
mod alert_card_test;

use leptos::prelude::*;

/// Transient notification card. Slides in while `message` is `Some` and out
/// once the form engine clears it.
#[component]
pub fn AlertCard(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class=move || alert_class(message.get().is_some()) role="status" aria-live="polite">
            <p class="alert-card__text">{move || message.get().unwrap_or_default()}</p>
        </div>
    }
}

pub(crate) fn alert_class(visible: bool) -> &'static str {
    if visible { "alert-card slide-in" } else { "alert-card slide-out" }
}
