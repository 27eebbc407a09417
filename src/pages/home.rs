//! Home route reached after signing in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::util::storage::BrowserTokenStore;

/// Landing page. Refreshes `AuthState` from storage on mount and offers the
/// auth routes when no token is present.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_context::<RwSignal<AuthState>>().unwrap_or_else(|| RwSignal::new(AuthState::default()));

    Effect::new(move || auth.set(AuthState::from_store(&BrowserTokenStore)));

    view! {
        <section class="home-page">
            <h1>"My Blog"</h1>
            <Show
                when=move || auth.with(AuthState::is_signed_in)
                fallback=|| {
                    view! {
                        <p class="home-page__links">
                            <A href="/signin">"Sign In"</A>
                            " / "
                            <A href="/signup">"Sign Up"</A>
                        </p>
                    }
                }
            >
                <p class="home-page__welcome">"You are signed in."</p>
            </Show>
        </section>
    }
}
