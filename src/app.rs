//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{home::HomePage, signin::SignInPage, signup::SignUpPage};
use crate::state::auth::AuthState;

/// Resolve build-time config, falling back to defaults on malformed values.
pub fn resolve_config() -> ClientConfig {
    ClientConfig::from_build_env().unwrap_or_else(|err| {
        leptos::logging::warn!("{err}; using default client config");
        ClientConfig::default()
    })
}

/// Root application component.
///
/// Provides config and auth contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(resolve_config());
    provide_context(RwSignal::new(AuthState::default()));

    view! {
        <Title text="My Blog"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
            </Routes>
        </Router>
    }
}
