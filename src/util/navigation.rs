//! Router-backed navigation port.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use forms::Navigator;
use leptos_router::NavigateOptions;

/// [`Navigator`] wrapping the closure returned by `use_navigate()`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, route: &str) {
        leptos::logging::log!("navigating to {route}");
        (self.navigate)(route, NavigateOptions::default());
    }
}
