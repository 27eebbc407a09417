//! Sign-in page: email + password, stores the auth token, lands on `/`.

use forms::SIGN_IN;
use leptos::prelude::*;

use crate::components::auth_form::AuthForm;

#[component]
pub fn SignInPage() -> impl IntoView {
    view! { <AuthForm schema={&SIGN_IN}/> }
}
