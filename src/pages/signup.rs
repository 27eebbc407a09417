//! Sign-up page: username, email, password and confirmation; lands on
//! `/signin` after registering.

use forms::SIGN_UP;
use leptos::prelude::*;

use crate::components::auth_form::AuthForm;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! { <AuthForm schema={&SIGN_UP}/> }
}
