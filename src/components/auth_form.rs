//! Generic auth form view driven by a `forms::FormSchema`.
//!
//! ARCHITECTURE
//! ============
//! The view owns one `RwSignal<FormController>` and one `FormWorkflow` wired
//! to browser adapters. Input events go through `FormWorkflow::change`; the
//! submit event spawns `FormWorkflow::submit` on the local executor. The
//! workflow's timer scope is disposed when the route unmounts, so a pending
//! banner timeout or redirect never fires into a dead view.

use forms::schema::FormSchema;
use forms::{FormController, FormWorkflow, SubmitOutcome};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert_card::AlertCard;
use crate::components::form_field::FormField;
use crate::config::ClientConfig;
use crate::net::api::HttpTransport;
use crate::state::form::SignalHost;
use crate::util::navigation::RouterNavigator;
use crate::util::storage::BrowserTokenStore;
use crate::util::timers::BrowserScheduler;

/// Full-page form for `schema` with outcome banner and sibling-view link.
#[component]
pub fn AuthForm(schema: &'static FormSchema) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let form = RwSignal::new(FormController::new(schema));
    let workflow = FormWorkflow::new(
        SignalHost(form),
        HttpTransport::new(config.api_base_url),
        BrowserTokenStore,
        RouterNavigator::new(use_navigate()),
        BrowserScheduler,
    );

    let timers = workflow.timers().clone();
    on_cleanup(move || timers.dispose());

    let message = Signal::derive(move || form.with(|f| f.message().map(str::to_owned)));
    let submitting = move || form.with(FormController::is_submitting);

    let submit_workflow = workflow.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let workflow = submit_workflow.clone();
        leptos::task::spawn_local(async move {
            match workflow.submit().await {
                SubmitOutcome::Rejected(reason) => leptos::logging::log!("{} not sent: {reason:?}", schema.endpoint),
                SubmitOutcome::Detached => leptos::logging::log!("{} resolved after unmount", schema.endpoint),
                SubmitOutcome::Succeeded | SubmitOutcome::Failed => {}
            }
        });
    };

    let fields = schema
        .fields
        .iter()
        .map(|spec| {
            let spec = *spec;
            let name = spec.name;
            let field_workflow = workflow.clone();
            view! {
                <FormField
                    spec=spec
                    value=Signal::derive(move || form.with(|f| f.value(name).to_owned()))
                    error=Signal::derive(move || form.with(|f| f.error(name).to_owned()))
                    on_input=move |value: String| field_workflow.change(name, value)
                />
            }
        })
        .collect_view();

    view! {
        <section class="auth-page">
            <AlertCard message=message/>
            <div class="auth-page__form-wrap">
                <form class="auth-form" on:submit=on_submit>
                    <h1 class="auth-form__title">{schema.title}</h1>
                    {fields}
                    <button class="auth-form__submit" type="submit" disabled=submitting>
                        {schema.submit_label}
                    </button>
                    <div class="auth-form__alternate">
                        <p>
                            {schema.alternate.prompt}
                            " "
                            <A href=schema.alternate.route>{schema.alternate.label}</A>
                        </p>
                    </div>
                </form>
            </div>
        </section>
    }
}
