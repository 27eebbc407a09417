//! One labelled input with its inline validation error.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use forms::fields::error_key;
use forms::schema::FieldSpec;
use leptos::prelude::*;

/// Renders `spec` as label + input; the error paragraph (id `<name>Error`)
/// appears only while `error` is non-empty.
#[component]
pub fn FormField<F>(
    spec: FieldSpec,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<String>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let has_error = move || !error.get().is_empty();

    view! {
        <label for=spec.name class="form-field__label">
            {spec.label}
        </label>
        <input
            type=spec.input.as_html()
            id=spec.name
            name=spec.name
            class=move || input_class(has_error())
            prop:value=move || value.get()
            on:input=move |ev| on_input(event_target_value(&ev))
        />
        <Show when=has_error>
            <div class="form-field__error">
                <p id=error_key(spec.name)>{move || error.get()}</p>
            </div>
        </Show>
    }
}

pub(crate) fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-field__input form-field__input--error" } else { "form-field__input" }
}
