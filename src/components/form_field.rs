//! Labelled inputs bound to one field of a form struct held in a signal.

use leptos::prelude::*;

/// Reads one field of `F`.
pub type Getter<F> = fn(&F) -> String;
/// Writes one field of `F`.
pub type Setter<F> = fn(&mut F, String);

pub fn text_field<F>(
    label: &'static str,
    input_type: &'static str,
    form: RwSignal<F>,
    get: Getter<F>,
    set: Setter<F>,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

pub fn textarea_field<F>(label: &'static str, form: RwSignal<F>, get: Getter<F>, set: Setter<F>) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <textarea
                class="form-field__input"
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            ></textarea>
        </label>
    }
}

/// A `<select>` over fixed `options`, with an empty "Select..." entry first.
pub fn select_field<F>(
    label: &'static str,
    options: &'static [&'static str],
    form: RwSignal<F>,
    get: Getter<F>,
    set: Setter<F>,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-field__input"
                prop:value=move || form.with(get)
                on:change=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {options.iter().map(|opt| view! { <option value=*opt>{*opt}</option> }).collect_view()}
            </select>
        </label>
    }
}
