//! Company sign-up.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{select_field, text_field, textarea_field};
use crate::state::session::SessionStore;
use crate::util::forms::{COMPANY_SIZES, CompanyForm, REQUIRED_SERVICES};
use crate::util::guard::DASHBOARD_PATH;

#[component]
pub fn RegisterCompanyPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let form = RwSignal::new(CompanyForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match form.with(CompanyForm::validate) {
            Ok(registration) => registration,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                let outcome = store.register_company(&registration).await;
                let _ = busy.try_set(false);
                match outcome.error() {
                    Some(message) => {
                        let _ = error.try_set(Some(message.to_owned()));
                    }
                    None => {
                        let _ = registered.try_set(true);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&store, registration);
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card auth-card--wide" on:submit=on_submit>
                <h1>"Register your company"</h1>
                {text_field("Company name", "text", form, |f| f.name.clone(), |f, v| f.name = v)}
                {text_field("Website", "url", form, |f| f.website.clone(), |f, v| f.website = v)}
                {select_field("Company size", COMPANY_SIZES, form, |f| f.company_size.clone(), |f, v| f.company_size = v)}
                {text_field("Industry", "text", form, |f| f.industry.clone(), |f, v| f.industry = v)}
                {text_field("Contact person", "text", form, |f| f.contact_name.clone(), |f, v| f.contact_name = v)}
                {text_field("Email", "email", form, |f| f.email.clone(), |f, v| f.email = v)}
                {text_field("Password", "password", form, |f| f.password.clone(), |f, v| f.password = v)}
                {text_field(
                    "Confirm password",
                    "password",
                    form,
                    |f| f.confirm_password.clone(),
                    |f, v| f.confirm_password = v,
                )}
                {text_field("Country", "text", form, |f| f.country.clone(), |f, v| f.country = v)}
                {text_field("City", "text", form, |f| f.city.clone(), |f, v| f.city = v)}
                {text_field("Phone number", "tel", form, |f| f.phone_number.clone(), |f, v| f.phone_number = v)}
                {textarea_field("Description", form, |f| f.description.clone(), |f, v| f.description = v)}
                <fieldset class="form-field">
                    <legend class="form-field__label">"Services you need"</legend>
                    {REQUIRED_SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <label class="form-field__check">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.required_services.iter().any(|s| s == *service))
                                        on:change=move |_| form.update(|f| f.toggle_service(service))
                                    />
                                    {*service}
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>
                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
                <button class="button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create account" }}
                </button>
            </form>
        </div>
    }
}
