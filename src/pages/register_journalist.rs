//! Journalist sign-up.
//!
//! Validation runs before any request. A successful registration signs the
//! new account in and lands on `/dashboard`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{select_field, text_field, textarea_field};
use crate::state::session::SessionStore;
use crate::util::forms::{JournalistForm, MEDIA_WORK_TYPES};
use crate::util::guard::DASHBOARD_PATH;

#[component]
pub fn RegisterJournalistPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let form = RwSignal::new(JournalistForm::default());
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
        let registration = match form.with(JournalistForm::validate) {
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
                let outcome = store.register_journalist(&registration).await;
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
                <h1>"Register as a journalist"</h1>
                {text_field("Full name", "text", form, |f| f.name.clone(), |f, v| f.name = v)}
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
                {text_field("Date of birth", "date", form, |f| f.date_of_birth.clone(), |f, v| f.date_of_birth = v)}
                {text_field(
                    "Working in media since",
                    "date",
                    form,
                    |f| f.media_work_start_date.clone(),
                    |f, v| f.media_work_start_date = v,
                )}
                {select_field(
                    "Media work type",
                    MEDIA_WORK_TYPES,
                    form,
                    |f| f.media_work_type.clone(),
                    |f, v| f.media_work_type = v,
                )}
                {textarea_field("Bio", form, |f| f.bio.clone(), |f, v| f.bio = v)}
                {text_field("Skills (comma separated)", "text", form, |f| f.skills.clone(), |f, v| f.skills = v)}
                {text_field("Languages (comma separated)", "text", form, |f| f.languages.clone(), |f, v| f.languages = v)}
                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
                <button class="button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create account" }}
                </button>
            </form>
        </div>
    }
}
