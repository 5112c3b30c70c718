//! Single-record pages addressed by the `:id` route segment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Jobs, journalists, companies and received applications all render the
//! same way: a title, a summary line, and the record's scalar fields. The
//! record is re-fetched whenever the `:id` param changes; a response for an
//! id the user already navigated away from is dropped.

#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use serde_json::Value;

use crate::components::resource_list::{row_summary, row_title};
use crate::net::api::{company_application_path, company_path, job_path, journalist_path};
use crate::net::http::HttpClient;
use crate::net::resource::LoadState;
use crate::net::types::Role;
use crate::pages::jobs::leading_int;
use crate::state::session::SessionState;

/// Fields never shown on a detail page.
const HIDDEN_FIELDS: &[&str] = &["id", "password", "userId", "companyId", "journalistId", "jobId"];

/// `"mediaWorkType"` -> `"Media work type"`.
pub fn field_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.extend(c.to_lowercase());
        } else if c == '_' {
            label.push(' ');
        } else {
            label.push(c);
        }
    }
    label
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "Yes" } else { "No" }.to_owned()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(display_value).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        // Nested records (a job's company, an application's job) show by name.
        Value::Object(_) => Some(row_title(value)),
        _ => None,
    }
}

/// `(label, value)` rows for every displayable field, ordered by key.
pub fn detail_fields(record: &Value) -> Vec<(String, String)> {
    let Some(fields) = record.as_object() else {
        return Vec::new();
    };
    fields
        .iter()
        .filter(|(key, _)| !HIDDEN_FIELDS.contains(&key.as_str()))
        .filter_map(|(key, value)| Some((field_label(key), display_value(value)?)))
        .collect()
}

/// Load `path_for(id)` for the current `:id` param, again on every change.
fn use_param_record(path_for: fn(&str) -> String) -> (Memo<Option<String>>, ReadSignal<LoadState<Value>>) {
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id")));
    let state = RwSignal::new(LoadState::<Value>::Loading);
    let client = expect_context::<HttpClient>();

    Effect::new(move || {
        let Some(current) = id.get() else {
            state.set(LoadState::Failed("Missing id".to_owned()));
            return;
        };
        state.set(LoadState::Loading);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let loaded = crate::net::resource::fetch_resource::<Value>(&client, &path_for(&current), &[]).await;
                if id.try_get_untracked().flatten().as_deref() == Some(current.as_str()) {
                    let _ = state.try_set(loaded);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, current, path_for);
        }
    });

    (id, state.read_only())
}

fn render_record(state: LoadState<Value>) -> AnyView {
    match state {
        LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
        LoadState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
        LoadState::Loaded(record) => {
            let summary = row_summary(&record);
            view! {
                <article class="detail">
                    <h1>{row_title(&record)}</h1>
                    {summary.map(|s| view! { <p class="detail__summary">{s}</p> })}
                    <dl class="detail__fields">
                        {detail_fields(&record)
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt> <dd>{value}</dd> })
                            .collect_view()}
                    </dl>
                </article>
            }
            .into_any()
        }
    }
}

/// Id sent with an application; the route param read as a leading integer.
pub fn application_job_id(route_id: &str) -> Result<i64, &'static str> {
    leading_int(route_id).ok_or("Invalid job id")
}

#[component]
pub fn JobDetailsPage() -> impl IntoView {
    let (id, record) = use_param_record(job_path);
    let session = expect_context::<RwSignal<SessionState>>();
    let client = expect_context::<HttpClient>();
    let notice = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    let on_apply = move |_| {
        if busy.get() {
            return;
        }
        let job_id = match application_job_id(&id.get_untracked().unwrap_or_default()) {
            Ok(job_id) => job_id,
            Err(message) => {
                notice.set(Some(Err(message.to_owned())));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::apply_to_job(&client, job_id, crate::net::api::DEFAULT_COVER_LETTER).await;
                let outcome = result
                    .map(|()| "Application submitted successfully!".to_owned())
                    .map_err(|e| e.user_message());
                let _ = notice.try_set(Some(outcome));
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, job_id);
        }
    };

    view! {
        <section class="detail-page">
            <a class="detail-page__back" href="/jobs">"Back to jobs"</a>
            {move || render_record(record.get())}
            <div
                class="detail-page__actions"
                class:hidden=move || session.with(|s| s.role() != Some(Role::Journalist))
            >
                <button class="button" disabled=move || busy.get() on:click=on_apply>
                    "Apply for this job"
                </button>
            </div>
            {move || {
                notice
                    .get()
                    .map(|n| match n {
                        Ok(message) => view! { <p class="notice">{message}</p> }.into_any(),
                        Err(message) => view! { <p class="error">{message}</p> }.into_any(),
                    })
            }}
        </section>
    }
}

#[component]
pub fn JournalistProfilePage() -> impl IntoView {
    let (_, record) = use_param_record(journalist_path);
    view! {
        <section class="detail-page">
            <a class="detail-page__back" href="/journalists">"Back to journalists"</a>
            {move || render_record(record.get())}
        </section>
    }
}

#[component]
pub fn CompanyProfilePage() -> impl IntoView {
    let (id, record) = use_param_record(company_path);
    view! {
        <section class="detail-page">
            <a class="detail-page__back" href="/companies">"Back to companies"</a>
            {move || render_record(record.get())}
            <a class="button button--secondary" href=move || format!("/jobs?company={}", id.get().unwrap_or_default())>
                "Open jobs"
            </a>
        </section>
    }
}

/// Company only: one application received for one of its jobs.
#[component]
pub fn ApplicationDetailsPage() -> impl IntoView {
    let (_, record) = use_param_record(company_application_path);
    view! {
        <section class="detail-page">
            <a class="detail-page__back" href="/applications">"Back to applications"</a>
            {move || render_record(record.get())}
        </section>
    }
}
