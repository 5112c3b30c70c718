//! Role-aware landing page for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind a `ProtectedRoute` that accepts any role, so the session
//! always carries a user here. Companies see counts of their jobs,
//! applications and purchased media; journalists see their media count;
//! admins get a shortcut into moderation.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::resource_list::collection_rows;
use crate::net::api::{MY_COMPANY_APPLICATIONS_PATH, MY_COMPANY_JOBS_PATH, MY_MEDIA_PATH};
use crate::net::resource::{LoadState, use_resource_state};
use crate::net::types::Role;
use crate::state::session::SessionState;

/// Quick links shown under the greeting.
pub fn dashboard_links(role: Role) -> Vec<(&'static str, &'static str)> {
    match role {
        Role::Journalist => vec![("/jobs", "Find work"), ("/media", "Media marketplace")],
        Role::Company => vec![
            ("/jobs/my", "My jobs"),
            ("/applications", "Applications"),
            ("/journalists", "Find journalists"),
        ],
        Role::Admin => vec![("/admin", "Admin dashboard")],
    }
}

/// Text for a count card.
pub fn count_text(state: &LoadState<Value>) -> String {
    match state {
        LoadState::Loading => "...".to_owned(),
        LoadState::Loaded(body) => collection_rows(body).len().to_string(),
        LoadState::Failed(_) => "-".to_owned(),
    }
}

#[component]
fn CountCard(label: &'static str, path: &'static str) -> impl IntoView {
    let state = use_resource_state::<Value>(path, &[]);
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{move || state.with(count_text)}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let role = session.with_untracked(SessionState::role);
    let name = session.with_untracked(|s| s.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default());

    let cards = match role {
        Some(Role::Company) => view! {
            <CountCard label="Jobs posted" path=MY_COMPANY_JOBS_PATH/>
            <CountCard label="Applications" path=MY_COMPANY_APPLICATIONS_PATH/>
            <CountCard label="Media purchased" path=MY_MEDIA_PATH/>
        }
        .into_any(),
        Some(Role::Journalist) => view! { <CountCard label="My media" path=MY_MEDIA_PATH/> }.into_any(),
        Some(Role::Admin) | None => {
            view! { <p class="dashboard__note">"Review new jobs, media and accounts from the admin area."</p> }.into_any()
        }
    };

    view! {
        <div class="dashboard">
            <h1>{format!("Welcome, {name}")}</h1>
            <div class="dashboard__stats">{cards}</div>
            <nav class="dashboard__links">
                {role
                    .map(dashboard_links)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(href, label)| view! { <a class="button button--secondary" href=href>{label}</a> })
                    .collect_view()}
            </nav>
        </div>
    }
}
