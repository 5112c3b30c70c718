//! Top navigation bar.
//!
//! Links depend on the signed-in role. Logout is local and does not navigate:
//! a guarded page redirects itself once the session signal clears.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::{SessionState, SessionStore};

/// `(href, label)` pairs for the current role.
pub fn nav_links(role: Option<Role>) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("/jobs", "Jobs"), ("/journalists", "Journalists"), ("/companies", "Companies"), ("/media", "Media"), ("/search", "Search")];
    match role {
        None => {
            links.push(("/login", "Login"));
            links.push(("/register", "Register"));
        }
        Some(role) => {
            links.push(("/dashboard", "Dashboard"));
            links.push(("/media/my", "My Media"));
            match role {
                Role::Company => {
                    links.push(("/jobs/my", "My Jobs"));
                    links.push(("/applications", "Applications"));
                }
                Role::Admin => links.push(("/admin", "Admin")),
                Role::Journalist => {}
            }
        }
    }
    links
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();

    let on_logout = move |_| store.logout();

    view! {
        <header class="header">
            <a class="header__brand" href="/">"WeSourceYou"</a>
            <nav class="header__nav">
                {move || {
                    let role = session.with(|s| if s.is_authenticated() { s.role() } else { None });
                    nav_links(role)
                        .into_iter()
                        .map(|(href, label)| view! { <a class="header__link" href=href>{label}</a> })
                        .collect_view()
                }}
            </nav>
            <span class="header__user">
                {move || session.with(|s| s.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default())}
            </span>
            <button
                class="header__logout"
                class:hidden=move || !session.with(SessionState::is_authenticated)
                on:click=on_logout
            >
                "Logout"
            </button>
        </header>
    }
}
