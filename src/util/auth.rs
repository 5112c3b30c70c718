//! App-level reaction to rejected tokens.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`crate::net::http::HttpClient`] clears the persisted token on a 401 and
//! emits [`AuthEvent::Unauthorized`]. This controller is the single
//! subscriber that clears the in-memory session and sends the browser to
//! `/login` with a full page load.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::events::{AuthEvent, AuthEvents};
use crate::state::session::SessionStore;
use crate::util::guard::LOGIN_PATH;

/// Whether a hard navigation to `/login` is needed from `current_path`.
/// Already being on the login page keeps its inline error visible.
pub fn should_hard_navigate(current_path: &str) -> bool {
    current_path.trim_end_matches('/') != LOGIN_PATH
}

/// Subscribe `store` to unauthorized events from the HTTP layer.
pub fn install_unauthorized_controller(events: &AuthEvents, store: SessionStore) {
    events.subscribe(move |event| match event {
        AuthEvent::Unauthorized { path } => {
            log::warn!("request to {path} was unauthorized; clearing session");
            store.expire();
            redirect_to_login();
        }
    });
}

#[cfg(feature = "csr")]
fn redirect_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let current = location.pathname().unwrap_or_default();
    if should_hard_navigate(&current) {
        let _ = location.set_href(LOGIN_PATH);
    }
}

#[cfg(not(feature = "csr"))]
fn redirect_to_login() {}
