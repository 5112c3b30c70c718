//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` and `AuthenticatedRedirect` evaluate these on every
//! render against the current [`SessionState`]. Role mismatches go to
//! `/dashboard`, which has no role restriction of its own.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

pub const COMPANY_ONLY: &[Role] = &[Role::Company];
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// What a guard does for the current render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still restoring: show a placeholder, do not navigate.
    Pending,
    /// Navigate to `path`. Guard redirects always `replace` the current
    /// history entry so Back does not return to the guarded view.
    Redirect { path: &'static str, replace: bool },
    /// Show the guarded view.
    Render,
}

fn redirect(path: &'static str) -> GuardDecision {
    GuardDecision::Redirect { path, replace: true }
}

/// Decision for a protected view. An empty `allowed_roles` admits any
/// signed-in user.
pub fn protect(state: &SessionState, allowed_roles: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    let (Some(_), Some(user)) = (&state.token, &state.user) else {
        return redirect(LOGIN_PATH);
    };
    if !allowed_roles.is_empty() && !allowed_roles.contains(&user.role) {
        return redirect(DASHBOARD_PATH);
    }
    GuardDecision::Render
}

/// Decision for the login view: signed-in users are sent to the dashboard.
pub fn redirect_authenticated(state: &SessionState) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        redirect(DASHBOARD_PATH)
    } else {
        GuardDecision::Render
    }
}
