//! Route guard components.
//!
//! Both re-evaluate on every session change; the decision itself lives in
//! `util::guard` so it can be tested without a renderer.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::guard::{GuardDecision, protect, redirect_authenticated};

/// Placeholder shown while the session is restoring.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! { <div class="loading">"Loading..."</div> }
}

fn render_decision(decision: GuardDecision, children: &ChildrenFn) -> AnyView {
    match decision {
        GuardDecision::Pending => view! { <LoadingPlaceholder/> }.into_any(),
        GuardDecision::Redirect { path, replace } => {
            let options = NavigateOptions { replace, ..NavigateOptions::default() };
            view! { <Redirect path=path options=options/> }.into_any()
        }
        GuardDecision::Render => children().into_any(),
    }
}

/// Renders `children` only for a signed-in user whose role is in
/// `allowed_roles` (any role when empty).
#[component]
pub fn ProtectedRoute(#[prop(optional)] allowed_roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    move || {
        let decision = session.with(|s| protect(s, allowed_roles));
        render_decision(decision, &children)
    }
}

/// Renders `children` only for anonymous users; used on `/login`.
#[component]
pub fn AuthenticatedRedirect(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    move || {
        let decision = session.with(redirect_authenticated);
        render_decision(decision, &children)
    }
}
