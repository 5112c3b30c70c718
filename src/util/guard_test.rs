use super::*;
use crate::net::types::User;

fn user(role: Role) -> User {
    User {
        id: "1".to_owned(),
        role,
        first_name: Some("Sam".to_owned()),
        email: Some("sam@example.com".to_owned()),
        extra: serde_json::Map::new(),
    }
}

fn signed_in(role: Role) -> SessionState {
    SessionState { token: Some("t1".to_owned()), user: Some(user(role)), loading: false }
}

const ALL_ROLES: [Role; 3] = [Role::Journalist, Role::Company, Role::Admin];

// =============================================================
// protect
// =============================================================

#[test]
fn loading_is_pending_for_every_state_and_role_set() {
    let mut states = vec![SessionState::starting()];
    for role in ALL_ROLES {
        states.push(SessionState { loading: true, ..signed_in(role) });
    }
    for state in &states {
        for allowed in [&[][..], COMPANY_ONLY, ADMIN_ONLY] {
            assert_eq!(protect(state, allowed), GuardDecision::Pending);
        }
        assert_eq!(redirect_authenticated(state), GuardDecision::Pending);
    }
}

#[test]
fn missing_token_redirects_to_login() {
    let state = SessionState { token: None, user: Some(user(Role::Admin)), loading: false };
    assert_eq!(protect(&state, &[]), GuardDecision::Redirect { path: "/login", replace: true });
    assert_eq!(protect(&state, ADMIN_ONLY), GuardDecision::Redirect { path: "/login", replace: true });
}

#[test]
fn missing_user_redirects_to_login() {
    let state = SessionState { token: Some("t1".to_owned()), user: None, loading: false };
    assert_eq!(protect(&state, &[]), GuardDecision::Redirect { path: LOGIN_PATH, replace: true });
}

#[test]
fn signed_out_redirects_to_login() {
    assert_eq!(protect(&SessionState::default(), COMPANY_ONLY), GuardDecision::Redirect { path: LOGIN_PATH, replace: true });
}

#[test]
fn wrong_role_redirects_to_dashboard() {
    for role in [Role::Journalist, Role::Admin] {
        assert_eq!(protect(&signed_in(role), COMPANY_ONLY), GuardDecision::Redirect { path: DASHBOARD_PATH, replace: true });
    }
    for role in [Role::Journalist, Role::Company] {
        assert_eq!(protect(&signed_in(role), ADMIN_ONLY), GuardDecision::Redirect { path: DASHBOARD_PATH, replace: true });
    }
}

#[test]
fn matching_role_renders() {
    assert_eq!(protect(&signed_in(Role::Company), COMPANY_ONLY), GuardDecision::Render);
    assert_eq!(protect(&signed_in(Role::Admin), ADMIN_ONLY), GuardDecision::Render);
    assert_eq!(protect(&signed_in(Role::Journalist), &[Role::Journalist, Role::Company]), GuardDecision::Render);
}

#[test]
fn empty_role_list_admits_any_signed_in_user() {
    for role in ALL_ROLES {
        assert_eq!(protect(&signed_in(role), &[]), GuardDecision::Render);
    }
}

// =============================================================
// redirect_authenticated
// =============================================================

#[test]
fn authenticated_user_is_sent_to_dashboard() {
    for role in ALL_ROLES {
        assert_eq!(redirect_authenticated(&signed_in(role)), GuardDecision::Redirect { path: DASHBOARD_PATH, replace: true });
    }
}

#[test]
fn anonymous_user_sees_login() {
    assert_eq!(redirect_authenticated(&SessionState::default()), GuardDecision::Render);
    let half = SessionState { token: Some("t1".to_owned()), user: None, loading: false };
    assert_eq!(redirect_authenticated(&half), GuardDecision::Render);
}

// =============================================================
// history replacement and session sequences
// =============================================================

#[test]
fn every_redirect_replaces_history() {
    let mut decisions = vec![protect(&SessionState::default(), &[]), redirect_authenticated(&signed_in(Role::Company))];
    decisions.extend(ALL_ROLES.map(|role| protect(&signed_in(role), &[])));
    decisions.push(protect(&signed_in(Role::Journalist), ADMIN_ONLY));
    for decision in decisions {
        if let GuardDecision::Redirect { replace, path } = decision {
            assert!(replace, "redirect to {path} must replace history");
        }
    }
}

#[test]
fn protected_view_after_logout_redirects_to_login() {
    use crate::state::session::SessionStore;
    use crate::storage::MemoryStore;
    use crate::test_support::{ScriptedTransport, harness};
    use futures::executor::block_on;
    use serde_json::json;

    let h = harness(
        ScriptedTransport::new().reply(200, json!({ "token": "t1", "user": { "id": 3, "role": "company" } })),
        MemoryStore::default(),
    );
    let store = SessionStore::new(h.client.clone());
    assert!(block_on(store.login("co@example.com", "secret1")).is_success());
    assert_eq!(protect(&store.snapshot(), COMPANY_ONLY), GuardDecision::Render);

    store.logout();

    assert_eq!(protect(&store.snapshot(), &[]), GuardDecision::Redirect { path: LOGIN_PATH, replace: true });
}
