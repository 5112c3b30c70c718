use super::*;
use crate::storage::{KeyValueStore, MemoryStore};
use crate::test_support::{Harness, ScriptedTransport, harness};
use futures::executor::block_on;
use serde_json::json;

fn store(h: &Harness) -> SessionStore {
    SessionStore::new(h.client.clone())
}

fn journalist(id: u32) -> serde_json::Value {
    json!({ "id": id, "role": "journalist", "firstName": "Lina", "email": "lina@example.com" })
}

/// Store that already holds an authenticated session for user 7.
fn signed_in(h: &Harness) -> SessionStore {
    let session = store(h);
    assert!(block_on(session.login("lina@example.com", "secret1")).is_success());
    session
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_store_starts_loading_without_identity() {
    let h = harness(ScriptedTransport::new(), MemoryStore::default());
    let state = store(&h).snapshot();
    assert!(state.loading);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn session_state_default_is_signed_out() {
    let state = SessionState::default();
    assert!(!state.loading);
    assert_eq!(state.role(), None);
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_without_token_finishes_signed_out() {
    let h = harness(ScriptedTransport::new(), MemoryStore::default());
    let state = block_on(store(&h).restore());
    assert_eq!(state, SessionState::default());
    assert!(h.transport.requests().is_empty());
}

#[test]
fn restore_with_token_fetches_profile() {
    let h = harness(
        ScriptedTransport::new().reply(200, json!({ "user": journalist(3) })),
        MemoryStore::with_entry(TOKEN_KEY, "persisted"),
    );
    let session = store(&h);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    session.subscribe(move |s| sink.lock().unwrap().push(s.clone()));

    let state = block_on(session.restore());

    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("persisted"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("3"));
    assert_eq!(h.transport.last_request().header("Authorization"), Some("Bearer persisted"));

    // Loading with the token first, then the full session.
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].loading);
    assert_eq!(seen[0].token.as_deref(), Some("persisted"));
    assert!(seen[0].user.is_none());
    assert!(seen[1].is_authenticated());
}

#[test]
fn restore_with_rejected_token_clears_everything() {
    let h = harness(
        ScriptedTransport::new().reply(401, json!({ "message": "jwt expired" })),
        MemoryStore::with_entry(TOKEN_KEY, "expired"),
    );
    let state = block_on(store(&h).restore());
    assert_eq!(state, SessionState::default());
    assert_eq!(h.storage.get(TOKEN_KEY), None);
}

#[test]
fn restore_network_failure_clears_session() {
    let h = harness(
        ScriptedTransport::new().fail(ApiError::Network("offline".to_owned())),
        MemoryStore::with_entry(TOKEN_KEY, "persisted"),
    );
    let state = block_on(store(&h).restore());
    assert!(state.token.is_none());
    assert!(!state.loading);
    assert_eq!(h.storage.get(TOKEN_KEY), None);
}

#[test]
fn restore_runs_only_once() {
    let h = harness(
        ScriptedTransport::new().reply(200, journalist(3)),
        MemoryStore::with_entry(TOKEN_KEY, "persisted"),
    );
    let session = store(&h);
    block_on(session.restore());
    let again = block_on(session.restore());
    assert!(again.is_authenticated());
    assert_eq!(h.transport.requests().len(), 1);
}

// =============================================================
// login / register
// =============================================================

#[test]
fn login_success_sets_token_user_and_persists() {
    let h = harness(
        ScriptedTransport::new().reply(200, json!({ "token": "t1", "user": { "id": 1, "role": "journalist" } })),
        MemoryStore::default(),
    );
    let session = store(&h);

    let outcome = block_on(session.login("a@b.co", "secret1"));

    assert_eq!(outcome, AuthOutcome::Success);
    let state = session.snapshot();
    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("1"));
    assert!(!state.loading);
    assert_eq!(h.storage.get(TOKEN_KEY).as_deref(), Some("t1"));
}

#[test]
fn login_failure_keeps_prior_session_and_returns_server_message() {
    let h = harness(
        ScriptedTransport::new()
            .reply(200, json!({ "token": "t7", "user": journalist(7) }))
            .reply(401, json!({ "message": "Invalid credentials" })),
        MemoryStore::default(),
    );
    let session = signed_in(&h);
    let before = session.snapshot();

    let outcome = block_on(session.login("lina@example.com", "wrong-pass"));

    assert_eq!(outcome, AuthOutcome::Failure { error: "Invalid credentials".to_owned() });
    assert_eq!(session.snapshot(), before);
}

#[test]
fn login_network_failure_uses_fallback_message() {
    let h = harness(
        ScriptedTransport::new().fail(ApiError::Network("offline".to_owned())),
        MemoryStore::default(),
    );
    let outcome = block_on(store(&h).login("a@b.co", "secret1"));
    assert_eq!(outcome.error(), Some("Login failed"));
}

#[test]
fn register_journalist_establishes_session() {
    let h = harness(
        ScriptedTransport::new().reply(201, json!({ "token": "new", "user": journalist(11) })),
        MemoryStore::default(),
    );
    let session = store(&h);
    let registration = JournalistRegistration { name: "Lina".to_owned(), ..JournalistRegistration::default() };

    let outcome = block_on(session.register_journalist(&registration));

    assert!(outcome.is_success());
    assert!(session.snapshot().is_authenticated());
    assert_eq!(h.transport.last_request().url, "http://api.test/auth/register-journalist");
    assert_eq!(h.storage.get(TOKEN_KEY).as_deref(), Some("new"));
}

#[test]
fn register_company_failure_reports_message() {
    let h = harness(
        ScriptedTransport::new().reply(409, json!({ "message": "Email already registered" })),
        MemoryStore::default(),
    );
    let session = store(&h);

    let outcome = block_on(session.register_company(&CompanyRegistration::default()));

    assert_eq!(outcome.error(), Some("Email already registered"));
    assert!(!session.snapshot().is_authenticated());
    assert_eq!(h.transport.last_request().url, "http://api.test/auth/register-company");
}

#[test]
fn register_without_server_message_uses_fallback() {
    let h = harness(ScriptedTransport::new().reply(500, serde_json::Value::Null), MemoryStore::default());
    let outcome = block_on(store(&h).register_company(&CompanyRegistration::default()));
    // A bare 500 still carries the generic status message from the client.
    assert_eq!(outcome.error(), Some("request failed: 500"));

    let h = harness(ScriptedTransport::new().fail(ApiError::Unavailable), MemoryStore::default());
    let outcome = block_on(store(&h).register_journalist(&JournalistRegistration::default()));
    assert_eq!(outcome.error(), Some("Registration failed"));
}

// =============================================================
// logout / expire
// =============================================================

#[test]
fn logout_clears_memory_and_storage() {
    let h = harness(
        ScriptedTransport::new().reply(200, json!({ "token": "t7", "user": journalist(7) })),
        MemoryStore::default(),
    );
    let session = signed_in(&h);

    session.logout();

    assert_eq!(session.snapshot(), SessionState::default());
    assert_eq!(h.storage.get(TOKEN_KEY), None);
    assert_eq!(h.transport.requests().len(), 1);
}

#[test]
fn expire_clears_memory_and_notifies_once() {
    let h = harness(
        ScriptedTransport::new().reply(200, json!({ "token": "t7", "user": journalist(7) })),
        MemoryStore::default(),
    );
    let session = signed_in(&h);
    let notified = Arc::new(Mutex::new(0));
    let counter = notified.clone();
    session.subscribe(move |_| *counter.lock().unwrap() += 1);

    session.expire();
    session.expire();

    assert!(!session.snapshot().is_authenticated());
    assert_eq!(*notified.lock().unwrap(), 1);
}

#[test]
fn logout_during_restore_wins() {
    let h = harness(
        ScriptedTransport::new().reply(200, journalist(3)),
        MemoryStore::with_entry(TOKEN_KEY, "persisted"),
    );
    let session = store(&h);
    let racer = session.clone();
    // Logging out from the first notification simulates a logout that lands
    // while the profile request is still in flight.
    session.subscribe(move |s| {
        if s.loading {
            racer.logout();
        }
    });

    let state = block_on(session.restore());

    assert_eq!(state, SessionState::default());
    assert_eq!(h.storage.get(TOKEN_KEY), None);
}
