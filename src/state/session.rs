//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionStore`] is the single source of truth for who is logged in. It
//! persists the token through the HTTP client's [`KeyValueStore`], and pushes
//! every new [`SessionState`] to its subscribers; the app mirrors that into a
//! Leptos signal that route guards and pages read.
//!
//! ERROR HANDLING
//! ==============
//! Session operations never return errors. API failures become
//! [`AuthOutcome::Failure`] and leave the in-memory session untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{AuthResponse, CompanyRegistration, Credentials, JournalistRegistration, Role, User};
use crate::storage::TOKEN_KEY;

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

/// Current identity. `token` and `user` are set and cleared together, except
/// while `loading` during restore, when only the token is known.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// State before [`SessionStore::restore`] has finished.
    pub fn starting() -> Self {
        Self { token: None, user: None, loading: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Result of login and registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure { error: String },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { error } => Some(error),
        }
    }
}

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

#[derive(Clone)]
pub struct SessionStore {
    client: HttpClient,
    state: Arc<Mutex<SessionState>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
    restored: Arc<AtomicBool>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("state", &self.snapshot()).finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(SessionState::starting())),
            listeners: Arc::new(Mutex::new(Vec::new())),
            restored: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Called with the new state after every change.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    fn replace(&self, next: SessionState) {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            *state = next.clone();
        }
        let listeners: Vec<Listener> = self.listeners.lock().unwrap_or_else(PoisonError::into_inner).clone();
        for listener in listeners {
            listener(&next);
        }
    }

    /// Rebuild the session from the persisted token. Runs once per store;
    /// later calls return the current state without touching the network.
    pub async fn restore(&self) -> SessionState {
        if self.restored.swap(true, Ordering::SeqCst) {
            return self.snapshot();
        }

        let storage = self.client.storage().clone();
        let Some(token) = storage.get(TOKEN_KEY) else {
            log::debug!("no persisted session");
            self.replace(SessionState::default());
            return self.snapshot();
        };

        log::debug!("restoring persisted session");
        self.replace(SessionState { token: Some(token.clone()), user: None, loading: true });

        let result = api::fetch_profile(&self.client).await;

        // A login or logout that landed meanwhile wins.
        let current = self.snapshot();
        if !current.loading || current.token.as_deref() != Some(token.as_str()) {
            return current;
        }

        match result {
            Ok(user) => {
                log::info!("session restored for user {} ({})", user.id, user.role.as_str());
                self.replace(SessionState { token: Some(token), user: Some(user), loading: false });
            }
            Err(e) => {
                log::warn!("session restore failed: {e}");
                storage.remove(TOKEN_KEY);
                self.replace(SessionState::default());
            }
        }
        self.snapshot()
    }

    /// Authenticate with email and password.
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        let credentials = Credentials { email: email.to_owned(), password: password.to_owned() };
        let result = api::login(&self.client, &credentials).await;
        self.settle("login", result, LOGIN_FAILED)
    }

    /// Create a journalist account and sign in as it.
    pub async fn register_journalist(&self, registration: &JournalistRegistration) -> AuthOutcome {
        let result = api::register_journalist(&self.client, registration).await;
        self.settle("journalist registration", result, REGISTRATION_FAILED)
    }

    /// Create a company account and sign in as it.
    pub async fn register_company(&self, registration: &CompanyRegistration) -> AuthOutcome {
        let result = api::register_company(&self.client, registration).await;
        self.settle("company registration", result, REGISTRATION_FAILED)
    }

    /// Forget the session locally. No server round-trip.
    pub fn logout(&self) {
        log::info!("logout");
        self.client.storage().remove(TOKEN_KEY);
        self.replace(SessionState::default());
    }

    /// Drop the in-memory session after the server rejected the token. The
    /// HTTP client has already removed the persisted copy.
    pub fn expire(&self) {
        if self.snapshot() == SessionState::default() {
            return;
        }
        log::info!("session expired");
        self.replace(SessionState::default());
    }

    fn settle(&self, operation: &str, result: Result<AuthResponse, ApiError>, fallback: &str) -> AuthOutcome {
        match result {
            Ok(auth) => {
                log::info!("{operation} succeeded for user {} ({})", auth.user.id, auth.user.role.as_str());
                self.client.storage().set(TOKEN_KEY, &auth.token);
                self.replace(SessionState { token: Some(auth.token), user: Some(auth.user), loading: false });
                AuthOutcome::Success
            }
            Err(e) => {
                log::warn!("{operation} failed: {e}");
                let error = e.server_message().unwrap_or(fallback).to_owned();
                AuthOutcome::Failure { error }
            }
        }
    }
}
