//! Auth events raised by the HTTP layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP client never navigates. It emits [`AuthEvent::Unauthorized`] and
//! the top-level app controller decides what to do with it (clear the
//! session, go to `/login`).

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// A request to `path` came back 401; the persisted token is already gone.
    Unauthorized { path: String },
}

type Listener = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

/// Cloneable fan-out of [`AuthEvent`]s. Clones share one listener list.
#[derive(Clone, Default)]
pub struct AuthEvents {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl AuthEvents {
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    pub fn emit(&self, event: &AuthEvent) {
        // Snapshot first so a listener may subscribe without deadlocking.
        let listeners: Vec<Listener> = self.listeners.lock().unwrap_or_else(PoisonError::into_inner).clone();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl std::fmt::Debug for AuthEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthEvents").field("listeners", &self.listener_count()).finish()
    }
}
