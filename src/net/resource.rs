//! Generic page data loading: one GET, three states.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listing and dashboard pages all follow the same loading -> data | inline
//! error lifecycle. Pages call [`use_resource_state`] with an endpoint and a
//! response type instead of hand-rolling the fetch each time.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::http::HttpClient;

/// Lifecycle of a page-local fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Loaded(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Loaded(value) => LoadState::Loaded(f(value)),
            Self::Failed(message) => LoadState::Failed(message),
        }
    }
}

/// `GET path` and fold the outcome into a [`LoadState`].
pub async fn fetch_resource<T: DeserializeOwned>(
    client: &HttpClient,
    path: &str,
    query: &[(&str, &str)],
) -> LoadState<T> {
    let result = client.get::<T>(path, query).await;
    if let Err(e) = &result {
        log::warn!("loading {path} failed: {e}");
    }
    LoadState::from_result(result)
}

/// Start loading `path` when the calling component mounts.
///
/// Reads the [`HttpClient`] from context. The fetch is not cancelled on
/// unmount; a late result is dropped because the signal is gone.
pub fn use_resource_state<T>(path: &str, query: &[(&str, &str)]) -> ReadSignal<LoadState<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(LoadState::<T>::Loading);

    #[cfg(feature = "csr")]
    {
        let client = expect_context::<HttpClient>();
        let path = path.to_owned();
        let query: Vec<(String, String)> = query.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        leptos::task::spawn_local(async move {
            let pairs: Vec<(&str, &str)> = query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            let loaded = fetch_resource::<T>(&client, &path, &pairs).await;
            let _ = state.try_set(loaded);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, query);
    }

    state.read_only()
}
