//! Configured HTTP client shared by every page.
//!
//! Request phase: attach `Authorization: Bearer <token>` whenever a token is
//! persisted. Response phase: a 401 from any endpoint removes the persisted
//! token and emits [`AuthEvent::Unauthorized`]; every other non-2xx status is
//! returned to the caller as [`ApiError::Status`] untouched.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics or retries. Callers get a `Result` and decide how to
//! surface it.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, status_failed_message};
use super::events::{AuthEvent, AuthEvents};
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::ErrorBody;
use crate::config::ApiConfig;
use crate::storage::{KeyValueStore, TOKEN_KEY};

#[derive(Clone)]
pub struct HttpClient {
    config: Arc<ApiConfig>,
    transport: Arc<dyn Transport>,
    storage: Arc<dyn KeyValueStore>,
    events: AuthEvents,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        storage: Arc<dyn KeyValueStore>,
        events: AuthEvents,
    ) -> Self {
        Self { config: Arc::new(config), transport, storage, events }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn events(&self) -> &AuthEvents {
        &self.events
    }

    pub fn storage(&self) -> &Arc<dyn KeyValueStore> {
        &self.storage
    }

    /// Build the outgoing request, reading the token at call time.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<String>,
    ) -> ApiRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.storage.get(TOKEN_KEY) {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        ApiRequest {
            method,
            url: self.config.url(path),
            query: query.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
            headers,
            body,
            timeout_ms: self.config.timeout_ms,
        }
    }

    /// Send a request and apply the shared response policy.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] on 401 (after clearing the token and
    /// emitting the event), [`ApiError::Status`] on any other non-2xx, or the
    /// transport's error when no response arrived.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let request = self.build_request(method, path, query, body);
        let resp = match self.transport.send(request).await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("{} {path} failed: {e}", method.as_str());
                return Err(e);
            }
        };

        if resp.status == 401 {
            log::warn!("{} {path} returned 401; clearing session token", method.as_str());
            self.storage.remove(TOKEN_KEY);
            self.events.emit(&AuthEvent::Unauthorized { path: path.to_owned() });
            return Err(ApiError::Unauthorized { message: response_error_message(&resp) });
        }
        if !resp.is_success() {
            log::debug!("{} {path} returned {}", method.as_str(), resp.status);
            return Err(ApiError::Status { status: resp.status, message: response_error_message(&resp) });
        }
        Ok(resp)
    }

    /// `GET` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`]; also [`ApiError::Decode`] for a body that
    /// does not match `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let resp = self.request(Method::Get, path, query, None).await?;
        decode(&resp)
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::Post, path, body).await
    }

    /// `PUT` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::Put, path, body).await
    }

    /// `PATCH` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::Patch, path, body).await
    }

    /// `DELETE`, ignoring any response body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, path, &[], None).await.map(|_| ())
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let raw = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = self.request(method, path, &[], Some(raw)).await?;
        decode(&resp)
    }
}

/// Decode a JSON body; an empty body decodes as `null`.
fn decode<T: DeserializeOwned>(resp: &ApiResponse) -> Result<T, ApiError> {
    let body = if resp.body.trim().is_empty() { "null" } else { resp.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn response_error_message(resp: &ApiResponse) -> String {
    serde_json::from_str::<ErrorBody>(&resp.body)
        .ok()
        .and_then(|b| b.text())
        .unwrap_or_else(|| status_failed_message(resp.status))
}
