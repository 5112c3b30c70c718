//! Shared test doubles for the HTTP stack.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::net::events::AuthEvents;
use crate::net::http::HttpClient;
use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::storage::MemoryStore;

pub(crate) const TEST_BASE_URL: &str = "http://api.test";

/// Replays queued replies in order and records every request it saw.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, status: u16, body: serde_json::Value) -> Self {
        let body = if body.is_null() { String::new() } else { body.to_string() };
        self.replies.lock().unwrap().push_back(Ok(ApiResponse { status, body }));
        self
    }

    pub(crate) fn fail(self, err: ApiError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

/// Transport, storage and events wired into one client.
pub(crate) struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub storage: Arc<MemoryStore>,
    pub events: AuthEvents,
    pub client: HttpClient,
}

pub(crate) fn harness(transport: ScriptedTransport, storage: MemoryStore) -> Harness {
    let transport = Arc::new(transport);
    let storage = Arc::new(storage);
    let events = AuthEvents::default();
    let config = ApiConfig { base_url: TEST_BASE_URL.to_owned(), timeout_ms: 10_000 };
    let client = HttpClient::new(config, transport.clone(), storage.clone(), events.clone());
    Harness { transport, storage, events, client }
}
