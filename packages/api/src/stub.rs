use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// In-memory [`Transport`] that replays queued responses in order and
/// records every request it receives.
///
/// When the queue runs dry it answers `200` with a `null` body.
#[derive(Clone, Debug, Default)]
pub struct StubTransport {
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.push(Ok(ApiResponse::new(status, body)))
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.push(Err(error))
    }

    fn push(&self, response: Result<ApiResponse, ApiError>) -> &Self {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
        self
    }

    /// Every request executed so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().ok()?.last().cloned()
    }
}

impl Transport for StubTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or_else(|| Ok(ApiResponse::new(200, Value::Null)))
    }
}
