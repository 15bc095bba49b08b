//! In-memory transport for exercising the client without a server.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Replays queued replies in order and records every request it receives.
///
/// Once the queue is empty every further request fails with a transport
/// error. Wrap it in an `Arc` to inspect `requests()` after handing it to a
/// client.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply with `status` and `body`.
    pub fn respond(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.reply(Ok(HttpResponse::new(status, body)))
    }

    /// Queue an arbitrary reply or transport failure.
    pub fn reply(self, reply: Result<HttpResponse, ApiError>) -> Self {
        self.replies.lock().push_back(reply);
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().push(request);
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply left".to_string())))
    }
}
