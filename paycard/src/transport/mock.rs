// paycard/src/transport/mock.rs
//! Recording transport for tests.

use serde_json::Value;

use crate::transport::traits::{Method, Transport};
use crate::{Error, Result};

/// One request as seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// HTTP verb.
    pub method: Method,
    /// Request path.
    pub path: String,
    /// JSON body, if any.
    pub body: Option<Value>,
}

/// Mock transport for tests. It records requests and returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Requests seen so far, oldest first.
    pub requests: Vec<RecordedRequest>,
    /// Queued replies, consumed front to back.
    pub responses: Vec<Result<Value>>,
}

impl MockTransport {
    /// An empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn push_response(&mut self, resp: Value) {
        self.responses.push(Ok(resp));
    }

    /// Queue a failure, e.g. `Error::NotFound` to simulate a gateway 404.
    pub fn push_error(&mut self, err: Error) {
        self.responses.push(Err(err));
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<&RecordedRequest> {
        self.requests.last()
    }
}

impl Transport for MockTransport {
    fn request(&mut self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        self.requests.push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        if self.responses.is_empty() {
            Err(Error::Transport("no queued response".to_string()))
        } else {
            self.responses.remove(0)
        }
    }
}
