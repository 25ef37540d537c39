//! The seam between request descriptors and the network.
//!
//! DESIGN
//! ======
//! A `Transport` owns base URL, bearer header injection, JSON
//! (de)serialization and error surfacing. Endpoint wrappers only build
//! descriptors. Execution is single-threaded (browser event loop or a
//! current-thread runtime), so futures are `?Send`.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ClientError;
use super::request::ApiRequest;

#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;

/// Sends one request and returns the decoded JSON response.
#[async_trait(?Send)]
pub trait Transport {
    /// Execute `request`, attaching `bearer` as the `Authorization` header
    /// when present.
    ///
    /// # Errors
    ///
    /// Network failures, non-success statuses and undecodable bodies.
    async fn execute(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<Value, ClientError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn execute(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<Value, ClientError> {
        (**self).execute(request, bearer).await
    }
}

/// One request observed by a [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub request: ApiRequest,
    pub bearer: Option<String>,
}

/// In-process transport that records every request instead of sending it.
///
/// Replies are taken from a FIFO queue; once the queue is empty every call
/// answers with the default reply (`null` unless changed).
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: RefCell<Vec<RecordedCall>>,
    replies: RefCell<VecDeque<Result<Value, ClientError>>>,
    default_reply: Value,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every unqueued call with `reply`.
    #[must_use]
    pub fn with_default_reply(mut self, reply: Value) -> Self {
        self.default_reply = reply;
        self
    }

    /// Queue a reply for the next unanswered call.
    pub fn push_reply(&self, reply: Result<Value, ClientError>) {
        self.replies.borrow_mut().push_back(reply);
    }

    /// Every call seen so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// The most recent call, if any.
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn execute(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<Value, ClientError> {
        self.calls
            .borrow_mut()
            .push(RecordedCall { request: request.clone(), bearer: bearer.map(str::to_owned) });
        let queued = self.replies.borrow_mut().pop_front();
        queued.unwrap_or_else(|| Ok(self.default_reply.clone()))
    }
}

/// Decode a response body; an empty body is `null`.
pub(crate) fn parse_body(text: &str) -> Result<Value, ClientError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
}
