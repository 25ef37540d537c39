//! REST endpoint wrappers.
//!
//! DESIGN
//! ======
//! `ApiClient` pairs a `Transport` with the shared session. Each resource
//! module exposes a borrowed handle (`client.exams()`, `client.video()`, ...)
//! whose methods map one call to exactly one request and return whatever the
//! transport returns. Nothing here retries, caches or inspects responses.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors pass through untouched. The only error raised at this
//! layer is `ClientError::Encode` when a caller-supplied body is not JSON.

use std::fmt::Display;

use serde_json::Value;

use crate::net::error::ClientError;
use crate::net::request::ApiRequest;
use crate::net::transport::Transport;
use crate::state::session::SharedSession;

pub mod auth;
pub mod course;
pub mod exam;
pub mod exercise;
pub mod material;
pub mod question;
pub mod report;
pub mod video;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Sends endpoint requests through `T`, authenticated by the session token.
pub struct ApiClient<T> {
    transport: T,
    session: SharedSession,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: SharedSession) -> Self {
        Self { transport, session }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    /// Send one request, attaching the current token if there is one.
    ///
    /// # Errors
    ///
    /// Whatever the transport returns.
    pub async fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        let bearer = self.session.token();
        tracing::debug!(method = %request.method, path = %request.path, authed = bearer.is_some(), "api request");
        self.transport.execute(&request, bearer.as_deref()).await
    }

    pub fn auth(&self) -> auth::AuthApi<'_, T> {
        auth::AuthApi { client: self }
    }

    pub fn courses(&self) -> course::CourseApi<'_, T> {
        course::CourseApi { client: self }
    }

    pub fn exams(&self) -> exam::ExamApi<'_, T> {
        exam::ExamApi { client: self }
    }

    pub fn exercises(&self) -> exercise::ExerciseApi<'_, T> {
        exercise::ExerciseApi { client: self }
    }

    pub fn materials(&self) -> material::MaterialApi<'_, T> {
        material::MaterialApi { client: self }
    }

    pub fn questions(&self) -> question::QuestionApi<'_, T> {
        question::QuestionApi { client: self }
    }

    pub fn reports(&self) -> report::ReportApi<'_, T> {
        report::ReportApi { client: self }
    }

    pub fn video(&self) -> video::VideoApi<'_, T> {
        video::VideoApi { client: self }
    }
}

/// Render an identifier as a single, percent-encoded path segment.
pub(crate) fn seg(id: impl Display) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}

#[cfg(test)]
pub(crate) fn recording_client() -> ApiClient<crate::net::transport::RecordingTransport> {
    ApiClient::new(crate::net::transport::RecordingTransport::new(), SharedSession::in_memory())
}
