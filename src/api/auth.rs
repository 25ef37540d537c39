//! Login and registration.
//!
//! `login` / `register` are plain endpoint wrappers like every other module.
//! `sign_in` / `sign_out` additionally update the shared session, which is
//! what the login page does after a successful call.

use serde_json::Value;

use super::ApiClient;
use crate::net::error::ClientError;
use crate::net::request::ApiRequest;
use crate::net::transport::Transport;
use crate::net::types::{ApiEnvelope, LoginRequest, LoginResponse, RegisterRequest};

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

pub struct AuthApi<'a, T> {
    pub(crate) client: &'a ApiClient<T>,
}

impl<T: Transport> AuthApi<'_, T> {
    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post("/auth/login").json(request)?)
            .await
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post("/auth/register").json(request)?)
            .await
    }

    /// Log in and store the returned token and profile in the session.
    ///
    /// # Errors
    ///
    /// Transport errors, a failed envelope (`ClientError::Status`), a payload
    /// that is not a login response (`ClientError::Decode`), or a session
    /// storage failure.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let request = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let raw = self.login(&request).await?;
        let login = ApiEnvelope::<LoginResponse>::from_value(raw)?
            .into_data()?
            .ok_or_else(|| ClientError::Decode("login response has no data".into()))?;
        self.client.session().apply_login(&login)?;
        Ok(login)
    }

    /// Drop the local session. The backend keeps no server-side session, so
    /// nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Storage` if the persisted keys cannot be removed.
    pub fn sign_out(&self) -> Result<(), ClientError> {
        self.client.session().logout()
    }
}
