//! Wire types shared between the API layer and its callers.
//!
//! Most endpoints take and return free-form JSON, so the API layer works in
//! `serde_json::Value`. The types here cover the few shapes callers decode
//! themselves: the response envelope, pagination, and the auth payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ClientError;

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

/// Status code the backend uses for a successful envelope.
pub const ENVELOPE_OK: i64 = 200;

/// `{ code, message, data }` wrapper every backend response is sent in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload of a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Status` carrying the backend message when `code`
    /// is not 200.
    pub fn into_data(self) -> Result<Option<T>, ClientError> {
        if self.code != ENVELOPE_OK {
            let status = u16::try_from(self.code).unwrap_or(0);
            return Err(ClientError::Status { status, body: self.message.unwrap_or_default() });
        }
        Ok(self.data)
    }
}

impl<T: serde::de::DeserializeOwned> ApiEnvelope<T> {
    /// Decode an envelope out of a raw transport response.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Decode` if `value` is not an envelope of `T`.
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub current_page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

/// A role attached to a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleInfo {
    pub role_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload of a successful `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub real_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_no: Option<String>,
}

impl RegisterRequest {
    /// Check the constraints the backend enforces before sending.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` naming the first field out of range.
    pub fn validate(&self) -> Result<(), ClientError> {
        let username_len = self.username.chars().count();
        if !(3..=50).contains(&username_len) {
            return Err(ClientError::Config("username must be 3-50 characters".into()));
        }
        let password_len = self.password.chars().count();
        if !(6..=50).contains(&password_len) {
            return Err(ClientError::Config("password must be 6-50 characters".into()));
        }
        if self.real_name.trim().is_empty() {
            return Err(ClientError::Config("real name must not be blank".into()));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(ClientError::Config("email is malformed".into()));
            }
        }
        Ok(())
    }
}
