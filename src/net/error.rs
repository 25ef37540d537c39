//! Client error type.
//!
//! Everything that can go wrong below the UI collapses into `ClientError`.
//! The API layer never inspects these; they pass through to the caller as-is.

/// Errors produced by transports, the session store, and config parsing.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A request body could not be serialized to JSON.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON shape the caller asked for.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// Persisted session storage rejected a read or write.
    #[error("session storage failed: {0}")]
    Storage(String),

    /// A configuration value was missing or invalid.
    #[error("config invalid: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status carried by the error, if the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend rejected the bearer credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encode(e.to_string())
    }
}
