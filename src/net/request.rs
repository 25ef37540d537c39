//! Outbound request descriptors.
//!
//! An `ApiRequest` is a plain value: method, path relative to the API base,
//! query pairs, and an optional JSON body. Endpoint wrappers build one per
//! call and hand it to a `Transport`; nothing here touches the network.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::error::ClientError;

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;

/// HTTP verbs used by the backend's CRUD mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Method {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            other => Err(ClientError::Config(format!("unsupported HTTP method: {other}"))),
        }
    }
}

/// A single outbound request, built fresh per call.
///
/// Query keys keep their position even when the value is absent: optional
/// filters such as `exerciseId` are recorded as `(key, None)` so callers can
/// see every parameter the endpoint accepts. Transports decide how an absent
/// value goes on the wire (see [`ApiRequest::query_pairs`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, Option<String>)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query parameter. `None` keeps the key with no value.
    #[must_use]
    pub fn query(mut self, key: &str, value: Option<impl ToString>) -> Self {
        self.query.push((key.to_owned(), value.map(|v| v.to_string())));
        self
    }

    /// Append every entry of a JSON object as query parameters.
    ///
    /// Strings are used verbatim, `null` becomes an absent value, other
    /// scalars use their JSON text. Non-object values add nothing.
    #[must_use]
    pub fn query_object(mut self, params: &Value) -> Self {
        if let Value::Object(map) = params {
            for (key, value) in map {
                let rendered = match value {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                };
                self.query.push((key.clone(), rendered));
            }
        }
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Encode` if `body` cannot be represented as JSON.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Query pairs that carry a value. Absent values are left off the wire,
    /// which is how the backend reads "no filter".
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
