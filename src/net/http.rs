//! Native HTTP transport over `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ClientError;
use super::request::{ApiRequest, Method};
use super::transport::{Transport, parse_body};
use crate::config::ClientConfig;

pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport with the configured base URL and timeouts.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HttpClientBuild` if the TLS backend fails to
    /// initialize.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ClientError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_owned() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let pairs: Vec<(&str, &str)> = request.query_pairs().collect();

        let mut builder = self.http.request(method, url).query(&pairs);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(%request, status = status.as_u16(), "api request rejected");
            return Err(ClientError::Status { status: status.as_u16(), body: text });
        }
        parse_body(&text)
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
