//! Browser HTTP transport over `gloo-net` (client-side hydrate builds only).

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;

use super::error::ClientError;
use super::request::{ApiRequest, Method};
use super::transport::{Transport, parse_body};

pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    /// Requests go to `base_url` + path. Use a relative base such as `/api`
    /// to target the page's own origin.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn execute(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        builder = builder.query(request.query_pairs());
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ClientError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ClientError::Request(e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ClientError::Status { status, body: text });
        }
        parse_body(&text)
    }
}
