//! Pluggable HTTP transport.
//!
//! # Responsibilities
//! - Execute exactly one HTTP request and hand back status + raw body
//! - Surface connection failures and timeouts as [`TransportError`]
//!
//! The pipeline never inspects anything but the status code and body, so a
//! custom transport (proxying, retries, recording in tests) only has to
//! implement [`Transport::execute`].

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use thiserror::Error;

/// Errors raised below the JSON layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, timeout or body read failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with something other than 200 OK.
    #[error("unexpected http status: {status}, body: {body}")]
    Status { status: u16, body: String },

    /// Request could not be assembled (bad URL, bad header value).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Failure reported by a custom transport.
    #[error("{0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

/// Outgoing request as seen by a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
}

/// Raw response handed back to the pipeline.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes a single HTTP round trip.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing client. Its own timeout and proxy settings apply.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a client with the given per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let resp = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
