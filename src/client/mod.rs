//! Beosin API client.
//!
//! # Data Flow
//! ```text
//! typed request (api/*.rs)
//!     → pipeline.rs (query params, URL, auth headers)
//!     → transport.rs (single GET, no retry)
//!     → pipeline.rs (envelope check, typed decode)
//!     → ApiResponse<T> | Error
//! ```
//!
//! # Design Decisions
//! - Client is immutable after `build()` and cheap to clone
//! - Credentials are baked into a `HeaderMap` once, at construction
//! - Transport is the only dynamic seam

pub mod options;
pub mod pipeline;
pub mod transport;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;

pub use options::{ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};

/// Async client for the Beosin API.
///
/// Safe to share across tasks; every call is an independent GET.
#[derive(Clone)]
pub struct Client {
    /// Base URL without trailing slash.
    base_url: Arc<str>,
    /// Content-Type + APPID + APP-SECRET.
    headers: HeaderMap,
    transport: Arc<dyn Transport>,
    timeout: Duration,
    debug: bool,
}

impl Client {
    /// Start configuring a client with the given credentials.
    pub fn builder(app_id: impl Into<String>, app_secret: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(app_id, app_secret)
    }

    /// Client with every option at its default.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> crate::Result<Self> {
        Self::builder(app_id, app_secret).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout applied by the default transport.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
