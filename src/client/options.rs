//! Client construction.
//!
//! All options are optional and fall back to the constants below.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::client::pipeline::trim_base_url;
use crate::client::transport::{ReqwestTransport, Transport};
use crate::client::Client;
use crate::error::{Error, Result};

/// Production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.beosin.com";

/// Per-request timeout of the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Authentication header names. Matching is case-insensitive on the wire.
pub(crate) const HEADER_APP_ID: &str = "appid";
pub(crate) const HEADER_APP_SECRET: &str = "app-secret";

/// Builder for [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    app_id: String,
    app_secret: String,
    base_url: Option<String>,
    timeout: Option<Duration>,
    debug: bool,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            base_url: None,
            timeout: None,
            debug: false,
            http_client: None,
            transport: None,
        }
    }

    /// Override the API base URL. An empty string keeps the default.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Timeout for the default transport. Ignored when a custom
    /// `reqwest::Client` or transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Log outgoing URLs and raw response bodies at debug level.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS, pooling).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the transport entirely. Takes precedence over `http_client`.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url.as_deref() {
            Some(url) if !url.is_empty() => trim_base_url(url),
            _ => DEFAULT_BASE_URL.to_string(),
        };

        let timeout = match self.timeout {
            Some(t) if !t.is_zero() => t,
            _ => DEFAULT_TIMEOUT,
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(HEADER_APP_ID),
            header_value("APPID", &self.app_id)?,
        );
        headers.insert(
            HeaderName::from_static(HEADER_APP_SECRET),
            header_value("APP-SECRET", &self.app_secret)?,
        );

        let transport: Arc<dyn Transport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => Arc::new(
                ReqwestTransport::with_timeout(timeout)
                    .map_err(|e| Error::InvalidConfig(format!("failed to build http client: {}", e)))?,
            ),
        };

        Ok(Client {
            base_url: base_url.into(),
            headers,
            transport,
            timeout,
            debug: self.debug,
        })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| Error::InvalidConfig(format!("{} contains characters not allowed in a header", name)))?;
    value.set_sensitive(true);
    Ok(value)
}
