//! Shared request pipeline used by every endpoint method.
//!
//! ```text
//! build URL → auth headers → GET → HTTP status → envelope → typed payload
//! ```
//!
//! The body is decoded twice: first as the bare [`Envelope`] to classify the
//! outcome, then, only when `code == 200`, as the full `ApiResponse<T>`.

use std::collections::BTreeMap;
use std::time::Instant;

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::client::transport::{HttpRequest, TransportError};
use crate::client::Client;
use crate::error::{ApiError, Error, Result};
use crate::observability::metrics::{self, Outcome};
use crate::types::{ApiResponse, Envelope};

/// Query parameters keyed by wire name. Ordered, so encoding is stable.
pub type QueryParams<'a> = BTreeMap<&'static str, &'a str>;

/// Collect query parameters, dropping empty values.
///
/// Required fields are not checked here; the API rejects them remotely.
pub fn build_query_params<'a>(pairs: &[(&'static str, &'a str)]) -> QueryParams<'a> {
    pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (*key, *value))
        .collect()
}

/// Strip every trailing `/` from a base URL.
pub fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// `base_url + endpoint`, plus `?query` when there are parameters.
pub fn build_url(base_url: &str, endpoint: &str, params: &QueryParams<'_>) -> String {
    let mut url = format!("{}{}", base_url, endpoint);
    if !params.is_empty() {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish();
        url.push('?');
        url.push_str(&query);
    }
    url
}

impl Client {
    /// Execute one authenticated GET against `endpoint` and decode the result.
    pub(crate) async fn do_request<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &QueryParams<'_>,
    ) -> Result<ApiResponse<T>> {
        let started = Instant::now();
        let result = self.send_request::<T>(endpoint, params).await;
        metrics::record_request(endpoint, Outcome::of(&result), started.elapsed());
        result
    }

    async fn send_request<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &QueryParams<'_>,
    ) -> Result<ApiResponse<T>> {
        let url = build_url(&self.base_url, endpoint, params);

        if self.debug {
            tracing::debug!(target: "beosin", method = "GET", url = %url, "Request");
        }

        let request = HttpRequest {
            method: Method::GET,
            url,
            headers: self.headers.clone(),
        };
        let response = self.transport.execute(request).await?;

        if self.debug {
            tracing::debug!(
                target: "beosin",
                status = response.status,
                body = %String::from_utf8_lossy(&response.body),
                "Response"
            );
        }

        if response.status != 200 {
            return Err(TransportError::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }
            .into());
        }

        let envelope: Envelope = serde_json::from_slice(&response.body)?;
        if !envelope.is_success() {
            return Err(Error::Api(ApiError::new(envelope.code, envelope.msg)));
        }

        Ok(serde_json::from_slice(&response.body)?)
    }
}
