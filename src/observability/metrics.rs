//! Client-side request metrics.
//!
//! # Metrics
//! - `beosin_requests_total` (counter): calls by endpoint, outcome
//! - `beosin_request_duration_seconds` (histogram): latency by endpoint

use std::time::Duration;

use crate::error::{Error, Result};

/// Coarse classification of a finished call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Transport,
    Decode,
    Api,
}

impl Outcome {
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Outcome::Ok,
            Err(Error::Transport(_)) => Outcome::Transport,
            Err(Error::Decode(_)) => Outcome::Decode,
            Err(Error::Api(_)) => Outcome::Api,
            // Raised only by `ClientBuilder::build`, never by a request.
            Err(Error::InvalidConfig(_)) => Outcome::Transport,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::Transport => "transport",
            Outcome::Decode => "decode",
            Outcome::Api => "api",
        }
    }
}

pub fn record_request(endpoint: &'static str, outcome: Outcome, elapsed: Duration) {
    metrics::counter!(
        "beosin_requests_total",
        "endpoint" => endpoint,
        "outcome" => outcome.as_str()
    )
    .increment(1);
    metrics::histogram!("beosin_request_duration_seconds", "endpoint" => endpoint)
        .record(elapsed.as_secs_f64());
}
