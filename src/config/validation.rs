//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: &ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before a client is built from the config

use crate::config::schema::ClientConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingAppId,
    MissingAppSecret,
    ZeroTimeout,
    InvalidBaseUrl(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingAppId => write!(f, "app_id is empty"),
            ValidationError::MissingAppSecret => write!(f, "app_secret is empty"),
            ValidationError::ZeroTimeout => write!(f, "timeout_secs must be greater than zero"),
            ValidationError::InvalidBaseUrl(reason) => write!(f, "invalid base_url: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.app_id.trim().is_empty() {
        errors.push(ValidationError::MissingAppId);
    }
    if config.app_secret.trim().is_empty() {
        errors.push(ValidationError::MissingAppSecret);
    }
    if config.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    match url::Url::parse(&config.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidBaseUrl(format!(
            "unsupported scheme '{}'",
            url.scheme()
        ))),
        Err(e) => errors.push(ValidationError::InvalidBaseUrl(e.to_string())),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
