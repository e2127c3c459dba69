//! Configuration schema for building a client from a file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::{ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Client settings as read from TOML.
///
/// ```toml
/// base_url = "https://api.beosin.com"
/// app_id = "..."
/// app_secret = "..."
/// timeout_secs = 30
/// debug = false
/// ```
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub app_id: String,
    pub app_secret: String,
    pub timeout_secs: u64,
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: String::new(),
            app_secret: String::new(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            debug: false,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn into_builder(self) -> ClientBuilder {
        let timeout = self.timeout();
        ClientBuilder::new(self.app_id, self.app_secret)
            .base_url(self.base_url)
            .timeout(timeout)
            .debug(self.debug)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("debug", &self.debug)
            .finish()
    }
}
