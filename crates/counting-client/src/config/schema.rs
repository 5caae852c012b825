use std::time::Duration;

use reqwest::header::HeaderName;
use serde::Deserialize;

use counting_core::error::{CountingError, Result};
use counting_core::{DEFAULT_ERROR_KEY, DEFAULT_HEADER_KEY};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    #[serde(default)]
    pub client: ClientSection,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            client: ClientSection::default(),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CountingError::UnsupportedVersion);
        }
        self.client.validate()
    }
}

/// Parameters of one sampling run. Fixed before the run starts.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_rounds")]
    pub rounds: u64,

    #[serde(default = "default_header_key")]
    pub header_key: String,

    /// Tally key for rounds that failed at the transport layer.
    #[serde(default = "default_error_key")]
    pub error_key: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            url: default_url(),
            rounds: default_rounds(),
            header_key: default_header_key(),
            error_key: default_error_key(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(CountingError::BadRequest(format!(
                "client.url must be an http(s) url: {}",
                self.url
            )));
        }
        if self.header_key.is_empty() || HeaderName::from_bytes(self.header_key.as_bytes()).is_err() {
            return Err(CountingError::BadRequest(format!(
                "client.header_key is not a valid header name: {:?}",
                self.header_key
            )));
        }
        if self.error_key.is_empty() {
            return Err(CountingError::BadRequest("client.error_key must not be empty".into()));
        }
        if !(100..=120_000).contains(&self.timeout_ms) {
            return Err(CountingError::BadRequest(
                "client.timeout_ms must be between 100 and 120000".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_url() -> String {
    "http://localhost:8080/count".into()
}
fn default_rounds() -> u64 {
    50
}
fn default_header_key() -> String {
    DEFAULT_HEADER_KEY.into()
}
fn default_error_key() -> String {
    DEFAULT_ERROR_KEY.into()
}
fn default_timeout_ms() -> u64 {
    5000
}
