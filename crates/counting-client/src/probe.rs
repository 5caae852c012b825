//! One-request probes against the counting service.

use async_trait::async_trait;
use reqwest::Client;

use counting_core::error::{CountingError, Result};

use crate::config::ClientSection;

/// Issues a single request and reports the instance id it was answered by.
#[async_trait]
pub trait Probe: Send + Sync {
    /// `Ok` carries the identifier header value, empty when the header was
    /// absent or not valid text. `Err` means the request did not complete.
    async fn probe(&self) -> Result<String>;
}

/// reqwest-backed probe. Status codes are not inspected: any response that
/// arrived is a success, attributed by its header alone.
pub struct HttpProbe {
    client: Client,
    url: String,
    header_key: String,
}

impl HttpProbe {
    pub fn new(cfg: &ClientSection) -> Result<Self> {
        let client = Client::builder()
            .timeout(cfg.timeout())
            .build()
            .map_err(|e| CountingError::Internal(format!("http client build failed: {e}")))?;
        Ok(Self {
            client,
            url: cfg.url.clone(),
            header_key: cfg.header_key.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self) -> Result<String> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CountingError::Transport(describe(&e)))?;

        let id = resp
            .headers()
            .get(self.header_key.as_str())
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        // Drain so the connection goes back to the pool; the body itself is unused.
        if let Err(e) = resp.bytes().await {
            tracing::debug!(error = %e, "failed to drain response body");
        }
        Ok(id)
    }
}

fn describe(e: &reqwest::Error) -> String {
    let kind = if e.is_connect() {
        "connection refused or host unreachable"
    } else if e.is_timeout() {
        "timeout"
    } else if e.is_request() {
        "request error"
    } else {
        "network error"
    };
    format!("{kind}: {e}")
}
