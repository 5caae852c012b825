use std::net::{IpAddr, SocketAddr};

use axum::http::{HeaderName, HeaderValue};
use serde::Deserialize;

use counting_core::error::{CountingError, Result};
use counting_core::DEFAULT_HEADER_KEY;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub service: ServiceSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            service: ServiceSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CountingError::UnsupportedVersion);
        }
        self.service.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Response header carrying the instance id.
    #[serde(default = "default_header_key")]
    pub header_key: String,

    /// Fixed instance id; derived from the startup clock when unset.
    #[serde(default)]
    pub instance_id: Option<String>,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            header_key: default_header_key(),
            instance_id: None,
        }
    }
}

impl ServiceSection {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(CountingError::BadRequest("service.port must not be 0".into()));
        }
        if self.header_key.is_empty() || HeaderName::from_bytes(self.header_key.as_bytes()).is_err() {
            return Err(CountingError::BadRequest(format!(
                "service.header_key is not a valid header name: {:?}",
                self.header_key
            )));
        }
        if let Some(id) = &self.instance_id {
            if id.is_empty() || HeaderValue::from_str(id).is_err() {
                return Err(CountingError::BadRequest(
                    "service.instance_id must be a non-empty header-safe string".into(),
                ));
            }
        }
        self.listen_addr().map(|_| ())
    }

    /// Apply the `PORT` env value. Unset or empty keeps the configured port.
    pub fn apply_port_override(&mut self, value: Option<&str>) -> Result<()> {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(());
        };
        let port: u16 = raw
            .parse()
            .map_err(|e| CountingError::BadRequest(format!("PORT must be a port number ({raw}): {e}")))?;
        if port == 0 {
            return Err(CountingError::BadRequest("PORT must not be 0".into()));
        }
        self.port = port;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| CountingError::BadRequest(format!("service.host is not an IP address: {e}")))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8080
}
fn default_header_key() -> String {
    DEFAULT_HEADER_KEY.into()
}
