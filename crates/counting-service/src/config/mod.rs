//! Service config loader (strict parsing).
//!
//! The config file is optional; without one the defaults apply. The listening
//! port can always be overridden through the `PORT` environment variable.

pub mod schema;

use std::{fs, io, path::Path};

use counting_core::error::{CountingError, Result};

pub use schema::{ServiceConfig, ServiceSection};

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "counting-service.yaml";
/// Env var naming an alternative config file.
pub const ENV_CONFIG_PATH: &str = "COUNTING_SERVICE_CONFIG";
/// Env var overriding the listening port (PaaS convention).
pub const ENV_PORT: &str = "PORT";

/// Resolve config from file (if any) and environment.
pub fn load() -> Result<ServiceConfig> {
    let path = std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let mut cfg = load_optional(&path)?;
    cfg.service.apply_port_override(std::env::var(ENV_PORT).ok().as_deref())?;
    Ok(cfg)
}

/// Read and parse `path`; a missing file yields the defaults.
pub fn load_optional(path: impl AsRef<Path>) -> Result<ServiceConfig> {
    match fs::read_to_string(path.as_ref()) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.as_ref().display(), "no config file, using defaults");
            Ok(ServiceConfig::default())
        }
        Err(e) => Err(CountingError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| CountingError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
