//! Client config loader (strict parsing). A missing file yields the defaults.

pub mod schema;

use std::{fs, io, path::Path};

use counting_core::error::{CountingError, Result};

pub use schema::{ClientConfig, ClientSection};

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "counting-client.yaml";
/// Env var naming an alternative config file.
pub const ENV_CONFIG_PATH: &str = "COUNTING_CLIENT_CONFIG";

pub fn load() -> Result<ClientConfig> {
    let path = std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    load_optional(path)
}

pub fn load_optional(path: impl AsRef<Path>) -> Result<ClientConfig> {
    match fs::read_to_string(path.as_ref()) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.as_ref().display(), "no config file, using defaults");
            Ok(ClientConfig::default())
        }
        Err(e) => Err(CountingError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<ClientConfig> {
    let cfg: ClientConfig = serde_yaml::from_str(s)
        .map_err(|e| CountingError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
