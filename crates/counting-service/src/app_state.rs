//! Shared application state for the counting service.
//!
//! Holds the instance identity, the call counter and the termination channel.
//! Everything is derived once at startup and handed to handlers through axum
//! `State`; nothing here is global.

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use tokio::sync::watch;

use counting_core::error::{CountingError, Result};
use counting_core::InstanceIdentity;

use crate::config::ServiceConfig;
use crate::counter::Counter;
use crate::lifecycle::Termination;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    identity: InstanceIdentity,
    header_name: HeaderName,
    header_value: HeaderValue,
    counter: Counter,
    termination: watch::Sender<Option<Termination>>,
}

impl AppState {
    /// Build state from config. The identity comes from `service.instance_id`
    /// when set, otherwise from the startup clock.
    pub fn new(cfg: &ServiceConfig) -> Result<Self> {
        let identity = match &cfg.service.instance_id {
            Some(id) => InstanceIdentity::with_id(id.clone()),
            None => InstanceIdentity::from_clock(),
        };
        Self::with_identity(identity, &cfg.service.header_key)
    }

    pub fn with_identity(identity: InstanceIdentity, header_key: &str) -> Result<Self> {
        let header_name = HeaderName::from_bytes(header_key.as_bytes())
            .map_err(|e| CountingError::BadRequest(format!("invalid header key {header_key:?}: {e}")))?;
        let header_value = HeaderValue::from_str(identity.id())
            .map_err(|e| CountingError::BadRequest(format!("instance id is not header-safe: {e}")))?;
        let (termination, _) = watch::channel(None);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                identity,
                header_name,
                header_value,
                counter: Counter::new(),
                termination,
            }),
        })
    }

    pub fn identity(&self) -> &InstanceIdentity {
        &self.inner.identity
    }

    pub fn counter(&self) -> &Counter {
        &self.inner.counter
    }

    /// Header attached to every response: `<header_key>: <instance id>`.
    pub fn instance_header(&self) -> (HeaderName, HeaderValue) {
        (self.inner.header_name.clone(), self.inner.header_value.clone())
    }

    /// Ask the serving loop to stop and exit the process with `t`'s code.
    /// The first request wins; later ones are ignored.
    pub fn request_termination(&self, t: Termination) {
        self.inner.termination.send_if_modified(|slot| {
            if slot.is_some() {
                return false;
            }
            *slot = Some(t);
            true
        });
    }

    pub fn termination(&self) -> Option<Termination> {
        *self.inner.termination.borrow()
    }

    pub fn subscribe_termination(&self) -> watch::Receiver<Option<Termination>> {
        self.inner.termination.subscribe()
    }
}
