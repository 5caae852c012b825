//! Counting core: transport-agnostic primitives shared by the counting service
//! and the sampling client.
//!
//! This crate defines the instance identity derivation, the response tally and
//! the percentage report, plus the error surface used across the workspace. It
//! intentionally carries no HTTP or runtime dependencies so the aggregation
//! logic can be exercised without a network.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod identity;
pub mod report;
pub mod tally;

/// Shared result type.
pub use error::{CountingError, Result};
pub use identity::InstanceIdentity;
pub use report::{Report, ReportLine};
pub use tally::Tally;

/// Response header carrying the instance identifier, by convention.
pub const DEFAULT_HEADER_KEY: &str = "Counter-ID";

/// Tally key used for rounds that failed at the transport layer.
pub const DEFAULT_ERROR_KEY: &str = "Error";
