//! Sampling client library entry.
//!
//! Issues a fixed number of sequential GET requests against a counting service,
//! attributes each response to the instance id found in its header (or to the
//! error sentinel when the request failed), and turns the resulting tally into
//! a percentage report.

pub mod config;
pub mod probe;
pub mod sampler;

pub use probe::{HttpProbe, Probe};
