//! Counting service library entry.
//!
//! This crate wires config, shared state, HTTP handlers and the process
//! lifecycle into a small axum service that counts calls and tags every
//! response with its instance identifier. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod counter;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod router;
