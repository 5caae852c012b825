//! Top-level facade crate for the counting demo.
//!
//! Re-exports the core primitives, the counting service and the sampling client
//! so users can depend on a single crate.

pub mod core {
    pub use counting_core::*;
}

pub mod service {
    pub use counting_service::*;
}

pub mod client {
    pub use counting_client::*;
}
