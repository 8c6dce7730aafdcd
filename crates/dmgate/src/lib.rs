//! Top-level facade crate for dmgate.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use dmgate_core::*;
}

pub mod server {
    pub use dmgate_server::*;
}
