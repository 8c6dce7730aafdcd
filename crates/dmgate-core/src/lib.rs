//! dmgate core: transport-agnostic DM primitives and error types.
//!
//! This crate defines the device-management data model (object/instance/
//! resource paths, requests, responses, notification attributes) and the
//! response-code surface shared by the server, adapters, and test tooling.
//! It intentionally carries no transport or runtime dependencies so it can
//! be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `DmError`/`Result` so a server process
//! does not crash on malformed paths or hostile queries.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{DmError, ResponseCode, Result};
