//! Access-control layer (protected-object gate).
//!
//! Compiles the configured protected-object set into an immutable lookup
//! structure and decides, before any store access, whether a DM request may
//! proceed. The deny decision for protected objects is independent of
//! instance existence, which is the whole point: a caller must not be able
//! to tell "absent" from "forbidden".

pub mod engine;
pub mod protected;

pub use engine::{AccessPolicy, Decision};
pub use protected::ProtectedObjectSet;
