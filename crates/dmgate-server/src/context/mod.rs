//! Caller/session context types shared across layers.
//!
//! The policy layer needs to know who is asking without coupling to
//! transport specifics, so authorization state lives here.

pub mod caller;

pub use caller::{Authorization, CallerContext};
