//! DM operation dispatch.
//!
//! One decoded request goes in, exactly one response comes out. The access
//! policy is consulted first; the resource store is only reached on Defer.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, ExecOutcome, ResourceStore, StoreError};
