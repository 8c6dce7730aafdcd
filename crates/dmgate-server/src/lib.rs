//! dmgate server library entry.
//!
//! This crate wires the config loader, access policy, dispatcher, resource
//! store, and the HTTP debug adapter into a cohesive DM server stack. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod context;
pub mod policy;
pub mod router;
pub mod transport;
pub mod dispatch;
pub mod store;
pub mod obs;
pub mod ops;
