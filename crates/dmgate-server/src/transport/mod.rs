//! Transport adapters.
//!
//! The dispatcher is transport-agnostic; this module decodes wire requests
//! into `DmRequest` values and encodes `DmResponse` statuses back out.
//! Only the HTTP debug adapter lives here; a CoAP front-end would plug in
//! the same way.

pub mod http;
