//! DM data model (paths + requests).
//!
//! This module hosts the pieces a decoded DM operation is made of:
//! - `path`: object/instance/resource addressing, with panic-free parsing
//!   of URI-style path strings.
//! - `request`: operation kinds, request/response values, and notification
//!   attribute queries.
//!
//! All parsers are panic-free: malformed input is reported as `DmError`
//! instead of panicking or indexing raw segments, keeping the server
//! resilient to hostile traffic.

pub mod path;
pub mod request;

pub use path::{InstancePath, ObjectId, ResourcePath, Target};
pub use request::{Attribute, DmOperation, DmRequest, DmResponse};
