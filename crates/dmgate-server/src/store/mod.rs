//! Resource store implementations.
//!
//! The dispatcher only sees the `ResourceStore` trait; this module provides
//! the in-memory implementation used by the binary and the test suites.

pub mod memory;

pub use memory::MemoryStore;
