//! Lightweight in-process metrics (dependency-free).
//!
//! Counters are stored as atomics behind `DashMap` label keys and rendered
//! by the `/metrics` handler in Prometheus text format, without pulling in
//! an external metrics crate.

pub mod metrics;

pub use metrics::ServerMetrics;
