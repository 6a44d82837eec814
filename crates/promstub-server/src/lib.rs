//! promstub server library.
//!
//! Wires config, shared state and the two routers (metrics exporter and
//! service discovery). Consumed by the `metrics-server` and `promdiscovery`
//! binaries and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
pub mod services;
