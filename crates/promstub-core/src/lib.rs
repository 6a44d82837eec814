//! promstub core: payload types and the shared error surface.
//!
//! This crate defines the Prometheus exposition sample, the HTTP service
//! discovery target group, the health body, and the error type used by the
//! server crate. It carries no transport or runtime dependencies.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `StubError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod discovery;
pub mod error;
pub mod exposition;
pub mod health;

/// Shared result type.
pub use error::{Result, StubError};
