//! Request handlers for the two services.

pub mod discovery;
pub mod metrics;
