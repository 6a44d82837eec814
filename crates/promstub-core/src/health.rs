//! Liveness body shared by both services.

use serde::Serialize;

/// Body of `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub const fn healthy() -> Self {
        Self { status: "healthy" }
    }
}
