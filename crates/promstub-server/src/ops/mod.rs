//! Operational HTTP endpoints.
//!
//! - `/health` : liveness, constant body

use axum::Json;
use promstub_core::health::HealthStatus;

pub const HEALTH_PATH: &str = "/health";

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
