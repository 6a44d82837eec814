//! Axum router wiring.
//!
//! - metrics-server: `<metrics.path>` + `/health`
//! - promdiscovery: `/targets` + `/health`

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, ops, services};

pub const TARGETS_PATH: &str = "/targets";

/// The metrics path is served from the fallback and never becomes a route
/// pattern, so `:` and `*` in it are literal. When it equals `/health` the
/// metrics body wins and the health route is not registered.
pub fn build_metrics_router(state: AppState) -> Router {
    let mut router = Router::new();
    if state.cfg().metrics.path != ops::HEALTH_PATH {
        router = router.route(ops::HEALTH_PATH, get(ops::health));
    }
    router
        .fallback(services::metrics::exposition)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn build_discovery_router(state: AppState) -> Router {
    Router::new()
        .route(TARGETS_PATH, get(services::discovery::targets))
        .route(ops::HEALTH_PATH, get(ops::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
