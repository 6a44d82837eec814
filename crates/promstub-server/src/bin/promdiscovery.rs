//! promdiscovery: static Prometheus HTTP service discovery endpoint.
//!
//! - `GET /targets`: one target group, fixed hostnames
//! - `GET /health`

use std::process::ExitCode;

use promstub_server::{app_state::AppState, config, obs, router, server};

#[tokio::main]
async fn main() -> ExitCode {
    obs::init_tracing(obs::LogFormat::from_env());

    let cfg = match config::load_from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        metrics_path = %cfg.metrics.path,
        namespace = %cfg.discovery.namespace,
        port = %cfg.discovery.port,
        selector = %cfg.discovery.selector,
        "promdiscovery starting"
    );

    let app = router::build_discovery_router(AppState::new(cfg.clone()));
    match server::serve(&cfg, app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "promdiscovery failed");
            ExitCode::FAILURE
        }
    }
}
