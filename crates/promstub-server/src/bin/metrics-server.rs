//! metrics-server: serves one configured gauge for Prometheus to scrape.
//!
//! - `GET <METRICS_PATH>` (default `/metrics2`): exposition text
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
        metric_value = %cfg.metrics.value,
        "metrics-server starting"
    );

    let app = router::build_metrics_router(AppState::new(cfg.clone()));
    match server::serve(&cfg, app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "metrics-server failed");
            ExitCode::FAILURE
        }
    }
}
