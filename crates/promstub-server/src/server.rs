//! Listener lifecycle: bind, serve, drain on SIGINT/SIGTERM.

use axum::Router;
use promstub_core::error::{Result, StubError};
use tokio::net::TcpListener;

use crate::config::StubConfig;

pub async fn serve(cfg: &StubConfig, app: Router) -> Result<()> {
    let listen = cfg.listen_addr()?;
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| StubError::Io(format!("bind {listen} failed: {e}")))?;

    tracing::info!(%listen, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StubError::Io(format!("server failed: {e}")))?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
