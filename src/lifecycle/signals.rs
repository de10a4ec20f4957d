//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT (Ctrl+C) or, on unix, SIGTERM
//! - Translate either into a shutdown of the execution context
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - A handler that cannot be installed never resolves, so the run keeps
//!   going and only context cancellation stops it

use crate::lifecycle::shutdown::ExecutionContext;

/// Resolve when the process is asked to stop.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}

/// Wait until `ctx` is cancelled or a shutdown signal arrives, then make
/// sure `ctx` is cancelled.
pub async fn wait_for_shutdown(ctx: &ExecutionContext) {
    tokio::select! {
        _ = ctx.cancelled() => {
            tracing::debug!("Execution context cancelled");
        }
        _ = shutdown_signal() => {
            ctx.cancel();
        }
    }
}
