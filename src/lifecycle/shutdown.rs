//! Execution context handed to the run entrypoint.

use tokio_util::sync::CancellationToken;

/// Cancellable handle for cooperative shutdown.
///
/// Startup creates exactly one root context per run and installs no
/// triggers on it; cancellation belongs to whoever runs with it.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    token: CancellationToken,
}

impl ExecutionContext {
    /// Create a fresh root context.
    pub fn root() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Request shutdown.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolve once the context is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }
}
