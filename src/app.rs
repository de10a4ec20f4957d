//! Run entrypoint.
//!
//! # Responsibilities
//! - Define the seam startup hands control to ([`Runner`])
//! - Provide the default runner used by the binary
//!
//! # Design Decisions
//! - The runner owns the execution context for the whole run
//! - Returning `Ok(())` is the only clean shutdown; any error is fatal

use std::future::Future;

use crate::config::options::Options;
use crate::customresource::RegistryFactory;
use crate::error::BoxError;
use crate::lifecycle::shutdown::ExecutionContext;
use crate::lifecycle::signals;
use crate::observability::metrics;

/// Long-running service started once startup succeeds.
///
/// `run` returns only on shutdown or failure.
pub trait Runner {
    fn run(
        &self,
        ctx: ExecutionContext,
        opts: &Options,
        factories: Vec<Box<dyn RegistryFactory>>,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Serves the registries' metric families on the Prometheus endpoint until
/// a shutdown signal arrives or the context is cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExporterRunner;

impl Runner for ExporterRunner {
    async fn run(
        &self,
        ctx: ExecutionContext,
        opts: &Options,
        factories: Vec<Box<dyn RegistryFactory>>,
    ) -> Result<(), BoxError> {
        let listen = opts.listen_address();
        let addr = tokio::net::lookup_host(listen.as_str())
            .await?
            .next()
            .ok_or_else(|| format!("no address found for {listen}"))?;

        metrics::init_metrics(addr)?;
        metrics::register_factories(&factories);

        tracing::info!(
            address = %addr,
            registries = factories.len(),
            "Serving metrics"
        );

        signals::wait_for_shutdown(&ctx).await;

        tracing::info!("Shutdown complete");
        Ok(())
    }
}
