//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Startup and runner produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (exporter self-metrics, registry descriptions)
//!
//! Consumers:
//!     → stdout (log events)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
