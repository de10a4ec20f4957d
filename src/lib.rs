//! Custom resource state metrics exporter.

pub mod app;
pub mod config;
pub mod customresource;
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use app::{ExporterRunner, Runner};
pub use config::Options;
pub use error::StartupError;
pub use lifecycle::startup::run;
pub use lifecycle::Termination;
