//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Options → version/help gate → resolve config source
//!     → build registry factories → runner
//!
//! Shutdown (shutdown.rs):
//!     Root ExecutionContext created per run → cancelled by the runner
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → cancel the execution context
//! ```
//!
//! # Design Decisions
//! - Ordered startup: options first, then configuration, then the runner
//! - Startup never exits the process itself; errors are returned

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::ExecutionContext;
pub use startup::Termination;
