//! Startup error taxonomy.
//!
//! Every variant is fatal: the binary logs it once and exits with
//! [`StartupError::exit_code`].

use std::path::PathBuf;

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Boxed error returned by the run entrypoint.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that end the process before or during the run.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Command-line flags could not be parsed.
    #[error("invalid command line: {0}")]
    OptionParse(#[source] clap::Error),

    /// The custom resource configuration file could not be opened.
    #[error("cannot open custom resource state config file {}: {source}", .path.display())]
    ConfigFileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The custom resource configuration is malformed.
    #[error(transparent)]
    ConfigParse(#[from] ConfigParseError),

    /// The long-running run entrypoint failed.
    #[error("run failed: {0}")]
    Run(#[source] BoxError),
}

impl StartupError {
    /// Stage name used in the fatal log line.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::OptionParse(_) => "options",
            Self::ConfigFileOpen { .. } => "config_open",
            Self::ConfigParse(_) => "config_parse",
            Self::Run(_) => "run",
        }
    }

    /// Human-readable summary of what failed.
    pub fn message(&self) -> &'static str {
        match self {
            Self::OptionParse(_) => "Parsing flag definitions error",
            Self::ConfigFileOpen { .. } => "Custom Resource State Metrics file could not be opened",
            Self::ConfigParse(_) => "Parsing from Custom Resource State Metrics file failed",
            Self::Run(_) => "Failed to run resource-state-metrics",
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Errors from turning a configuration document into registry factories.
#[derive(Debug, Error)]
pub enum ConfigParseError {
    #[error("failed to parse Custom Resource State metrics: {0}")]
    Decode(#[from] serde_yaml::Error),

    #[error("invalid Custom Resource State metrics: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("found multiple custom resource configurations for the same resource {0}")]
    DuplicateResource(String),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
