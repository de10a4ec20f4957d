//! Startup orchestration.
//!
//! # Responsibilities
//! - Short-circuit on `--version` / `--help`
//! - Resolve the custom resource configuration source
//! - Build registry factories from it
//! - Hand control to the runner with a fresh root execution context
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, there is no degraded mode
//! - Steps run in order, not concurrently
//! - Nothing here prints or exits; the binary maps the outcome to an exit code
//!
//! ```text
//! Start → Version | Help
//!       → Configuring → ConfigError (exit 1)
//!       → Running → RunError (exit 1) | Shutdown (exit 0)
//! ```

use crate::app::Runner;
use crate::config::options::Options;
use crate::config::source::resolve_custom_resource_config;
use crate::customresource::{self, RegistryFactory};
use crate::error::StartupError;
use crate::lifecycle::shutdown::ExecutionContext;

/// Reason the process ends without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// `--version` was given; carries the text to print.
    Version(String),
    /// `--help` was given; carries the usage text to print.
    Help(String),
    /// The runner returned cleanly.
    Shutdown,
}

/// Version/help gate. Version is checked before help.
pub fn early_exit(opts: &Options) -> Option<Termination> {
    if opts.version {
        return Some(Termination::Version(Options::version_text()));
    }
    if opts.help {
        return Some(Termination::Help(Options::usage()));
    }
    None
}

/// Resolve the custom resource configuration and build its registry
/// factories, appended to `factories`.
pub fn build_factories(
    opts: &Options,
    factories: &mut Vec<Box<dyn RegistryFactory>>,
) -> Result<(), StartupError> {
    if let Some(decoder) = resolve_custom_resource_config(opts)? {
        let built = customresource::from_config(decoder)?;
        tracing::info!(
            registries = built.len(),
            "Loaded custom resource state metrics configuration"
        );
        factories.extend(built);
    }
    Ok(())
}

/// Run the full startup sequence and then `runner` until it returns.
pub async fn run<R: Runner>(opts: Options, runner: &R) -> Result<Termination, StartupError> {
    if let Some(termination) = early_exit(&opts) {
        return Ok(termination);
    }

    let mut factories: Vec<Box<dyn RegistryFactory>> = Vec::new();
    build_factories(&opts, &mut factories)?;

    let ctx = ExecutionContext::root();
    runner
        .run(ctx, &opts, factories)
        .await
        .map_err(StartupError::Run)?;

    Ok(Termination::Shutdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_wins_over_help() {
        let opts = Options {
            version: true,
            help: true,
            ..Options::default()
        };
        assert!(matches!(early_exit(&opts), Some(Termination::Version(_))));
    }

    #[test]
    fn test_help_gate() {
        let opts = Options {
            help: true,
            ..Options::default()
        };
        match early_exit(&opts) {
            Some(Termination::Help(text)) => assert!(text.contains("Usage")),
            other => panic!("unexpected gate result: {other:?}"),
        }
    }

    #[test]
    fn test_no_gate_by_default() {
        assert_eq!(early_exit(&Options::default()), None);
    }

    #[test]
    fn test_build_factories_without_config() {
        let mut factories = Vec::new();
        build_factories(&Options::default(), &mut factories).unwrap();
        assert!(factories.is_empty());
    }

    #[test]
    fn test_build_factories_appends() {
        let opts = Options {
            custom_resource_config:
                "spec:\n  resources:\n    - groupVersionKind: {version: v1, kind: Foo}\n".into(),
            ..Options::default()
        };
        let mut factories = Vec::new();
        build_factories(&opts, &mut factories).unwrap();
        build_factories(&opts, &mut factories).unwrap();

        let names: Vec<&str> = factories.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["foos", "foos"]);
    }
}
