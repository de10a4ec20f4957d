//! Command-line option set.
//!
//! # Responsibilities
//! - Define the flags the exporter accepts
//! - Parse argv into an immutable [`Options`] snapshot
//! - Render version and usage text for the early-exit paths
//!
//! # Design Decisions
//! - clap's built-in `--help`/`--version` handling is disabled; both are
//!   plain booleans so the startup sequence decides when to exit
//! - Empty strings mean "unset" for the custom-resource flags

use clap::{CommandFactory, Parser};

/// Program name used in version and usage output.
pub const PROGRAM: &str = "resource-state-metrics";

/// Parsed command-line options. Read-only after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = PROGRAM,
    about = "Exports metrics describing the state of custom resources",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Options {
    /// Print version information and quit.
    #[arg(long)]
    pub version: bool,

    /// Print usage and quit.
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Inline custom resource state metrics configuration (YAML).
    /// Takes precedence over --custom-resource-state-config-file.
    #[arg(long = "custom-resource-state-config", value_name = "TEXT", default_value = "")]
    pub custom_resource_config: String,

    /// Path to a custom resource state metrics configuration file (YAML).
    #[arg(long = "custom-resource-state-config-file", value_name = "PATH", default_value = "")]
    pub custom_resource_config_file: String,

    /// Host to expose metrics on.
    #[arg(long, default_value = "::")]
    pub host: String,

    /// Port to expose metrics on.
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

impl Options {
    /// Version banner printed for `--version`.
    pub fn version_text() -> String {
        format!(
            "{PROGRAM}, version {}\n  build: {}/{}",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH,
        )
    }

    /// Usage text printed for `--help`.
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }

    /// Address the metrics listener binds to.
    pub fn listen_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            version: false,
            help: false,
            custom_resource_config: String::new(),
            custom_resource_config_file: String::new(),
            host: "::".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parsed_empty_args() {
        let opts = Options::try_parse_from([PROGRAM]).unwrap();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn test_parse_custom_resource_flags() {
        let opts = Options::try_parse_from([
            PROGRAM,
            "--custom-resource-state-config",
            "kind: X",
            "--custom-resource-state-config-file",
            "/etc/crs.yaml",
        ])
        .unwrap();
        assert_eq!(opts.custom_resource_config, "kind: X");
        assert_eq!(opts.custom_resource_config_file, "/etc/crs.yaml");
    }

    #[test]
    fn test_help_and_version_are_plain_flags() {
        let opts = Options::try_parse_from([PROGRAM, "-h", "--version"]).unwrap();
        assert!(opts.help);
        assert!(opts.version);
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(Options::try_parse_from([PROGRAM, "--no-such-flag"]).is_err());
    }

    #[test]
    fn test_listen_address() {
        let mut opts = Options::default();
        assert_eq!(opts.listen_address(), "[::]:8080");

        opts.host = "127.0.0.1".into();
        opts.port = 9100;
        assert_eq!(opts.listen_address(), "127.0.0.1:9100");
    }

    #[test]
    fn test_version_and_usage_text() {
        assert!(Options::version_text().starts_with("resource-state-metrics, version "));
        let usage = Options::usage();
        assert!(usage.contains("--custom-resource-state-config-file"));
        assert!(usage.contains("--help"));
    }
}
