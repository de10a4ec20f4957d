//! resource-state-metrics
//!
//! # Architecture Overview
//!
//! ```text
//!   argv ──▶ Options ──▶ version/help gate ──▶ exit 0
//!                │
//!                ▼
//!        config source resolver ──▶ ConfigDecoder (inline text | file)
//!                │
//!                ▼
//!        factory builder ──▶ Vec<RegistryFactory>
//!                │
//!                ▼
//!        runner(root ExecutionContext, Options, factories)
//!                │
//!                ▼
//!        clean shutdown ──▶ exit 0        any error ──▶ log, exit 1
//! ```

use std::process::ExitCode;

use clap::Parser;

use resource_state_metrics::observability::logging;
use resource_state_metrics::{ExporterRunner, Options, StartupError, Termination};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let result = match Options::try_parse() {
        Ok(opts) => resource_state_metrics::run(opts, &ExporterRunner).await,
        Err(e) => Err(StartupError::OptionParse(e)),
    };

    match result {
        Ok(Termination::Version(text)) | Ok(Termination::Help(text)) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Ok(Termination::Shutdown) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(stage = err.stage(), error = %err, "{}", err.message());
            ExitCode::from(err.exit_code())
        }
    }
}
