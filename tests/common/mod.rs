//! Shared utilities for startup integration tests.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use resource_state_metrics::customresource::RegistryFactory;
use resource_state_metrics::error::BoxError;
use resource_state_metrics::lifecycle::ExecutionContext;
use resource_state_metrics::{Options, Runner};

/// What the runner was handed on one call.
#[derive(Debug, Clone)]
pub struct RunCall {
    pub options: Options,
    pub registries: Vec<String>,
    pub context_cancelled: bool,
}

/// Runner that records its calls and returns immediately.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<RunCall>>,
    runs: AtomicUsize,
    fail_with: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner whose run call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<RunCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Runner for RecordingRunner {
    async fn run(
        &self,
        ctx: ExecutionContext,
        opts: &Options,
        factories: Vec<Box<dyn RegistryFactory>>,
    ) -> Result<(), BoxError> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(RunCall {
            options: opts.clone(),
            registries: factories.iter().map(|f| f.name().to_string()).collect(),
            context_cancelled: ctx.is_cancelled(),
        });

        match &self.fail_with {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

/// Write `content` to a fresh temporary file.
pub fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const FOO_BAR_CONFIG: &str = r#"
kind: CustomResourceStateMetrics
spec:
  resources:
    - groupVersionKind: {group: myteam.io, version: v1, kind: Foo}
      metrics:
        - name: uptime
          help: Foo uptime
          each: {type: Gauge, gauge: {path: [status, uptime]}}
    - groupVersionKind: {group: myteam.io, version: v1, kind: Bar}
      metrics:
        - name: phase
          each:
            type: StateSet
            stateSet: {path: [status, phase], labelName: phase, list: [Ready, NotReady]}
"#;
