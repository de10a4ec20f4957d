//! End-to-end startup sequence tests against a recording runner.

use resource_state_metrics::error::ConfigParseError;
use resource_state_metrics::{run, Options, StartupError, Termination};

mod common;

use common::{config_file, RecordingRunner, FOO_BAR_CONFIG};

fn with_file(path: &str) -> Options {
    Options {
        custom_resource_config_file: path.to_string(),
        ..Options::default()
    }
}

#[tokio::test]
async fn test_version_skips_everything() {
    let runner = RecordingRunner::new();
    let opts = Options {
        version: true,
        help: true,
        custom_resource_config_file: "/nonexistent/crs.yaml".into(),
        ..Options::default()
    };

    let termination = run(opts, &runner).await.unwrap();
    match termination {
        Termination::Version(text) => assert!(text.contains(env!("CARGO_PKG_VERSION"))),
        other => panic!("expected version output, got {other:?}"),
    }
    assert_eq!(runner.runs(), 0);
}

#[tokio::test]
async fn test_help_skips_everything() {
    let runner = RecordingRunner::new();
    let opts = Options {
        help: true,
        custom_resource_config_file: "/nonexistent/crs.yaml".into(),
        ..Options::default()
    };

    let termination = run(opts, &runner).await.unwrap();
    assert!(matches!(termination, Termination::Help(_)));
    assert_eq!(runner.runs(), 0);
}

#[tokio::test]
async fn test_no_config_still_runs() {
    let runner = RecordingRunner::new();

    let termination = run(Options::default(), &runner).await.unwrap();
    assert_eq!(termination, Termination::Shutdown);

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].registries.is_empty());
    assert!(!calls[0].context_cancelled);
    assert_eq!(calls[0].options, Options::default());
}

#[tokio::test]
async fn test_inline_config_wins_over_missing_file() {
    let runner = RecordingRunner::new();
    let opts = Options {
        custom_resource_config: "kind: X".into(),
        custom_resource_config_file: "/nonexistent/crs.yaml".into(),
        ..Options::default()
    };

    run(opts, &runner).await.unwrap();
    assert_eq!(runner.runs(), 1);
    assert!(runner.calls()[0].registries.is_empty());
}

#[tokio::test]
async fn test_inline_config_builds_factories() {
    let runner = RecordingRunner::new();
    let opts = Options {
        custom_resource_config: FOO_BAR_CONFIG.into(),
        ..Options::default()
    };

    run(opts, &runner).await.unwrap();
    assert_eq!(runner.calls()[0].registries, vec!["foos", "bars"]);
}

#[tokio::test]
async fn test_missing_file_fails_before_run() {
    let runner = RecordingRunner::new();

    let err = run(with_file("/nonexistent/crs.yaml"), &runner)
        .await
        .unwrap_err();
    assert!(matches!(err, StartupError::ConfigFileOpen { .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(runner.runs(), 0);
}

#[tokio::test]
async fn test_invalid_file_content_fails_before_run() {
    let runner = RecordingRunner::new();
    let file = config_file("spec: [this is not valid");
    let path = file.path().to_string_lossy().into_owned();

    let err = run(with_file(&path), &runner).await.unwrap_err();
    assert!(matches!(
        err,
        StartupError::ConfigParse(ConfigParseError::Decode(_))
    ));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(runner.runs(), 0);
}

#[tokio::test]
async fn test_empty_file_is_empty_config() {
    let runner = RecordingRunner::new();
    let file = config_file("");
    let path = file.path().to_string_lossy().into_owned();

    run(with_file(&path), &runner).await.unwrap();
    assert_eq!(runner.runs(), 1);
    assert!(runner.calls()[0].registries.is_empty());
}

#[tokio::test]
async fn test_run_failure_is_fatal() {
    let runner = RecordingRunner::failing("listener closed");

    let err = run(Options::default(), &runner).await.unwrap_err();
    assert!(matches!(err, StartupError::Run(_)));
    assert!(err.to_string().contains("listener closed"));
    assert_eq!(err.stage(), "run");
    assert_eq!(err.exit_code(), 1);
    assert_eq!(runner.runs(), 1);
}

#[tokio::test]
async fn test_same_file_gives_same_factories() {
    let file = config_file(FOO_BAR_CONFIG);
    let path = file.path().to_string_lossy().into_owned();

    let first = RecordingRunner::new();
    run(with_file(&path), &first).await.unwrap();
    let second = RecordingRunner::new();
    run(with_file(&path), &second).await.unwrap();

    assert_eq!(first.calls()[0].registries, vec!["foos", "bars"]);
    assert_eq!(first.calls()[0].registries, second.calls()[0].registries);
}
