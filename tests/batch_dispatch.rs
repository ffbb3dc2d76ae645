// tests/batch_dispatch.rs

mod common;

use std::error::Error;
use std::io::Write;
use std::sync::Arc;

use runherd::exec::{read_batch, spawn_batch, CommandLauncher, ShellLauncher};
use runherd::registry::StateKind;
use runherd::types::RetryPolicy;
use runherd_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn batch_lines_are_trimmed_and_blank_lines_skipped() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "  exit 0  \n\nexit 1\n   \t\nexit 0\n")?;

    let commands = read_batch(file.path())?;
    assert_eq!(commands, vec!["exit 0", "exit 1", "exit 0"]);

    Ok(())
}

#[test]
fn missing_batch_file_is_an_error() {
    let err = read_batch("/no/such/file/anywhere").unwrap_err();
    assert!(err.to_string().contains("IO error"));
}

#[tokio::test]
async fn batch_submissions_run_concurrently_to_terminal_states() -> TestResult {
    init_tracing();
    let (registry, _dir) = common::registry_with_log();
    let launcher: Arc<dyn CommandLauncher> = Arc::new(ShellLauncher::new());

    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "exit 0\nexit 1\nexit 0\n")?;

    let handles = spawn_batch(
        file.path(),
        RetryPolicy::disabled(),
        &registry,
        &launcher,
    )?;
    assert_eq!(handles.len(), 3);

    for handle in handles {
        with_timeout(handle).await?;
    }

    assert!(registry.snapshot(StateKind::Running).is_empty());
    assert_eq!(registry.snapshot(StateKind::Succeeded).len(), 2);
    assert_eq!(registry.snapshot(StateKind::Failed), vec!["exit 1"]);

    let lines = common::read_log_lines(&registry);
    assert_eq!(lines.len(), 3);

    Ok(())
}
