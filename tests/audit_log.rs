// tests/audit_log.rs

mod common;

use std::error::Error;

use runherd::exec::{run_command, ShellLauncher};
use runherd::registry::StateKind;
use runherd::types::RetryPolicy;
use runherd_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn successful_command_writes_one_success_record() -> TestResult {
    init_tracing();
    let (registry, _dir) = common::registry_with_log();
    let launcher = ShellLauncher::new();

    run_command(
        "exit 0".to_string(),
        RetryPolicy::disabled(),
        &registry,
        &launcher,
    )
    .await;

    assert_eq!(registry.snapshot(StateKind::Succeeded), vec!["exit 0"]);
    assert!(registry.snapshot(StateKind::Running).is_empty());

    let lines = common::read_log_lines(&registry);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["status"], "success");
    assert_eq!(lines[0]["command"], "exit 0");
    assert!(lines[0].get("stdout").is_some());
    assert!(lines[0].get("stderr").is_some());
    assert!(lines[0].get("stdout_run_0").is_none());

    Ok(())
}

#[tokio::test]
async fn captured_output_lands_in_the_record() -> TestResult {
    init_tracing();
    let (registry, _dir) = common::registry_with_log();
    let launcher = ShellLauncher::new();

    run_command(
        "echo hello; echo oops >&2".to_string(),
        RetryPolicy::disabled(),
        &registry,
        &launcher,
    )
    .await;

    let lines = common::read_log_lines(&registry);
    assert_eq!(lines[0]["status"], "success");
    assert_eq!(lines[0]["stdout"], "hello\n");
    assert_eq!(lines[0]["stderr"], "oops\n");

    Ok(())
}

#[tokio::test]
async fn retried_failure_records_every_prior_attempt() -> TestResult {
    init_tracing();
    let (registry, _dir) = common::registry_with_log();
    let launcher = ShellLauncher::new();

    run_command(
        "echo attempt; exit 1".to_string(),
        RetryPolicy::retrying(3),
        &registry,
        &launcher,
    )
    .await;

    assert_eq!(
        registry.snapshot(StateKind::Failed),
        vec!["echo attempt; exit 1"]
    );

    let lines = common::read_log_lines(&registry);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["status"], "failed");
    // Final attempt in the primary fields, two earlier ones indexed.
    assert_eq!(lines[0]["stdout"], "attempt\n");
    assert_eq!(lines[0]["stdout_run_0"], "attempt\n");
    assert_eq!(lines[0]["stdout_run_1"], "attempt\n");
    assert!(lines[0].get("stdout_run_2").is_none());

    Ok(())
}

#[tokio::test]
async fn one_record_per_completed_command() -> TestResult {
    init_tracing();
    let (registry, _dir) = common::registry_with_log();
    let launcher = ShellLauncher::new();

    for command in ["exit 0", "exit 3", "true"] {
        run_command(
            command.to_string(),
            RetryPolicy::disabled(),
            &registry,
            &launcher,
        )
        .await;
    }

    let lines = common::read_log_lines(&registry);
    assert_eq!(lines.len(), 3);

    // Sequential completions land in completion order.
    let commands: Vec<_> = lines
        .iter()
        .map(|line| line["command"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(commands, vec!["exit 0", "exit 3", "true"]);

    let statuses: Vec<_> = lines
        .iter()
        .map(|line| line["status"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(statuses, vec!["success", "failed", "success"]);

    Ok(())
}
