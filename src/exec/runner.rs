// src/exec/runner.rs

//! Per-submission command runner and dispatch helpers.

use std::path::Path;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::exec::launcher::{CommandLauncher, LaunchOutput};
use crate::registry::TaskRegistry;
use crate::types::{RetryAttempt, RetryPolicy, TaskOutcome};

/// Run one command submission to completion, retries included, and report
/// exactly one outcome to the registry.
///
/// The command is launched once unconditionally. While retry is enabled, the
/// exit code is non-zero, and the total attempt count is below
/// `policy.max_attempts`, the failed attempt's output is recorded into the
/// retry log and the command is launched again. When the loop stops, the
/// *last* attempt's output becomes the outcome's primary stdout/stderr.
///
/// Nothing here returns an error: a launch failure counts as a failed
/// attempt with exit code -1 and goes down the same retry path.
pub async fn run_command(
    command: String,
    policy: RetryPolicy,
    registry: &TaskRegistry,
    launcher: &dyn CommandLauncher,
) {
    registry.begin(&command);
    info!(command = %command, retry = policy.enabled, "command submitted");

    let mut attempts: u32 = 1;
    let mut result = launch_once(launcher, &command).await;
    let mut retry_log: Vec<RetryAttempt> = Vec::new();

    while policy.enabled && !result.success() && attempts < policy.max_attempts {
        debug!(
            command = %command,
            exit_code = result.exit_code,
            attempt = attempts,
            "attempt failed; retrying"
        );

        retry_log.push(RetryAttempt {
            stdout: std::mem::take(&mut result.stdout),
            stderr: std::mem::take(&mut result.stderr),
        });

        result = launch_once(launcher, &command).await;
        attempts += 1;
    }

    if result.success() {
        info!(command = %command, attempts, "command succeeded");
    } else {
        warn!(
            command = %command,
            exit_code = result.exit_code,
            attempts,
            "command failed"
        );
    }

    let outcome = TaskOutcome {
        succeeded: result.success(),
        exit_code: result.exit_code,
        stdout: result.stdout,
        stderr: result.stderr,
        retry_log,
        command,
    };

    registry.complete(outcome);
}

/// Launch the command once, folding launcher errors into a failed attempt.
async fn launch_once(launcher: &dyn CommandLauncher, command: &str) -> LaunchOutput {
    match launcher.launch(command.to_string()).await {
        Ok(output) => output,
        Err(err) => {
            warn!(
                command,
                error = %err,
                "could not launch process; treating as failed attempt"
            );
            LaunchOutput {
                exit_code: -1,
                stdout: Vec::new(),
                stderr: err.to_string().into_bytes(),
            }
        }
    }
}

/// Dispatch one submission on its own Tokio task.
///
/// There is no pool and no admission control: every submission gets a task
/// immediately and runs until its child process chain finishes.
pub fn spawn_command(
    command: String,
    policy: RetryPolicy,
    registry: Arc<TaskRegistry>,
    launcher: Arc<dyn CommandLauncher>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        run_command(command, policy, &registry, launcher.as_ref()).await;
    })
}

/// Read a batch file: one command per line, trimmed, empty lines skipped.
pub fn read_batch(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Dispatch every command in a batch file as an independent concurrent
/// runner, returning the join handles in file order.
pub fn spawn_batch(
    path: impl AsRef<Path>,
    policy: RetryPolicy,
    registry: &Arc<TaskRegistry>,
    launcher: &Arc<dyn CommandLauncher>,
) -> Result<Vec<JoinHandle<()>>> {
    let commands = read_batch(path)?;

    Ok(commands
        .into_iter()
        .map(|command| {
            spawn_command(
                command,
                policy,
                Arc::clone(registry),
                Arc::clone(launcher),
            )
        })
        .collect())
}
