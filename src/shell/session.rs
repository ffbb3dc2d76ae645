// src/shell/session.rs

//! The interactive input loop.

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

use crate::errors::Result;
use crate::exec::launcher::{shell_command, CommandLauncher};
use crate::exec::runner::{spawn_batch, spawn_command};
use crate::registry::{StateKind, TaskRegistry};
use crate::shell::menu::{MenuChoice, MENU};
use crate::types::RetryPolicy;

/// Menu loop over the registry and launcher.
///
/// Dispatching never blocks on runner completion; every submission is handed
/// to its own Tokio task and the loop immediately re-prompts.
pub struct InteractiveShell {
    registry: Arc<TaskRegistry>,
    launcher: Arc<dyn CommandLauncher>,
    max_attempts: u32,
    resource_cmd: String,
}

impl InteractiveShell {
    pub fn new(
        registry: Arc<TaskRegistry>,
        launcher: Arc<dyn CommandLauncher>,
        max_attempts: u32,
        resource_cmd: String,
    ) -> Self {
        Self {
            registry,
            launcher,
            max_attempts,
            resource_cmd,
        }
    }

    /// Run the menu loop forever.
    ///
    /// Malformed selections re-prompt; EOF on stdin is warned about and
    /// ignored. Only an external kill ends the loop.
    pub async fn run(self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            println!("{MENU}");

            let Some(selection) = self.read_line(&mut lines).await else {
                continue;
            };

            let choice = match selection.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(message) => {
                    println!("{message}");
                    continue;
                }
            };

            println!();
            self.dispatch(choice, &mut lines).await;
            println!();
        }
    }

    async fn dispatch(&self, choice: MenuChoice, lines: &mut Lines<BufReader<Stdin>>) {
        match choice {
            MenuChoice::SubmitOne { retry } => {
                println!("Command to run:");
                let Some(command) = self.read_line(lines).await else {
                    return;
                };

                let command = command.trim().to_string();
                if command.is_empty() {
                    println!("Nothing submitted: empty command.");
                    return;
                }

                spawn_command(
                    command,
                    self.policy(retry),
                    Arc::clone(&self.registry),
                    Arc::clone(&self.launcher),
                );
            }

            MenuChoice::SubmitFile { retry } => {
                println!("Path to the command file (one command per line):");
                let Some(path) = self.read_line(lines).await else {
                    return;
                };

                let path = path.trim().to_string();
                match spawn_batch(&path, self.policy(retry), &self.registry, &self.launcher) {
                    Ok(handles) => {
                        println!("Submitted {} command(s) from {path}.", handles.len());
                    }
                    Err(err) => {
                        println!("Could not read {path}: {err}");
                    }
                }
            }

            MenuChoice::ShowRunning => self.render(StateKind::Running),
            MenuChoice::ShowSucceeded => self.render(StateKind::Succeeded),
            MenuChoice::ShowFailed => self.render(StateKind::Failed),

            MenuChoice::ShowResourceUsage => self.show_resource_usage().await,
        }
    }

    fn policy(&self, retry: bool) -> RetryPolicy {
        RetryPolicy {
            enabled: retry,
            max_attempts: self.max_attempts,
        }
    }

    fn render(&self, kind: StateKind) {
        let commands = self.registry.snapshot(kind);
        if commands.is_empty() {
            println!("(none)");
            return;
        }
        for command in commands {
            println!("{command}");
        }
    }

    /// Run the configured inspection tool with inherited stdio, so it draws
    /// straight to the terminal.
    async fn show_resource_usage(&self) {
        let result = shell_command(&self.resource_cmd)
            .stdin(Stdio::null())
            .status()
            .await;

        match result {
            Ok(status) if status.success() => {}
            Ok(status) => {
                println!("{} exited with {status}", self.resource_cmd);
            }
            Err(err) => {
                println!("Could not run {}: {err}", self.resource_cmd);
            }
        }
    }

    /// Read one line of input.
    ///
    /// EOF (Ctrl-D or a closed pipe) is converted into a warning and a short
    /// pause so a closed stdin cannot spin the loop.
    async fn read_line(&self, lines: &mut Lines<BufReader<Stdin>>) -> Option<String> {
        match lines.next_line().await {
            Ok(Some(line)) => Some(line),
            Ok(None) => {
                println!("Ctrl-D is disabled here; kill the process to exit.");
                warn!("stdin EOF ignored");
                tokio::time::sleep(Duration::from_millis(500)).await;
                None
            }
            Err(err) => {
                warn!(error = %err, "failed to read menu input");
                tokio::time::sleep(Duration::from_millis(500)).await;
                None
            }
        }
    }
}
