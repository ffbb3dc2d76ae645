// src/exec/launcher.rs

//! Pluggable process-launcher abstraction.
//!
//! Runners talk to a `CommandLauncher` instead of `tokio::process` directly.
//! This makes it easy to swap in a fake launcher in tests while keeping the
//! production implementation in [`ShellLauncher`].
//!
//! Command strings are handed to the shell verbatim: no parsing, no
//! sanitizing, no sandboxing. Shell metacharacters pass straight through.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::debug;

use crate::errors::Result;

/// What one launch of a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutput {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl LaunchOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait abstracting how a command string is executed.
///
/// Production code uses [`ShellLauncher`]; tests can provide their own
/// implementation that replays scripted results.
pub trait CommandLauncher: Send + Sync {
    /// Run `command` to completion and capture its exit code and output.
    ///
    /// An `Err` means the process could not even be launched; callers treat
    /// that the same as a failing exit code.
    fn launch(
        &self,
        command: String,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutput>> + Send + '_>>;
}

/// Real launcher used in production: runs the command through the system
/// shell and waits for it to exit.
#[derive(Debug, Default)]
pub struct ShellLauncher;

impl ShellLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl CommandLauncher for ShellLauncher {
    fn launch(
        &self,
        command: String,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutput>> + Send + '_>> {
        Box::pin(async move {
            debug!(command = %command, "launching shell process");

            let output = shell_command(&command)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .await
                .with_context(|| format!("launching process for command '{command}'"))?;

            Ok(LaunchOutput {
                // A process killed by a signal has no code; treat it as a
                // plain failure.
                exit_code: output.status.code().unwrap_or(-1),
                stdout: output.stdout,
                stderr: output.stderr,
            })
        })
    }
}

/// Build a shell command appropriate for the platform.
pub(crate) fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}
