// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running submitted command
//! strings, using `tokio::process::Command`, and reporting their outcomes to
//! the [`TaskRegistry`](crate::registry::TaskRegistry).
//!
//! - [`launcher`] defines the `CommandLauncher` trait and the production
//!   `ShellLauncher` that runs commands through the system shell. Tests can
//!   replace it with a fake implementation that doesn't spawn real
//!   processes.
//! - [`runner`] owns the per-submission lifecycle: begin, launch, retry
//!   loop, complete. Dispatch helpers spawn one Tokio task per submission.

pub mod launcher;
pub mod runner;

pub use launcher::{CommandLauncher, LaunchOutput, ShellLauncher};
pub use runner::{read_batch, run_command, spawn_batch, spawn_command};
