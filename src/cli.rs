// src/cli.rs

//! Command-line interface definition for `runherd`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Interactive concurrent command runner.
///
/// Reads shell commands from a numbered menu (one at a time or line-by-line
/// from a file), runs each one as an independent child process, and keeps a
/// durable audit log of every outcome.
#[derive(Debug, Parser)]
#[command(name = "runherd", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "Runherd.toml")]
    pub config: String,

    /// Log level (overrides the RUNHERD_LOG environment variable).
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Directory for audit log files (overrides `[log] dir` in the config).
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Log level accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
