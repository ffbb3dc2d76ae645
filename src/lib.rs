// src/lib.rs

pub mod audit;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod registry;
pub mod shell;
pub mod types;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::audit::AuditLog;
use crate::cli::CliArgs;
use crate::config::loader::load_or_default;
use crate::exec::{CommandLauncher, ShellLauncher};
use crate::registry::TaskRegistry;
use crate::shell::InteractiveShell;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - audit log creation (one file per process run)
/// - the shared task registry
/// - the production shell launcher
/// - Ctrl-C handling
/// - the interactive menu loop
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(&args.config)?;

    let log_dir = args.log_dir.unwrap_or_else(|| cfg.log.dir.clone());
    let audit = AuditLog::open(&log_dir)?;
    info!(path = %audit.path().display(), "audit log opened");

    let registry = Arc::new(TaskRegistry::new(audit));
    let launcher: Arc<dyn CommandLauncher> = Arc::new(ShellLauncher::new());

    // Ctrl-C → warn and keep looping. The menu is meant to be un-exitable
    // except by a harder kill signal.
    tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            println!("\nCtrl-C is disabled here; kill the process to exit.");
            warn!("interrupt signal ignored");
        }
    });

    let shell = InteractiveShell::new(
        registry,
        launcher,
        cfg.retry.max_attempts,
        cfg.shell.resource_cmd.clone(),
    );

    shell.run().await?;
    Ok(())
}
