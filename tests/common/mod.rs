use std::sync::Arc;

use runherd::audit::AuditLog;
use runherd::registry::TaskRegistry;
use runherd::types::TaskOutcome;
use tempfile::TempDir;

/// A registry whose audit log lives in a fresh temp directory.
///
/// Keep the returned `TempDir` alive for the duration of the test; dropping
/// it deletes the log file.
#[allow(dead_code)]
pub fn registry_with_log() -> (Arc<TaskRegistry>, TempDir) {
    let dir = tempfile::tempdir().expect("create tempdir");
    let audit = AuditLog::open(dir.path()).expect("open audit log");
    (Arc::new(TaskRegistry::new(audit)), dir)
}

/// Parse every line of the registry's audit log as JSON.
#[allow(dead_code)]
pub fn read_log_lines(registry: &TaskRegistry) -> Vec<serde_json::Value> {
    let contents =
        std::fs::read_to_string(registry.audit().path()).expect("read audit log file");

    contents
        .lines()
        .map(|line| serde_json::from_str(line).expect("parse audit log line"))
        .collect()
}

/// A terminal outcome with empty output, for driving the registry directly.
#[allow(dead_code)]
pub fn bare_outcome(command: &str, succeeded: bool) -> TaskOutcome {
    TaskOutcome {
        command: command.to_string(),
        succeeded,
        exit_code: if succeeded { 0 } else { 1 },
        stdout: Vec::new(),
        stderr: Vec::new(),
        retry_log: Vec::new(),
    }
}
