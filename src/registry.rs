// src/registry.rs

//! Shared, lock-protected bookkeeping of in-flight and terminal command
//! state.
//!
//! The registry owns three collections:
//!
//! - `running`: a counting map of in-flight command strings. Identical
//!   commands submitted concurrently each hold their own membership, so one
//!   completion can never erase another in-flight duplicate.
//! - `succeeded` / `failed`: append-ordered command lists. A command string
//!   may appear in both over the process lifetime if resubmitted.
//!
//! All three live behind a single mutex. `complete` appends the audit record
//! *inside* that critical section, so no reader can observe a command that
//! has left `running` without its log line existing, and the lock order is
//! always registry → audit.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{debug, error};

use crate::audit::AuditLog;
use crate::types::TaskOutcome;

/// Which registry collection to snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Running,
    Succeeded,
    Failed,
}

#[derive(Debug, Default)]
struct RegistryState {
    running: HashMap<String, usize>,
    succeeded: Vec<String>,
    failed: Vec<String>,
}

/// Thread-safe registry of running / succeeded / failed commands.
///
/// Constructed once at startup and shared (via `Arc`) with every runner and
/// the interactive shell; there is no ambient global state.
#[derive(Debug)]
pub struct TaskRegistry {
    state: Mutex<RegistryState>,
    audit: AuditLog,
}

impl TaskRegistry {
    pub fn new(audit: AuditLog) -> Self {
        Self {
            state: Mutex::new(RegistryState::default()),
            audit,
        }
    }

    /// The audit log this registry records outcomes to.
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Record that a runner for `command` has been dispatched.
    ///
    /// Safe to call concurrently for identical strings; each call adds one
    /// membership.
    pub fn begin(&self, command: &str) {
        let mut state = self.state.lock().expect("registry lock poisoned");
        *state.running.entry(command.to_string()).or_insert(0) += 1;
        debug!(command, "command entered running set");
    }

    /// Record the terminal outcome of one submission.
    ///
    /// As one atomic step relative to other `begin`/`complete` calls: the
    /// audit record is appended, one `running` membership is released, and
    /// the command is pushed onto its terminal collection.
    ///
    /// # Panics
    ///
    /// Panics if `outcome.command` holds no `running` membership; that means
    /// a runner completed a command it never began, which is state
    /// corruption, not a recoverable condition.
    pub fn complete(&self, outcome: TaskOutcome) {
        let mut state = self.state.lock().expect("registry lock poisoned");

        // Log first: a completed command must never be observable outside
        // `running` without its audit line on disk.
        if let Err(err) = self.audit.append(&outcome) {
            error!(
                command = %outcome.command,
                error = %err,
                "failed to append audit record"
            );
        }

        match state.running.entry(outcome.command.clone()) {
            Entry::Occupied(mut entry) => {
                if *entry.get() > 1 {
                    *entry.get_mut() -= 1;
                } else {
                    entry.remove();
                }
            }
            Entry::Vacant(_) => panic!(
                "completed command {:?} has no running membership; \
                 runner/registry state is corrupted",
                outcome.command
            ),
        }

        debug!(
            command = %outcome.command,
            succeeded = outcome.succeeded,
            exit_code = outcome.exit_code,
            retries = outcome.retry_log.len(),
            "command left running set"
        );

        if outcome.succeeded {
            state.succeeded.push(outcome.command);
        } else {
            state.failed.push(outcome.command);
        }
    }

    /// Immutable copy of one collection for display.
    ///
    /// The `running` snapshot is flattened (duplicates repeated) and sorted;
    /// `succeeded`/`failed` keep their append order. Writers are blocked no
    /// longer than the copy takes.
    pub fn snapshot(&self, kind: StateKind) -> Vec<String> {
        let state = self.state.lock().expect("registry lock poisoned");
        match kind {
            StateKind::Running => {
                let mut commands: Vec<String> = state
                    .running
                    .iter()
                    .flat_map(|(command, count)| {
                        std::iter::repeat_n(command.clone(), *count)
                    })
                    .collect();
                commands.sort();
                commands
            }
            StateKind::Succeeded => state.succeeded.clone(),
            StateKind::Failed => state.failed.clone(),
        }
    }
}
