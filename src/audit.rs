// src/audit.rs

//! Append-only audit log of terminal command outcomes.
//!
//! One log file per process run, created at startup under a fixed directory
//! and named from the process-start timestamp plus the pid. Records are
//! newline-delimited JSON objects:
//!
//! ```json
//! {"status":"failed","command":"exit 1","stdout":"","stderr":"",
//!  "stdout_run_0":"","stderr_run_0":""}
//! ```
//!
//! The `stdout_run_<i>`/`stderr_run_<i>` keys carry the output of each
//! failed attempt that preceded the final one. Readers must tolerate keys
//! they do not know.
//!
//! The file is never truncated, rotated, or deleted by this component;
//! unbounded growth over one run is accepted.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::Result;
use crate::types::TaskOutcome;

/// Durable JSON-lines log of every [`TaskOutcome`].
///
/// Appends are serialized through an internal lock so records from
/// concurrent completions never interleave.
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl AuditLog {
    /// Open a fresh log file for this process run, creating `dir` if absent.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let name = format!(
            "{}-{}.jsonl",
            Local::now().format("%Y.%m.%d-%H.%M.%S"),
            std::process::id()
        );
        let path = dir.join(name);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Path of the log file backing this run.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one newline-terminated record for `outcome`.
    pub fn append(&self, outcome: &TaskOutcome) -> Result<()> {
        let mut line = serde_json::to_string(&AuditRecord(outcome))?;
        line.push('\n');

        let mut file = self.file.lock().expect("audit log lock poisoned");
        file.write_all(line.as_bytes())?;

        Ok(())
    }
}

/// Serialization adapter producing the on-disk record schema.
///
/// Key order is fixed by the serialize calls: `status`, `command`, `stdout`,
/// `stderr`, then one `stdout_run_<i>`/`stderr_run_<i>` pair per recorded
/// retry. Captured output is decoded as lossy UTF-8 so every outcome is
/// representable as JSON.
struct AuditRecord<'a>(&'a TaskOutcome);

impl Serialize for AuditRecord<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let outcome = self.0;
        let mut map = serializer.serialize_map(Some(4 + 2 * outcome.retry_log.len()))?;

        map.serialize_entry("status", outcome.status_str())?;
        map.serialize_entry("command", &outcome.command)?;
        map.serialize_entry("stdout", &String::from_utf8_lossy(&outcome.stdout))?;
        map.serialize_entry("stderr", &String::from_utf8_lossy(&outcome.stderr))?;

        for (i, attempt) in outcome.retry_log.iter().enumerate() {
            map.serialize_entry(
                &format!("stdout_run_{i}"),
                &String::from_utf8_lossy(&attempt.stdout),
            )?;
            map.serialize_entry(
                &format!("stderr_run_{i}"),
                &String::from_utf8_lossy(&attempt.stderr),
            )?;
        }

        map.end()
    }
}
