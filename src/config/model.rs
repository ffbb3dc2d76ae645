// src/config/model.rs

//! Typed configuration model with serde defaults.

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::RetryPolicy;

/// Top-level configuration file.
///
/// Every section is optional; `ConfigFile::default()` is the configuration
/// used when no file exists on disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub retry: RetrySection,

    #[serde(default)]
    pub log: LogSection,

    #[serde(default)]
    pub shell: ShellSection,
}

/// `[retry]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetrySection {
    /// Bound on *total* launch attempts per submission when retry is on.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for RetrySection {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_max_attempts() -> u32 {
    RetryPolicy::DEFAULT_MAX_ATTEMPTS
}

/// `[log]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// Directory for audit log files, relative to the working directory.
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(".runherd_log")
}

/// `[shell]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellSection {
    /// Command run by the "show resource usage" menu option.
    #[serde(default = "default_resource_cmd")]
    pub resource_cmd: String,
}

impl Default for ShellSection {
    fn default() -> Self {
        Self {
            resource_cmd: default_resource_cmd(),
        }
    }
}

fn default_resource_cmd() -> String {
    "nvidia-smi".to_string()
}
