// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::errors::{Result, RunherdError};

/// Load a configuration file from a given path.
///
/// This performs TOML deserialization and basic sanity validation. Prefer
/// [`load_or_default`] from application code, which tolerates a missing file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: ConfigFile = toml::from_str(&contents)?;
    validate(&config)?;

    Ok(config)
}

/// Load the configuration if the file exists, otherwise fall back to
/// defaults.
///
/// The config file is optional by design: a bare working directory is a
/// valid place to run `runherd`.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(ConfigFile::default());
    }

    load_from_path(path)
}

/// Helper to resolve the default config path.
///
/// Currently this just returns `Runherd.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `RUNHERD_CONFIG`).
/// - Look for multiple default locations.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Runherd.toml")
}

fn validate(config: &ConfigFile) -> Result<()> {
    if config.retry.max_attempts == 0 {
        return Err(RunherdError::ConfigError(
            "retry.max_attempts must be at least 1".to_string(),
        ));
    }
    Ok(())
}
