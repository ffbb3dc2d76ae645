// src/config/mod.rs

//! Configuration loading for `runherd`.
//!
//! Configuration is an optional TOML file (default `Runherd.toml` in the
//! working directory). A missing file is not an error; defaults apply.
//!
//! - [`model`] defines the typed config structures and their defaults.
//! - [`loader`] reads and validates a config file from disk.

pub mod loader;
pub mod model;

pub use loader::{default_config_path, load_or_default};
pub use model::ConfigFile;
