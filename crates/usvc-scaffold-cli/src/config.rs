//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file: `--config <FILE>` (must exist) or the platform default
//!    location (optional)
//! 3. Built-in defaults (always present)
//!
//! ```toml
//! [defaults]
//! provider = "copilot"
//! lib_source = "usvc-lib @ git+https://example.com/usvc-lib.git"
//! init_git = false
//! variant = "worker"
//!
//! [output]
//! no_color = true
//! ```

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use usvc_scaffold_core::{
    DEFAULT_DEPENDENCY_SOURCE,
    domain::{Provider, Variant},
};

use crate::error::CliResult;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub provider: Provider,
    pub lib_source: String,
    pub init_git: bool,
    pub variant: Variant,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            lib_source: DEFAULT_DEPENDENCY_SOURCE.to_string(),
            init_git: true,
            variant: Variant::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering the config file over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`. When it is
    /// `None` the default location is used, and a missing file is fine.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::from_file(path, true),
            None => Self::from_file(&Self::config_path(), false),
        }
    }

    fn from_file(path: &Path, required: bool) -> CliResult<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.create-microservice.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "create-microservice")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".create-microservice.toml"))
    }
}
