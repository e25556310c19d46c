//! Configuration file support for cputimer.
//!
//! Two configuration file locations are read:
//! - Global: `~/.cputimer/config.toml` - User-wide defaults
//! - Project: `.cputimer/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::settings::BuildType;

/// cputimer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build settings
    pub build: BuildConfig,

    /// Export locations
    pub export: ExportConfig,

    /// Local package registry
    pub registry: RegistryConfig,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Default build type (Debug, Release, RelWithDebInfo, MinSizeRel)
    pub build_type: Option<String>,
}

/// Default directories for `cputimer export`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Source tree containing `include/`
    pub source: Option<PathBuf>,

    /// Package output directory
    pub package: Option<PathBuf>,
}

/// Local registry used by `cputimer check`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Root of a `<name>/<version>` directory layout
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.build.build_type.is_some() {
            self.build.build_type = other.build.build_type;
        }

        if other.export.source.is_some() {
            self.export.source = other.export.source;
        }
        if other.export.package.is_some() {
            self.export.package = other.export.package;
        }

        if other.registry.path.is_some() {
            self.registry.path = other.registry.path;
        }
    }

    /// Parse the configured build type.
    ///
    /// An unparseable value is reported and ignored.
    pub fn build_type(&self) -> Option<BuildType> {
        let raw = self.build.build_type.as_ref()?;
        match raw.parse() {
            Ok(build_type) => Some(build_type),
            Err(e) => {
                tracing::warn!("ignoring build.build_type in config: {}", e);
                None
            }
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.cputimer/config.toml)
/// 2. Global config (~/.cputimer/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global cputimer config directory (~/.cputimer).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".cputimer"))
}
