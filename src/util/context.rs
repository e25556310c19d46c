//! Global context for cputimer operations.
//!
//! Provides centralized access to configuration, paths, and the package
//! descriptor in effect for the current directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::manifest::{find_manifest, load_manifest, ManifestError};
use crate::core::PackageDescriptor;
use crate::util::config::{global_config_dir, load_config, Config};

/// Name of the project-local state directory.
pub const PROJECT_DIR_NAME: &str = ".cputimer";

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Home directory for global cputimer data (~/.cputimer/)
    home: PathBuf,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::at(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        Self::at(cwd)
    }

    fn at(cwd: PathBuf) -> Self {
        let home = global_config_dir().unwrap_or_else(|| PathBuf::from(PROJECT_DIR_NAME));

        GlobalContext { cwd, home }
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the cputimer home directory (~/.cputimer/).
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Get the global configuration file path.
    pub fn config_path(&self) -> PathBuf {
        self.home.join("config.toml")
    }

    /// Get the project-local state directory.
    pub fn project_dir(&self) -> PathBuf {
        self.cwd.join(PROJECT_DIR_NAME)
    }

    /// Get the project configuration file path.
    pub fn project_config_path(&self) -> PathBuf {
        self.project_dir().join("config.toml")
    }

    /// Load merged global + project configuration.
    pub fn config(&self) -> Config {
        load_config(&self.config_path(), &self.project_config_path())
    }

    /// Resolve a possibly relative path against the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the package descriptor in effect.
    ///
    /// An explicit manifest path must exist. Otherwise Recipe.toml is looked
    /// up from the working directory upward, falling back to the built-in
    /// cputimer recipe when none is found.
    pub fn descriptor(&self, explicit: Option<&Path>) -> Result<PackageDescriptor, ManifestError> {
        if let Some(path) = explicit {
            return load_manifest(&self.resolve_path(path));
        }

        match find_manifest(&self.cwd) {
            Ok(path) => load_manifest(&path),
            Err(ManifestError::NotFound { .. }) => {
                tracing::debug!("no Recipe.toml found, using built-in recipe");
                Ok(PackageDescriptor::cputimer())
            }
            Err(e) => Err(e),
        }
    }
}
