//! Dependency references - WHAT a package requires.
//!
//! A dependency is a pinned `(name, version)` pair, written as a
//! `name/version` reference (e.g. `catch2/3.3.1`).

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A pinned requirement on another package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    name: String,
    version: Version,
}

/// Error parsing a `name/version` reference.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DependencyParseError {
    #[error("dependency reference `{0}` is missing a `/version` suffix")]
    MissingVersion(String),

    #[error("dependency reference `{0}` has an empty package name")]
    EmptyName(String),

    #[error("invalid version `{version}` for dependency `{name}`: {message}")]
    InvalidVersion {
        name: String,
        version: String,
        message: String,
    },
}

impl Dependency {
    /// Create a new dependency.
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Dependency {
            name: name.into(),
            version,
        }
    }

    /// Create a dependency from a name and an unparsed version string.
    pub fn parse_parts(name: &str, version: &str) -> Result<Self, DependencyParseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DependencyParseError::EmptyName(format!("{}/{}", name, version)));
        }

        let parsed = Version::parse(version.trim()).map_err(|e| {
            DependencyParseError::InvalidVersion {
                name: name.to_string(),
                version: version.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Dependency::new(name, parsed))
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the pinned version.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Get the `(name, version)` pair as strings.
    pub fn to_pair(&self) -> (String, String) {
        (self.name.clone(), self.version.to_string())
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

impl FromStr for Dependency {
    type Err = DependencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, version) = s
            .split_once('/')
            .ok_or_else(|| DependencyParseError::MissingVersion(s.to_string()))?;

        Dependency::parse_parts(name, version)
    }
}
