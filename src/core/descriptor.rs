//! Package descriptor - WHAT this package is and what it needs.
//!
//! A descriptor is constructed once per package invocation, read by the
//! orchestrator and discarded. Its identity fields are private so nothing
//! can change them after construction.

use semver::Version;
use serde::Serialize;

use crate::core::dependency::Dependency;
use crate::core::manifest::ManifestError;
use crate::core::settings::{BuildSettings, BUILD_TYPE};
use crate::util::hash::Fingerprint;

/// Glob describing the sources shipped with the recipe.
pub const EXPORT_SOURCES: &str = "include/*";

/// Directory holding the headers, in both the source and the package tree.
pub const INCLUDE_DIR: &str = "include";

/// File-name pattern of the headers that are packaged.
pub const HEADER_PATTERN: &str = "*.h";

/// Static declaration of a distributable header-only package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    name: String,
    version: Version,
    license: String,
    author: String,
    homepage: String,
    description: String,
    dependencies: Vec<Dependency>,
    exported_source_pattern: String,
    settings: Vec<String>,
}

impl PackageDescriptor {
    /// Create a descriptor with the given identity and no dependencies.
    ///
    /// Fails if `name` is empty.
    pub fn new(name: impl Into<String>, version: Version) -> Result<Self, ManifestError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ManifestError::InvalidField {
                field: "package.name",
                message: "package name must not be empty".to_string(),
            });
        }

        Ok(PackageDescriptor {
            name,
            version,
            license: String::new(),
            author: String::new(),
            homepage: String::new(),
            description: String::new(),
            dependencies: Vec::new(),
            exported_source_pattern: EXPORT_SOURCES.to_string(),
            settings: vec![BUILD_TYPE.to_string()],
        })
    }

    /// The recipe for the cputimer headers.
    pub fn cputimer() -> Self {
        PackageDescriptor {
            name: "cputimer".to_string(),
            version: Version::new(1, 0, 0),
            license: "GPL v.3".to_string(),
            author: "Anders Schau Knatten anders@knatten.org".to_string(),
            homepage: "https://github.com/knatten/CpuTimer/".to_string(),
            description: "Timers for real/process/thread time".to_string(),
            dependencies: vec![
                Dependency::new("catch2", Version::new(3, 3, 1)),
                Dependency::new("benchmark", Version::new(1, 7, 1)),
                Dependency::new("fmt", Version::new(9, 1, 0)),
            ],
            exported_source_pattern: EXPORT_SOURCES.to_string(),
            settings: vec![BUILD_TYPE.to_string()],
        }
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = homepage.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a dependency; declaration order is kept.
    pub fn with_dependency(mut self, dep: Dependency) -> Self {
        self.dependencies.push(dep);
        self
    }

    /// Replace the declared settings axes.
    pub fn with_settings(mut self, settings: Vec<String>) -> Self {
        self.settings = settings;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn exported_source_pattern(&self) -> &str {
        &self.exported_source_pattern
    }

    pub fn settings(&self) -> &[String] {
        &self.settings
    }

    /// Get a display string like "cputimer/1.0.0".
    pub fn reference(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }

    /// The dependencies the package requires, in declaration order.
    ///
    /// Version availability is left to the external resolver.
    pub fn declare_dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Compute the binary identity of this package for the given settings.
    ///
    /// Only the settings axes the descriptor declares take part, so a
    /// descriptor without `build_type` has the same id for every build type.
    pub fn package_id(&self, settings: &BuildSettings) -> String {
        let mut fp = Fingerprint::new();
        fp.update_str(&self.name)
            .update_str(&self.version.to_string());

        for dep in &self.dependencies {
            fp.update_str(&dep.to_string());
        }

        for axis in &self.settings {
            fp.update_str(axis).update_opt(settings.value(axis).as_deref());
        }

        fp.finish()
    }
}
