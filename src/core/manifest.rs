//! Recipe.toml manifest parsing and schema.
//!
//! The manifest is the on-disk form of a [`PackageDescriptor`]. When no
//! manifest is present the built-in cputimer descriptor is used instead.

use std::path::{Path, PathBuf};

use semver::Version;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::core::dependency::{Dependency, DependencyParseError};
use crate::core::descriptor::PackageDescriptor;
use crate::core::settings::BUILD_TYPE;

/// Manifest file name.
pub const MANIFEST_NAME: &str = "Recipe.toml";

/// Errors from locating or reading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not find Recipe.toml in {} or any parent directory", dir.display())]
    NotFound { dir: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid `{field}`: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Dependency(#[from] DependencyParseError),
}

#[derive(Debug, Serialize, Deserialize)]
struct RawManifest {
    package: RawPackage,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPackage {
    name: String,
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default = "default_settings")]
    settings: Vec<String>,
    /// `name/version` references, in declaration order.
    #[serde(default)]
    requires: Vec<String>,
}

fn default_settings() -> Vec<String> {
    vec![BUILD_TYPE.to_string()]
}

/// Parse a manifest from its TOML text.
pub fn parse_manifest(contents: &str, path: &Path) -> Result<PackageDescriptor, ManifestError> {
    let raw: RawManifest = toml::from_str(contents).map_err(|e| ManifestError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let pkg = raw.package;

    let version = Version::parse(pkg.version.trim()).map_err(|e| ManifestError::InvalidField {
        field: "package.version",
        message: format!("`{}` is not a semantic version: {}", pkg.version, e),
    })?;

    for axis in &pkg.settings {
        if axis != BUILD_TYPE {
            return Err(ManifestError::InvalidField {
                field: "package.settings",
                message: format!("unsupported setting `{}`", axis),
            });
        }
    }

    let mut desc = PackageDescriptor::new(pkg.name, version)?.with_settings(pkg.settings);

    if let Some(license) = pkg.license {
        desc = desc.with_license(license);
    }
    if let Some(author) = pkg.author {
        desc = desc.with_author(author);
    }
    if let Some(homepage) = pkg.homepage {
        Url::parse(&homepage).map_err(|e| ManifestError::InvalidField {
            field: "package.homepage",
            message: format!("`{}` is not a valid URL: {}", homepage, e),
        })?;
        desc = desc.with_homepage(homepage);
    }
    if let Some(description) = pkg.description {
        desc = desc.with_description(description);
    }

    for reference in &pkg.requires {
        let dep: Dependency = reference.parse()?;
        if desc.declare_dependencies().iter().any(|d| d.name() == dep.name()) {
            return Err(ManifestError::InvalidField {
                field: "package.requires",
                message: format!("`{}` is required more than once", dep.name()),
            });
        }
        desc = desc.with_dependency(dep);
    }

    Ok(desc)
}

/// Render a descriptor as Recipe.toml text.
pub fn to_manifest_string(desc: &PackageDescriptor) -> Result<String, toml::ser::Error> {
    fn non_empty(s: &str) -> Option<String> {
        (!s.is_empty()).then(|| s.to_string())
    }

    let raw = RawManifest {
        package: RawPackage {
            name: desc.name().to_string(),
            version: desc.version().to_string(),
            license: non_empty(desc.license()),
            author: non_empty(desc.author()),
            homepage: non_empty(desc.homepage()),
            description: non_empty(desc.description()),
            settings: desc.settings().to_vec(),
            requires: desc
                .declare_dependencies()
                .iter()
                .map(|d| d.to_string())
                .collect(),
        },
    };

    toml::to_string_pretty(&raw)
}

/// Load a descriptor from a manifest file.
pub fn load_manifest(path: &Path) -> Result<PackageDescriptor, ManifestError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let desc = parse_manifest(&contents, path)?;
    tracing::debug!("loaded {} from {}", desc.reference(), path.display());
    Ok(desc)
}

/// Find the manifest in `dir` or any parent directory.
pub fn find_manifest(dir: &Path) -> Result<PathBuf, ManifestError> {
    let mut current = dir.to_path_buf();
    loop {
        let candidate = current.join(MANIFEST_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            return Err(ManifestError::NotFound {
                dir: dir.to_path_buf(),
            });
        }
    }
}
