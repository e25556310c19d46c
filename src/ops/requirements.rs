//! Requirement checks against an external resolver.
//!
//! Resolution itself belongs to the orchestrator. This module only hands
//! each declared dependency to a [`DependencyResolver`] and surfaces the
//! first failure unchanged.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::dependency::Dependency;
use crate::core::descriptor::PackageDescriptor;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error raised by a resolver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequirementError {
    #[error("dependency `{name}/{version}` could not be resolved")]
    DependencyUnresolvable { name: String, version: String },
}

impl RequirementError {
    /// Build the unresolvable error for a dependency.
    pub fn unresolvable(dep: &Dependency) -> Self {
        RequirementError::DependencyUnresolvable {
            name: dep.name().to_string(),
            version: dep.version().to_string(),
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RequirementError::DependencyUnresolvable { name, version } => Diagnostic::error(
                format!("could not resolve `{}/{}`", name, version),
            )
            .with_context("the package registry has no installable package for this reference")
            .with_suggestion(suggestions::DEPENDENCY_UNRESOLVABLE),
        }
    }
}

/// A dependency together with where the resolver found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub dependency: Dependency,
    pub location: PathBuf,
}

/// Something that can locate installable packages.
pub trait DependencyResolver {
    fn resolve(&self, dep: &Dependency) -> Result<ResolvedDependency, RequirementError>;
}

/// Resolver backed by a local `<root>/<name>/<version>` directory layout.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
}

impl DirectoryResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryResolver { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DependencyResolver for DirectoryResolver {
    fn resolve(&self, dep: &Dependency) -> Result<ResolvedDependency, RequirementError> {
        let location = self
            .root
            .join(dep.name())
            .join(dep.version().to_string());

        if location.is_dir() {
            Ok(ResolvedDependency {
                dependency: dep.clone(),
                location,
            })
        } else {
            tracing::debug!("{} not found at {}", dep, location.display());
            Err(RequirementError::unresolvable(dep))
        }
    }
}

/// Resolve every declared dependency, in declaration order.
///
/// Stops at the first dependency the resolver cannot satisfy.
pub fn check_requirements<R: DependencyResolver + ?Sized>(
    desc: &PackageDescriptor,
    resolver: &R,
) -> Result<Vec<ResolvedDependency>, RequirementError> {
    desc.declare_dependencies()
        .iter()
        .map(|dep| {
            let resolved = resolver.resolve(dep)?;
            tracing::debug!("resolved {} -> {}", dep, resolved.location.display());
            Ok(resolved)
        })
        .collect()
}
