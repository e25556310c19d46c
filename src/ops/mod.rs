//! High-level operations.
//!
//! This module contains the actions the recipe performs for an orchestrator.

pub mod export;
pub mod requirements;

pub use export::{export_package, ExportError, ExportReport, ExportedFile};
pub use requirements::{
    check_requirements, DependencyResolver, DirectoryResolver, RequirementError,
    ResolvedDependency,
};
