//! Core data structures for the package recipe.
//!
//! This module contains the types the recipe is made of:
//! - Dependency references (`name/version`)
//! - Build settings the package identity depends on
//! - The package descriptor and its `Recipe.toml` manifest form

pub mod dependency;
pub mod descriptor;
pub mod manifest;
pub mod settings;

pub use dependency::Dependency;
pub use descriptor::PackageDescriptor;
pub use manifest::{find_manifest, load_manifest, to_manifest_string, ManifestError, MANIFEST_NAME};
pub use settings::{BuildSettings, BuildType};
