//! Test utilities for cputimer unit tests.
//!
//! Provides a builder for on-disk source trees so export tests can describe
//! the layout they need in one expression.
//!
//! # Example
//!
//! ```rust,ignore
//! use cputimer::test_support::SourceTree;
//!
//! let tree = SourceTree::new()
//!     .file("include/a.h", "alpha")
//!     .file("include/c.hpp", "skipped")
//!     .build();
//! assert!(tree.root().join("include/a.h").exists());
//! ```

pub mod fixtures;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub use fixtures::*;

/// Declarative description of a source tree.
#[derive(Debug, Clone, Default)]
pub struct SourceTree {
    files: Vec<(PathBuf, Vec<u8>)>,
    dirs: Vec<PathBuf>,
}

impl SourceTree {
    /// Create an empty tree description.
    pub fn new() -> Self {
        SourceTree::default()
    }

    /// Add a file with the given content.
    pub fn file(mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> Self {
        self.files.push((path.as_ref().to_path_buf(), content.into()));
        self
    }

    /// Add an empty directory.
    pub fn dir(mut self, path: impl AsRef<Path>) -> Self {
        self.dirs.push(path.as_ref().to_path_buf());
        self
    }

    /// Materialize the tree in a fresh temporary directory.
    pub fn build(self) -> BuiltTree {
        let tmp = TempDir::new().unwrap();

        for dir in &self.dirs {
            std::fs::create_dir_all(tmp.path().join(dir)).unwrap();
        }

        for (path, content) in &self.files {
            let full = tmp.path().join(path);
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&full, content).unwrap();
        }

        BuiltTree { tmp }
    }
}

/// A source tree on disk; removed when dropped.
#[derive(Debug)]
pub struct BuiltTree {
    tmp: TempDir,
}

impl BuiltTree {
    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.tmp.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tree() {
        let tree = SourceTree::new()
            .file("include/a.h", "alpha")
            .dir("include/empty")
            .build();

        assert_eq!(
            std::fs::read_to_string(tree.root().join("include/a.h")).unwrap(),
            "alpha"
        );
        assert!(tree.root().join("include/empty").is_dir());
    }
}
