//! Header export - stage `include/**/*.h` into a package tree.
//!
//! The export enumerates every file under `<source>/include` whose file name
//! matches `*.h` and copies it to the same relative path under
//! `<package>/include`. Nothing else is written. A failure aborts the export
//! and leaves already copied files in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use serde::Serialize;
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::descriptor::{HEADER_PATTERN, INCLUDE_DIR};
use crate::util::diagnostic::{suggestions, Diagnostic};
use crate::util::fs::relative_path;
use crate::util::hash::sha256_file;

/// Error during header export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("header directory not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("permission denied writing to {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid header pattern")]
    Pattern(#[from] glob::PatternError),
}

impl ExportError {
    /// Classify a write-side I/O failure.
    fn write(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            ExportError::PermissionDenied {
                path: path.to_path_buf(),
                source,
            }
        } else {
            ExportError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    fn read(path: &Path, source: io::Error) -> Self {
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ExportError::SourceNotFound { path } => {
                Diagnostic::error("no headers to export")
                    .with_location(path)
                    .with_context("the source tree must contain an `include/` directory")
                    .with_suggestion(suggestions::SOURCE_NOT_FOUND)
            }
            ExportError::PermissionDenied { path, .. } => {
                Diagnostic::error("package directory is not writable")
                    .with_location(path)
                    .with_suggestion(suggestions::PERMISSION_DENIED)
            }
            ExportError::Io { path, source } => Diagnostic::error(self.to_string())
                .with_location(path)
                .with_context(source.to_string()),
            other => Diagnostic::error(other.to_string()),
        }
    }
}

/// A header staged into the package tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFile {
    /// Path relative to the `include` directory.
    pub relative: PathBuf,
    /// Number of bytes copied.
    pub size: u64,
    /// SHA256 of the copied file.
    pub sha256: String,
}

/// Outcome of a successful export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// The `include` directory that was written.
    pub destination: PathBuf,
    /// Exported headers, sorted by relative path.
    pub files: Vec<ExportedFile>,
}

impl ExportReport {
    /// Total number of bytes copied.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

/// Check whether a file name is a packaged header.
pub fn is_header(pattern: &Pattern, file_name: &str) -> bool {
    let opts = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    pattern.matches_with(file_name, opts)
}

/// Collect the headers under `include_dir`, sorted by path.
fn collect_headers(include_dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let pattern = Pattern::new(HEADER_PATTERN)?;
    let mut headers = Vec::new();

    for entry in WalkDir::new(include_dir)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| include_dir.to_path_buf());
            ExportError::read(&path, io::Error::from(e))
        })?;

        // Header symlinks are exported as copies of their target. Links to
        // directories and dangling links are skipped.
        let file_type = entry.file_type();
        if !(file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())) {
            continue;
        }

        if is_header(&pattern, &entry.file_name().to_string_lossy()) {
            headers.push(entry.into_path());
        } else {
            tracing::trace!("skipping {}", entry.path().display());
        }
    }

    Ok(headers)
}

/// Report the headers of an include directory that is its own destination.
fn report_in_place(
    src_include: &Path,
    dst_include: PathBuf,
    headers: Vec<PathBuf>,
) -> Result<ExportReport, ExportError> {
    tracing::debug!(
        "{} is both source and destination, nothing to copy",
        dst_include.display()
    );

    let mut files = Vec::with_capacity(headers.len());
    for src in headers {
        let size = fs::metadata(&src)
            .map_err(|e| ExportError::read(&src, e))?
            .len();
        let sha256 = sha256_file(&src).map_err(|e| ExportError::read(&src, e))?;
        files.push(ExportedFile {
            relative: relative_path(src_include, &src),
            size,
            sha256,
        });
    }

    Ok(ExportReport {
        destination: dst_include,
        files,
    })
}

/// Copy every `include/**/*.h` from `source_root` into `package_root`.
///
/// `package_root` is created if absent. If `source_root/include` does not
/// exist the call fails with [`ExportError::SourceNotFound`] before anything
/// is written. Existing files at the destination are overwritten. When both
/// roots resolve to the same `include` directory nothing is copied and the
/// headers already in place are reported.
pub fn export_package(source_root: &Path, package_root: &Path) -> Result<ExportReport, ExportError> {
    let src_include = source_root.join(INCLUDE_DIR);
    if !src_include.is_dir() {
        return Err(ExportError::SourceNotFound { path: src_include });
    }

    let headers = collect_headers(&src_include)?;

    let dst_include = package_root.join(INCLUDE_DIR);
    fs::create_dir_all(&dst_include).map_err(|e| ExportError::write(&dst_include, e))?;

    let src_real = fs::canonicalize(&src_include).map_err(|e| ExportError::read(&src_include, e))?;
    let dst_real = fs::canonicalize(&dst_include).map_err(|e| ExportError::read(&dst_include, e))?;
    if src_real == dst_real {
        return report_in_place(&src_include, dst_include, headers);
    }

    let mut files = Vec::with_capacity(headers.len());
    for src in headers {
        let relative = relative_path(&src_include, &src);
        let dst = dst_include.join(&relative);

        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent).map_err(|e| ExportError::write(parent, e))?;
        }

        let size = fs::copy(&src, &dst).map_err(|e| {
            if e.kind() == io::ErrorKind::PermissionDenied && fs::File::open(&src).is_err() {
                ExportError::read(&src, e)
            } else {
                ExportError::write(&dst, e)
            }
        })?;
        let sha256 = sha256_file(&dst).map_err(|e| ExportError::read(&dst, e))?;

        tracing::debug!("exported {} ({} bytes)", relative.display(), size);
        files.push(ExportedFile {
            relative,
            size,
            sha256,
        });
    }

    tracing::debug!(
        "exported {} header(s) to {}",
        files.len(),
        dst_include.display()
    );

    Ok(ExportReport {
        destination: dst_include,
        files,
    })
}
