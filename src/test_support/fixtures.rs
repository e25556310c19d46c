//! Test fixtures for common test scenarios.

use crate::test_support::SourceTree;

/// Public header of the cputimer library.
pub const CPU_TIMER_H: &str = r#"#pragma once

#include <chrono>
#include <ctime>

namespace knatten::CpuTimer
{
    enum class Type
    {
        real,
        process,
        thread
    };
} // namespace knatten::CpuTimer
"#;

/// Legacy stopwatch header.
pub const CPU_CLOCK_H: &str = r#"#pragma once

#include <ctime>
#include <optional>

namespace CpuClock
{
} // namespace CpuClock
"#;

/// A source tree laid out like the cputimer repository.
///
/// Only the two files under `include/` ending in `.h` are packaged; the
/// test helpers, sources and build scripts must never be.
pub fn cputimer_repository() -> SourceTree {
    SourceTree::new()
        .file("include/CpuTimer.h", CPU_TIMER_H)
        .file("include/CpuClock.h", CPU_CLOCK_H)
        .file("include/README.md", "Headers live here.\n")
        .file("test/include/test_utils.h", "#pragma once\n")
        .file("test/test.cpp", "#include \"CpuClock.h\"\n")
        .file("examples/main.cpp", "int main() {}\n")
        .file("CMakeLists.txt", "cmake_minimum_required(VERSION 3.16)\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::export_package;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_repository_export_contains_only_public_headers() {
        let tree = cputimer_repository().build();
        let out = TempDir::new().unwrap();

        let report = export_package(tree.root(), out.path()).unwrap();

        let relatives: Vec<_> = report.files.iter().map(|f| f.relative.clone()).collect();
        assert_eq!(
            relatives,
            vec![PathBuf::from("CpuClock.h"), PathBuf::from("CpuTimer.h")]
        );
        assert_eq!(
            std::fs::read_to_string(out.path().join("include/CpuTimer.h")).unwrap(),
            CPU_TIMER_H
        );
        assert!(!out.path().join("include/README.md").exists());
        assert!(!out.path().join("include/test_utils.h").exists());
    }
}
