//! CLI integration tests for cputimer.
//!
//! These tests drive the binary the way a packaging orchestrator would.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the cputimer binary command, isolated from the user's config.
fn cputimer(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cputimer").unwrap();
    cmd.env("HOME", home).env_remove("CPUTIMER_MANIFEST");
    cmd
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

// ============================================================================
// cputimer deps
// ============================================================================

#[test]
fn test_deps_lists_builtin_requirements_in_order() {
    let tmp = temp_dir();

    cputimer(tmp.path())
        .args(["deps"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("catch2/3.3.1\nbenchmark/1.7.1\nfmt/9.1.0\n");
}

#[test]
fn test_deps_json() {
    let tmp = temp_dir();

    let output = cputimer(tmp.path())
        .args(["deps", "--json"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let deps: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(deps[0]["name"], "catch2");
    assert_eq!(deps[1]["version"], "1.7.1");
    assert_eq!(deps.as_array().unwrap().len(), 3);
}

#[test]
fn test_deps_uses_recipe_manifest() {
    let tmp = temp_dir();
    write(
        tmp.path(),
        "Recipe.toml",
        "[package]\nname = \"headers\"\nversion = \"0.1.0\"\nrequires = [\"fmt/10.2.1\"]\n",
    );

    cputimer(tmp.path())
        .args(["deps"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("fmt/10.2.1\n");
}

#[test]
fn test_invalid_manifest_fails() {
    let tmp = temp_dir();
    write(
        tmp.path(),
        "Recipe.toml",
        "[package]\nname = \"headers\"\nversion = \"not-semver\"\n",
    );

    cputimer(tmp.path())
        .args(["deps"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("package.version"));
}

// ============================================================================
// cputimer info / init
// ============================================================================

#[test]
fn test_info_shows_metadata() {
    let tmp = temp_dir();

    cputimer(tmp.path())
        .args(["info", "--build-type", "debug"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cputimer/1.0.0"))
        .stdout(predicate::str::contains("GPL v.3"))
        .stdout(predicate::str::contains("build_type:  Debug"));
}

#[test]
fn test_info_package_id_depends_on_build_type() {
    let tmp = temp_dir();

    let id_for = |build_type: &str| {
        let output = cputimer(tmp.path())
            .args(["info", "--json", "--build-type", build_type])
            .current_dir(tmp.path())
            .output()
            .unwrap();
        let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        info["package_id"].as_str().unwrap().to_string()
    };

    assert_ne!(id_for("Debug"), id_for("Release"));
    assert_eq!(id_for("Release"), id_for("release"));
}

#[test]
fn test_info_rejects_unknown_build_type() {
    let tmp = temp_dir();

    cputimer(tmp.path())
        .args(["info", "--build-type", "turbo"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown build type"));
}

#[test]
fn test_init_writes_recipe() {
    let tmp = temp_dir();

    cputimer(tmp.path())
        .args(["init"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let manifest = fs::read_to_string(tmp.path().join("Recipe.toml")).unwrap();
    assert!(manifest.contains("name = \"cputimer\""));
    assert!(manifest.contains("catch2/3.3.1"));

    cputimer(tmp.path())
        .args(["init"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ============================================================================
// cputimer export
// ============================================================================

#[test]
fn test_export_copies_headers_only() {
    let tmp = temp_dir();
    let source = tmp.path().join("source");
    let package = tmp.path().join("package");
    write(&source, "include/a.h", "alpha");
    write(&source, "include/sub/b.h", "beta");
    write(&source, "include/c.hpp", "not a header");

    cputimer(tmp.path())
        .args(["export", "--source"])
        .arg(&source)
        .arg("--package")
        .arg(&package)
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported 2 header(s)"));

    assert_eq!(fs::read_to_string(package.join("include/a.h")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(package.join("include/sub/b.h")).unwrap(), "beta");
    assert!(!package.join("include/c.hpp").exists());
}

#[test]
fn test_export_into_source_dir_keeps_headers() {
    let tmp = temp_dir();
    write(tmp.path(), "include/timer.h", "content-A");

    cputimer(tmp.path())
        .args(["export", "--package", "."])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("header(s)").count(1))
        .stderr(predicate::str::contains("Exported 1 header(s)"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("include/timer.h")).unwrap(),
        "content-A"
    );
}

#[test]
fn test_export_missing_include_fails() {
    let tmp = temp_dir();
    let source = tmp.path().join("source");
    let package = tmp.path().join("package");
    fs::create_dir_all(&source).unwrap();

    cputimer(tmp.path())
        .args(["export", "--source"])
        .arg(&source)
        .arg("--package")
        .arg(&package)
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no headers to export"));

    assert!(!package.exists());
}

#[test]
fn test_export_uses_project_config() {
    let tmp = temp_dir();
    write(tmp.path(), "src/include/timer.h", "content-A");
    write(
        tmp.path(),
        ".cputimer/config.toml",
        "[export]\nsource = \"src\"\npackage = \"out\"\n",
    );

    cputimer(tmp.path())
        .args(["export"])
        .current_dir(tmp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("out/include/timer.h")).unwrap(),
        "content-A"
    );
}

#[test]
fn test_export_requires_package_dir() {
    let tmp = temp_dir();

    cputimer(tmp.path())
        .args(["export"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no package directory given"));
}

// ============================================================================
// cputimer check
// ============================================================================

#[test]
fn test_check_against_registry() {
    let tmp = temp_dir();
    let registry = tmp.path().join("registry");
    for dir in ["catch2/3.3.1", "benchmark/1.7.1", "fmt/9.1.0"] {
        fs::create_dir_all(registry.join(dir)).unwrap();
    }

    cputimer(tmp.path())
        .args(["check", "--registry"])
        .arg(&registry)
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fmt/9.1.0 ->"));
}

#[test]
fn test_check_reports_unresolvable() {
    let tmp = temp_dir();
    let registry = tmp.path().join("registry");
    fs::create_dir_all(registry.join("catch2/3.3.1")).unwrap();

    cputimer(tmp.path())
        .args(["check", "--registry"])
        .arg(&registry)
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not resolve `benchmark/1.7.1`"));
}

// ============================================================================
// cputimer demo / completions
// ============================================================================

#[test]
fn test_demo_runs() {
    let tmp = temp_dir();

    cputimer(tmp.path())
        .args(["demo", "--work-ms", "5"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("milliseconds of thread CPU time"));
}

#[test]
fn test_completions_bash() {
    let tmp = temp_dir();

    cputimer(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cputimer"));
}
