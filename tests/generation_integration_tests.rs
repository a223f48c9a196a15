mod utils;

use pivloop::error::Error;
use std::fs;
use tempfile::TempDir;
use utils::{run_workflow, seed_project};

/// Target tree with only Python markers: no lockfile, so the package
/// manager stays at the npm default while everything else follows the
/// Python evidence.
#[test]
fn python_project_end_to_end() {
    let project = TempDir::new().unwrap();
    seed_project(project.path(), &["pyproject.toml", "pytest.ini"]);

    run_workflow(project.path()).unwrap();

    let reference = project.path().join(".claude/reference");
    for doc in [
        "fastapi-best-practices.md",
        "sqlite-best-practices.md",
        "testing-and-logging.md",
        "deployment-best-practices.md",
    ] {
        assert!(reference.join(doc).is_file(), "missing reference doc {doc}");
    }

    let prime = fs::read_to_string(
        project.path().join(".claude/commands/core_piv_loop/prime.md"),
    )
    .unwrap();
    assert!(prime.contains("pytest -v"));
    assert!(!prime.contains("{{test_command}}"));

    // npm default: no lockfile in the tree.
    let init = fs::read_to_string(
        project.path().join(".claude/commands/init-project.md"),
    )
    .unwrap();
    assert!(init.contains("npm install"));

    let readme = fs::read_to_string(project.path().join(".agents/README.md")).unwrap();
    assert!(readme.contains("Language: python"));
    assert!(readme.contains("Test framework: pytest"));
    assert!(readme.contains("Package manager: npm"));
}

/// An override switches the test framework; the replacement table follows
/// the override while reference docs still follow the detected language.
#[test]
fn jest_override_on_python_project() {
    let project = TempDir::new().unwrap();
    seed_project(project.path(), &["pyproject.toml", "pytest.ini"]);
    fs::write(
        project.path().join("piv-config.json"),
        r#"{"test_framework": "jest"}"#,
    )
    .unwrap();

    run_workflow(project.path()).unwrap();

    let prime = fs::read_to_string(
        project.path().join(".claude/commands/core_piv_loop/prime.md"),
    )
    .unwrap();
    assert!(prime.contains("jest"));
    assert!(!prime.contains("pytest -v"));

    // Language was not overridden, so the docs stay Python.
    assert!(project
        .path()
        .join(".claude/reference/fastapi-best-practices.md")
        .is_file());
}

/// A typo in an override enum aborts before anything is written.
#[test]
fn invalid_override_writes_nothing() {
    let project = TempDir::new().unwrap();
    seed_project(project.path(), &["pyproject.toml"]);
    fs::write(
        project.path().join("piv-config.json"),
        r#"{"package_manager": "bun"}"#,
    )
    .unwrap();

    let err = run_workflow(project.path()).unwrap_err();
    match err {
        Error::InvalidConfigValue { field, value } => {
            assert_eq!(field, "package_manager");
            assert_eq!(value, "bun");
        }
        other => panic!("Expected InvalidConfigValue, got {other:?}"),
    }

    assert!(!project.path().join(".claude").exists());
    assert!(!project.path().join(".agents").exists());
    assert!(!project.path().join("CLAUDE.md").exists());
}

/// A malformed override file fails fast, naming the file.
#[test]
fn malformed_override_fails_fast() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("piv-config.json"), "{ nope").unwrap();

    let err = run_workflow(project.path()).unwrap_err();
    match err {
        Error::MalformedOverride { path, .. } => {
            assert!(path.ends_with("piv-config.json"));
        }
        other => panic!("Expected MalformedOverride, got {other:?}"),
    }
}

/// Running twice produces identical manifests: the workflow section is
/// appended exactly once.
#[test]
fn repeated_runs_are_idempotent() {
    let project = TempDir::new().unwrap();
    seed_project(project.path(), &["package.json", "yarn.lock"]);

    run_workflow(project.path()).unwrap();
    let first = fs::read_to_string(project.path().join("CLAUDE.md")).unwrap();

    run_workflow(project.path()).unwrap();
    let second = fs::read_to_string(project.path().join("CLAUDE.md")).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.matches("## PIV Loop Workflow").count(), 1);
}

/// An empty project falls back to every documented default and still
/// scaffolds successfully.
#[test]
fn empty_project_uses_defaults() {
    let project = TempDir::new().unwrap();

    run_workflow(project.path()).unwrap();

    // typescript defaults select the react/testing docs.
    let reference = project.path().join(".claude/reference");
    assert!(reference.join("react-frontend-best-practices.md").is_file());
    assert!(reference.join("testing-and-logging.md").is_file());
    assert!(!reference.join("fastapi-best-practices.md").exists());

    let readme = fs::read_to_string(project.path().join(".agents/README.md")).unwrap();
    assert!(readme.contains("Language: typescript"));
    assert!(readme.contains("Package manager: npm"));
}

/// TypeScript project with a yarn lockfile: lockfile detection drives the
/// package-manager bundle in rendered commands.
#[test]
fn yarn_lockfile_selects_yarn_commands() {
    let project = TempDir::new().unwrap();
    seed_project(project.path(), &["package.json", "yarn.lock", "vitest.config.ts"]);

    run_workflow(project.path()).unwrap();

    let init = fs::read_to_string(
        project.path().join(".claude/commands/init-project.md"),
    )
    .unwrap();
    assert!(init.contains("yarn install"));

    let validate = fs::read_to_string(
        project.path().join(".claude/commands/validation/validate.md"),
    )
    .unwrap();
    assert!(validate.contains("vitest run"));
    assert!(validate.contains("prettier --write ."));
}
