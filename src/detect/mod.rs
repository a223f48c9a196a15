use regex::Regex;

use crate::config::{Linter, PackageManager, ProjectConfig, TestFramework};
use crate::constants::DEFAULT_COMMANDS;
use crate::error::Result;
use crate::inventory::FileInventory;

/// Lockfile and manifest indicators, checked in priority order: lockfiles
/// first, build manifests after.
const PACKAGE_MANAGER_RULES: &[(&str, PackageManager)] = &[
    ("uv.lock", PackageManager::Uv),
    ("package-lock.json", PackageManager::Npm),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("pom.xml", PackageManager::Maven),
    ("build.gradle", PackageManager::Gradle),
    ("Cargo.lock", PackageManager::Cargo),
];

/// Config-file and conventional-directory indicators, as regexes over
/// relative path strings.
const TEST_FRAMEWORK_RULES: &[(&str, TestFramework)] = &[
    (r"pytest\.ini|conftest\.py|pyproject\.toml", TestFramework::Pytest),
    (r"vitest\.config\.|@vitest/", TestFramework::Vitest),
    (r"jest\.config\.|__tests__", TestFramework::Jest),
    (r"unittest\.py|test_.*\.py", TestFramework::Unittest),
];

const LINTER_RULES: &[(&str, Linter)] = &[
    ("ruff.toml", Linter::Ruff),
    (".eslintrc", Linter::Eslint),
    (".prettierrc", Linter::Prettier),
    ("pyproject.toml", Linter::Black),
    (".flake8", Linter::Flake8),
];

/// Manifest indicators mapping to a language and an assumed framework.
const LANGUAGE_RULES: &[(&str, &str, Option<&str>)] = &[
    (r"pyproject\.toml|setup\.py", "python", Some("fastapi")),
    (r"requirements\.txt", "python", Some("flask")),
    (r"package\.json", "typescript", Some("react")),
    (r"tsconfig\.json", "typescript", None),
    (r"pom\.xml|build\.gradle", "java", Some("spring")),
    (r"go\.mod", "go", None),
    (r"Cargo\.toml", "rust", None),
];

pub const DEFAULT_LANGUAGE: &str = "typescript";

/// Detects the package manager from lockfile presence. Default: npm.
pub fn detect_package_manager(inventory: &FileInventory) -> PackageManager {
    for (filename, package_manager) in PACKAGE_MANAGER_RULES {
        if inventory.contains_file_named(filename) {
            return *package_manager;
        }
    }
    PackageManager::Npm
}

/// Detects the test framework from config files and test-directory
/// conventions. Default: pytest.
pub fn detect_test_framework(inventory: &FileInventory) -> Result<TestFramework> {
    for (pattern, framework) in TEST_FRAMEWORK_RULES {
        if inventory.any_path_matches(&Regex::new(pattern)?) {
            return Ok(*framework);
        }
    }
    Ok(TestFramework::Pytest)
}

/// Detects the linter from config filename presence. Default: ruff.
pub fn detect_linter(inventory: &FileInventory) -> Linter {
    for (filename, linter) in LINTER_RULES {
        if inventory.contains_file_named(filename) {
            return *linter;
        }
    }
    Linter::Ruff
}

/// Detects the primary language and its assumed framework from build
/// manifests. Default: typescript without a framework.
pub fn detect_language_and_framework(
    inventory: &FileInventory,
) -> Result<(String, Option<String>)> {
    for (pattern, language, framework) in LANGUAGE_RULES {
        if inventory.any_path_matches(&Regex::new(pattern)?) {
            return Ok((language.to_string(), framework.map(str::to_string)));
        }
    }
    Ok((DEFAULT_LANGUAGE.to_string(), None))
}

/// Runs every detector over the inventory and assembles a fully populated
/// configuration. Pure function of the inventory; no side effects.
pub fn detect(inventory: &FileInventory, project_name: &str) -> Result<ProjectConfig> {
    let (language, framework) = detect_language_and_framework(inventory)?;

    let config = ProjectConfig {
        name: project_name.to_string(),
        package_manager: detect_package_manager(inventory),
        test_framework: detect_test_framework(inventory)?,
        linter: detect_linter(inventory),
        language,
        framework,
        commands: DEFAULT_COMMANDS.iter().map(|s| s.to_string()).collect(),
        skip_reference: Vec::new(),
    };

    log::debug!("Detected configuration: {config:?}");
    Ok(config)
}
