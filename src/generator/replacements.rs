use crate::config::ProjectConfig;
use crate::render::ReplacementMap;

/// Test, coverage, lint and format commands for one test framework.
type CommandBundle = &'static [(&'static str, &'static str)];

/// Bundles keyed by test-framework value. Frameworks without an entry
/// (unittest, go test) fall back to the pytest bundle.
const TEST_FRAMEWORK_BUNDLES: &[(&str, CommandBundle)] = &[
    (
        "pytest",
        &[
            ("test_command", "pytest -v"),
            ("test_coverage", "pytest --cov=app"),
            ("lint_command", "ruff check ."),
            ("format_command", "ruff format ."),
        ],
    ),
    (
        "vitest",
        &[
            ("test_command", "vitest run"),
            ("test_coverage", "vitest run --coverage"),
            ("lint_command", "eslint ."),
            ("format_command", "prettier --write ."),
        ],
    ),
    (
        "jest",
        &[
            ("test_command", "jest"),
            ("test_coverage", "jest --coverage"),
            ("lint_command", "eslint ."),
            ("format_command", "prettier --write ."),
        ],
    ),
];

/// Bundles keyed by package-manager value. Managers without an entry
/// (maven, gradle, cargo) fall back to the npm bundle.
const PACKAGE_MANAGER_BUNDLES: &[(&str, CommandBundle)] = &[
    (
        "uv",
        &[
            ("install", "uv sync"),
            ("run", "uv run"),
            ("dev_install", "uv pip install -e ."),
        ],
    ),
    (
        "npm",
        &[
            ("install", "npm install"),
            ("run", "npm run"),
            ("dev_install", "npm install -D"),
        ],
    ),
    (
        "pnpm",
        &[("install", "pnpm install"), ("run", "pnpm"), ("dev_install", "pnpm add -D")],
    ),
    (
        "yarn",
        &[("install", "yarn install"), ("run", "yarn"), ("dev_install", "yarn add -D")],
    ),
];

const FALLBACK_TEST_FRAMEWORK: &str = "pytest";
const FALLBACK_PACKAGE_MANAGER: &str = "npm";

fn lookup_bundle(bundles: &[(&str, CommandBundle)], key: &str, fallback: &str) -> CommandBundle {
    bundles
        .iter()
        .find(|(name, _)| *name == key)
        .or_else(|| bundles.iter().find(|(name, _)| *name == fallback))
        .map(|(_, bundle)| *bundle)
        .unwrap_or(&[])
}

/// Flattens the framework bundle, the package-manager bundle and the scalar
/// config fields into one replacement table.
pub fn build_replacements(config: &ProjectConfig) -> ReplacementMap {
    let mut replacements = ReplacementMap::new();

    let framework_bundle = lookup_bundle(
        TEST_FRAMEWORK_BUNDLES,
        config.test_framework.as_str(),
        FALLBACK_TEST_FRAMEWORK,
    );
    for (key, value) in framework_bundle {
        replacements.insert(key.to_string(), value.to_string());
    }

    let pm_bundle = lookup_bundle(
        PACKAGE_MANAGER_BUNDLES,
        config.package_manager.as_str(),
        FALLBACK_PACKAGE_MANAGER,
    );
    for (key, value) in pm_bundle {
        replacements.insert(key.to_string(), value.to_string());
    }

    replacements.insert("language".to_string(), config.language.clone());
    replacements
        .insert("framework".to_string(), config.framework.clone().unwrap_or_default());
    replacements.insert("project_name".to_string(), config.name.clone());

    replacements
}
