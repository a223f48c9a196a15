pub mod overrides;

pub use overrides::{load_override, merge, ConfigOverride};

use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

/// Package manager vocabulary. Closed: override strings outside this set
/// fail validation instead of coercing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Uv,
    Npm,
    Pnpm,
    Yarn,
    Maven,
    Gradle,
    Cargo,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Uv => "uv",
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Maven => "maven",
            PackageManager::Gradle => "gradle",
            PackageManager::Cargo => "cargo",
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uv" => Ok(PackageManager::Uv),
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            "maven" => Ok(PackageManager::Maven),
            "gradle" => Ok(PackageManager::Gradle),
            "cargo" => Ok(PackageManager::Cargo),
            _ => Err(Error::InvalidConfigValue {
                field: "package_manager",
                value: s.to_string(),
            }),
        }
    }
}

/// Test framework vocabulary. `go test` keeps its two-word command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestFramework {
    Pytest,
    Vitest,
    Jest,
    Unittest,
    GoTest,
}

impl TestFramework {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestFramework::Pytest => "pytest",
            TestFramework::Vitest => "vitest",
            TestFramework::Jest => "jest",
            TestFramework::Unittest => "unittest",
            TestFramework::GoTest => "go test",
        }
    }
}

impl Display for TestFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TestFramework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pytest" => Ok(TestFramework::Pytest),
            "vitest" => Ok(TestFramework::Vitest),
            "jest" => Ok(TestFramework::Jest),
            "unittest" => Ok(TestFramework::Unittest),
            "go test" => Ok(TestFramework::GoTest),
            _ => Err(Error::InvalidConfigValue {
                field: "test_framework",
                value: s.to_string(),
            }),
        }
    }
}

/// Linter vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linter {
    Ruff,
    Eslint,
    Prettier,
    Black,
    Flake8,
}

impl Linter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Linter::Ruff => "ruff",
            Linter::Eslint => "eslint",
            Linter::Prettier => "prettier",
            Linter::Black => "black",
            Linter::Flake8 => "flake8",
        }
    }
}

impl Display for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Linter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ruff" => Ok(Linter::Ruff),
            "eslint" => Ok(Linter::Eslint),
            "prettier" => Ok(Linter::Prettier),
            "black" => Ok(Linter::Black),
            "flake8" => Ok(Linter::Flake8),
            _ => Err(Error::InvalidConfigValue {
                field: "linter",
                value: s.to_string(),
            }),
        }
    }
}

/// The fully populated configuration driving generation.
///
/// Every field carries a valid value by construction; no partial state ever
/// reaches the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    pub name: String,
    pub package_manager: PackageManager,
    pub test_framework: TestFramework,
    pub linter: Linter,
    pub language: String,
    pub framework: Option<String>,
    pub commands: Vec<String>,
    pub skip_reference: Vec<String>,
}
