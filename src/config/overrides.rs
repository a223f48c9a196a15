use serde::Deserialize;
use std::path::Path;

use crate::config::ProjectConfig;
use crate::error::{Error, Result};

/// Partial configuration loaded from the project's override file.
///
/// Enum-valued fields stay raw strings here; they are validated against the
/// closed vocabularies during [`merge`], never coerced by serde.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverride {
    pub name: Option<String>,
    pub package_manager: Option<String>,
    pub test_framework: Option<String>,
    pub linter: Option<String>,
    pub language: Option<String>,
    pub framework: Option<String>,
    pub commands: Option<Vec<String>>,
    pub skip_reference: Option<Vec<String>>,
}

/// Loads the override file if present.
///
/// A missing file is not an error; an unreadable or non-object file is
/// reported as [`Error::MalformedOverride`] naming the path.
pub fn load_override<P: AsRef<Path>>(path: P) -> Result<Option<ConfigOverride>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| Error::MalformedOverride {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;

    let override_config = serde_json::from_str::<ConfigOverride>(&content).map_err(|e| {
        Error::MalformedOverride {
            path: path.display().to_string(),
            detail: e.to_string(),
        }
    })?;

    log::debug!("Loaded override from '{}': {override_config:?}", path.display());
    Ok(Some(override_config))
}

/// Merges an override on top of a detected configuration.
///
/// Every present override field replaces the base value. Enum strings must
/// belong to their vocabulary; a typo fails here, before any file is written.
pub fn merge(base: &ProjectConfig, override_config: &ConfigOverride) -> Result<ProjectConfig> {
    let package_manager = match &override_config.package_manager {
        Some(raw) => raw.parse()?,
        None => base.package_manager,
    };
    let test_framework = match &override_config.test_framework {
        Some(raw) => raw.parse()?,
        None => base.test_framework,
    };
    let linter = match &override_config.linter {
        Some(raw) => raw.parse()?,
        None => base.linter,
    };

    Ok(ProjectConfig {
        name: override_config.name.clone().unwrap_or_else(|| base.name.clone()),
        package_manager,
        test_framework,
        linter,
        language: override_config.language.clone().unwrap_or_else(|| base.language.clone()),
        framework: override_config.framework.clone().or_else(|| base.framework.clone()),
        commands: override_config.commands.clone().unwrap_or_else(|| base.commands.clone()),
        skip_reference: override_config
            .skip_reference
            .clone()
            .unwrap_or_else(|| base.skip_reference.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Linter, PackageManager, TestFramework};

    fn python_config() -> ProjectConfig {
        ProjectConfig {
            name: "demo".to_string(),
            package_manager: PackageManager::Npm,
            test_framework: TestFramework::Pytest,
            linter: Linter::Black,
            language: "python".to_string(),
            framework: Some("fastapi".to_string()),
            commands: vec!["core_piv_loop".to_string(), "commit".to_string()],
            skip_reference: vec![],
        }
    }

    #[test]
    fn empty_override_leaves_config_unchanged() {
        let base = python_config();
        let merged = merge(&base, &ConfigOverride::default()).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn merge_is_idempotent_for_matching_override() {
        let base = python_config();
        let override_config = ConfigOverride {
            package_manager: Some("npm".to_string()),
            test_framework: Some("pytest".to_string()),
            linter: Some("black".to_string()),
            language: Some("python".to_string()),
            ..ConfigOverride::default()
        };
        let merged = merge(&base, &override_config).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn override_fields_win_over_base() {
        let base = python_config();
        let override_config = ConfigOverride {
            test_framework: Some("jest".to_string()),
            skip_reference: Some(vec!["deployment-best-practices.md".to_string()]),
            ..ConfigOverride::default()
        };
        let merged = merge(&base, &override_config).unwrap();
        assert_eq!(merged.test_framework, TestFramework::Jest);
        assert_eq!(merged.skip_reference, vec!["deployment-best-practices.md"]);
        // Untouched fields keep their detected values.
        assert_eq!(merged.language, "python");
        assert_eq!(merged.linter, Linter::Black);
    }

    #[test]
    fn unknown_enum_string_fails_with_field_and_value() {
        let base = python_config();
        let override_config = ConfigOverride {
            package_manager: Some("bun".to_string()),
            ..ConfigOverride::default()
        };
        let err = merge(&base, &override_config).unwrap_err();
        match err {
            Error::InvalidConfigValue { field, value } => {
                assert_eq!(field, "package_manager");
                assert_eq!(value, "bun");
            }
            other => panic!("Expected InvalidConfigValue, got {other:?}"),
        }
    }

    #[test]
    fn load_override_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_override(dir.path().join("piv-config.json")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn load_override_reads_partial_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("piv-config.json");
        std::fs::write(&path, r#"{"test_framework": "jest"}"#).unwrap();

        let loaded = load_override(&path).unwrap().unwrap();
        assert_eq!(loaded.test_framework.as_deref(), Some("jest"));
        assert_eq!(loaded.package_manager, None);
    }

    #[test]
    fn load_override_rejects_non_object_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("piv-config.json");
        std::fs::write(&path, r#"["not", "an", "object"]"#).unwrap();

        let err = load_override(&path).unwrap_err();
        match err {
            Error::MalformedOverride { path: reported, .. } => {
                assert!(reported.ends_with("piv-config.json"));
            }
            other => panic!("Expected MalformedOverride, got {other:?}"),
        }
    }

    #[test]
    fn load_override_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("piv-config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_override(&path).unwrap_err(),
            Error::MalformedOverride { .. }
        ));
    }
}
