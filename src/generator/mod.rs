pub mod replacements;

pub use replacements::build_replacements;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ProjectConfig;
use crate::constants::{
    AGENTS_README_TEMPLATE, COMMANDS_TEMPLATE_DIR, DEPLOYMENT_DOC, MANIFEST_FILENAME,
    MANIFEST_MARKER, REFERENCE_TEMPLATE_DIR, SCAFFOLD_DIRS,
};
use crate::error::{Error, Result};
use crate::ioutils::{copy_file, create_dir_all, write_file};
use crate::render::{render_str, ReplacementMap};

/// Reference docs per language; unrecognized languages fall back to the
/// universal testing doc.
const REFERENCE_DOCS: &[(&str, &[&str])] = &[
    (
        "python",
        &[
            "fastapi-best-practices.md",
            "sqlite-best-practices.md",
            "testing-and-logging.md",
        ],
    ),
    ("typescript", &["react-frontend-best-practices.md", "testing-and-logging.md"]),
    ("java", &["testing-and-logging.md"]),
    ("go", &["testing-and-logging.md"]),
];

const FALLBACK_REFERENCE_DOCS: &[&str] = &["testing-and-logging.md"];

/// Standalone command files processed on every run: (file name, rendered).
/// Files marked `false` are copied verbatim.
const EXTRA_COMMAND_FILES: &[(&str, bool)] =
    &[("init-project.md", true), ("create-prd.md", false)];

/// Section appended to the root manifest, guarded by its marker heading.
const WORKFLOW_SECTION: &str = "\n## PIV Loop Workflow\n\n\
This project uses the PIV Loop AI development process:\n\n\
| Command | Description |\n\
|---------|-------------|\n\
| `/core_piv_loop:prime` | Understand the project structure |\n\
| `/core_piv_loop:plan-feature` | Create an implementation plan |\n\
| `/core_piv_loop:execute` | Execute the plan |\n\
| `/validation:validate` | Run validation |\n\
| `/commit` | Create a commit |\n\n\
See [.agents/README.md](.agents/README.md) for details.\n";

/// Materializes a configuration into the target project tree.
///
/// All steps are additive and idempotent per artifact; a failed run leaves
/// already-written files in place and is recovered by re-running once the
/// cause is fixed.
pub struct Generator {
    skill_root: PathBuf,
    project_root: PathBuf,
}

impl Generator {
    pub fn new<P: Into<PathBuf>>(skill_root: P, project_root: P) -> Self {
        Self { skill_root: skill_root.into(), project_root: project_root.into() }
    }

    /// Executes the complete generation workflow.
    pub fn generate(&self, config: &ProjectConfig) -> Result<()> {
        self.create_directories()?;

        let replacements = build_replacements(config);
        log::debug!("Replacement table: {replacements:?}");

        self.generate_commands(config, &replacements)?;
        self.generate_references(config)?;
        self.generate_agents_readme(config)?;
        self.update_manifest(config)?;

        println!("✓ PIV Loop workflow configured");
        println!("  project: {}", config.name);
        println!("  language: {}", config.language);
        println!("  package manager: {}", config.package_manager);
        println!("  test framework: {}", config.test_framework);
        println!("  linter: {}", config.linter);
        Ok(())
    }

    /// Creates the scaffold directories. Existing directories are not an
    /// error.
    fn create_directories(&self) -> Result<()> {
        for dir in SCAFFOLD_DIRS {
            let target = self.project_root.join(dir);
            log::debug!("Ensuring directory '{}'", target.display());
            create_dir_all(&target)?;
        }
        Ok(())
    }

    /// Renders every command group named in the configuration.
    ///
    /// A group backed by a template directory has its `.md` tree rendered; a
    /// group backed by a single `<group>.md` file is copied verbatim. A group
    /// with neither is a missing template source: command templates are a
    /// hard dependency, so generation aborts rather than silently producing
    /// nothing for a requested group.
    fn generate_commands(
        &self,
        config: &ProjectConfig,
        replacements: &ReplacementMap,
    ) -> Result<()> {
        let templates_dir = self.skill_root.join(COMMANDS_TEMPLATE_DIR);
        let commands_root = self.project_root.join(".claude").join("commands");

        for group in &config.commands {
            let group_dir = templates_dir.join(group);
            if group_dir.is_dir() {
                self.render_tree(&group_dir, &commands_root.join(group), replacements)?;
                continue;
            }

            let group_file = templates_dir.join(format!("{group}.md"));
            if group_file.is_file() {
                let target = commands_root.join(format!("{group}.md"));
                log::info!(
                    "Copying '{}' to '{}'",
                    group_file.display(),
                    target.display()
                );
                copy_file(&group_file, &target)?;
                continue;
            }

            return Err(Error::MissingTemplateSource {
                path: group_dir.display().to_string(),
            });
        }

        for (file_name, rendered) in EXTRA_COMMAND_FILES {
            let source = templates_dir.join(file_name);
            if !source.is_file() {
                return Err(Error::MissingTemplateSource {
                    path: source.display().to_string(),
                });
            }
            let target = commands_root.join(file_name);
            if *rendered {
                let content = std::fs::read_to_string(&source)?;
                log::info!("Writing '{}'", target.display());
                write_file(&render_str(&content, replacements), &target)?;
            } else {
                log::info!("Copying '{}' to '{}'", source.display(), target.display());
                copy_file(&source, &target)?;
            }
        }

        Ok(())
    }

    /// Renders every `.md` file under `source_dir` into `target_dir`,
    /// mirroring relative paths.
    fn render_tree(
        &self,
        source_dir: &Path,
        target_dir: &Path,
        replacements: &ReplacementMap,
    ) -> Result<()> {
        for dir_entry in WalkDir::new(source_dir).into_iter().filter_map(|e| e.ok()) {
            let source = dir_entry.path();
            if !dir_entry.file_type().is_file()
                || source.extension().and_then(|e| e.to_str()) != Some("md")
            {
                continue;
            }
            let Ok(relative) = source.strip_prefix(source_dir) else {
                continue;
            };

            let target = target_dir.join(relative);
            let content = std::fs::read_to_string(source)?;
            log::info!("Writing '{}'", target.display());
            write_file(&render_str(&content, replacements), &target)?;
        }
        Ok(())
    }

    /// Copies the reference docs selected by the configured language,
    /// honoring the skip list. The deployment doc is universal.
    fn generate_references(&self, config: &ProjectConfig) -> Result<()> {
        let templates_dir = self.skill_root.join(REFERENCE_TEMPLATE_DIR);
        let reference_root = self.project_root.join(".claude").join("reference");

        let docs = REFERENCE_DOCS
            .iter()
            .find(|(language, _)| *language == config.language)
            .map(|(_, docs)| *docs)
            .unwrap_or(FALLBACK_REFERENCE_DOCS);

        for doc in docs.iter().chain(std::iter::once(&DEPLOYMENT_DOC)) {
            if config.skip_reference.iter().any(|skipped| skipped.as_str() == *doc) {
                log::debug!("Skipping reference doc '{doc}'");
                continue;
            }
            let source = templates_dir.join(doc);
            if !source.is_file() {
                return Err(Error::MissingTemplateSource {
                    path: source.display().to_string(),
                });
            }
            let target = reference_root.join(doc);
            log::info!("Copying '{}' to '{}'", source.display(), target.display());
            copy_file(&source, &target)?;
        }

        Ok(())
    }

    /// Renders the agents README from its template via literal replacement
    /// of the four named placeholders. The template is an optional asset; a
    /// missing source is a silent no-op.
    fn generate_agents_readme(&self, config: &ProjectConfig) -> Result<()> {
        let template = self.skill_root.join(AGENTS_README_TEMPLATE);
        if !template.is_file() {
            log::debug!(
                "Agents README template '{}' not found, skipping",
                template.display()
            );
            return Ok(());
        }

        let content = std::fs::read_to_string(&template)?
            .replace("{{project_name}}", &config.name)
            .replace("{{language}}", &config.language)
            .replace("{{test_framework}}", config.test_framework.as_str())
            .replace("{{package_manager}}", config.package_manager.as_str());

        let target = self.project_root.join(".agents").join("README.md");
        log::info!("Writing '{}'", target.display());
        write_file(&content, &target)
    }

    /// Appends the workflow section to the root manifest unless its marker
    /// heading is already present. Re-running never duplicates the section.
    fn update_manifest(&self, config: &ProjectConfig) -> Result<()> {
        let manifest = self.project_root.join(MANIFEST_FILENAME);
        let mut content = if manifest.is_file() {
            std::fs::read_to_string(&manifest)?
        } else {
            format!("# {}\n\n", config.name)
        };

        if content.contains(MANIFEST_MARKER) {
            log::debug!("Manifest already carries '{MANIFEST_MARKER}', leaving as is");
            return Ok(());
        }

        content.push_str(WORKFLOW_SECTION);
        log::info!("Writing '{}'", manifest.display());
        write_file(&content, &manifest)
    }
}
