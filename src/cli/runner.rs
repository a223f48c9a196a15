use crate::{
    cli::Args,
    config::{load_override, merge, ProjectConfig},
    constants::OVERRIDE_FILENAME,
    detect::detect,
    error::Result,
    generator::Generator,
    inventory::FileInventory,
    ioutils::{project_name, resolve_skill_root},
};
use std::path::Path;

/// Main CLI runner that orchestrates detection, override merge and
/// generation against the current working directory.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete workflow against the current working directory
    /// and the installed skill root.
    pub fn run(self) -> Result<()> {
        let project_root = std::env::current_dir()?;
        let skill_root = resolve_skill_root()?;
        self.run_at(&project_root, &skill_root)
    }

    /// Executes the complete workflow: inventory → detectors → override
    /// merge → generator.
    pub fn run_at(&self, project_root: &Path, skill_root: &Path) -> Result<()> {
        log::debug!(
            "Project root '{}', skill root '{}'",
            project_root.display(),
            skill_root.display()
        );

        let inventory = FileInventory::scan(project_root)?;
        let detected = detect(&inventory, &project_name(project_root))?;
        if self.args.debug {
            report_config("Detected configuration", &detected);
        }

        let override_path = project_root.join(OVERRIDE_FILENAME);
        let config = match load_override(&override_path)? {
            Some(override_config) => {
                let merged = merge(&detected, &override_config)?;
                if self.args.debug {
                    report_config("Merged configuration", &merged);
                }
                merged
            }
            None => detected,
        };

        let generator = Generator::new(skill_root, project_root);
        generator.generate(&config)
    }
}

/// Verbose stdout report behind the `--debug` flag.
fn report_config(heading: &str, config: &ProjectConfig) {
    println!("{heading}:");
    println!("  language: {}", config.language);
    println!("  package manager: {}", config.package_manager);
    println!("  test framework: {}", config.test_framework);
    println!("  linter: {}", config.linter);
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
