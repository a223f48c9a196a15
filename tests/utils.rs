use pivloop::cli::{Args, Runner};
use std::fs;
use std::path::{Path, PathBuf};

/// Skill root for integration runs: the repository itself ships the
/// template tree, so the manifest directory is a complete skill root.
pub fn repo_skill_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Creates the given relative files (empty) under a scratch project root.
pub fn seed_project(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }
}

/// Runs the full detect → merge → generate workflow against an explicit
/// project root and the repository's skill root.
pub fn run_workflow(project_root: &Path) -> pivloop::error::Result<()> {
    Runner::new(Args { debug: false }).run_at(project_root, &repo_skill_root())
}
