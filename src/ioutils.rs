use std::path::{Path, PathBuf};

use crate::constants::SKILL_ROOT_ENV;
use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Write content to a file, creating parent directories if needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Copy a file from source to destination, creating parent directories if needed.
pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path.as_ref(), dest_path).map(|_| ()).map_err(Error::IoError)
}

/// Resolves the skill root holding template sources.
///
/// The `PIVLOOP_SKILL_ROOT` environment variable wins; otherwise the root is
/// the parent of the directory containing the executable, matching the
/// installed layout `<root>/bin/pivloop` with `<root>/templates` beside it.
pub fn resolve_skill_root() -> Result<PathBuf> {
    if let Ok(root) = std::env::var(SKILL_ROOT_ENV) {
        return Ok(PathBuf::from(root));
    }

    let exe = std::env::current_exe().map_err(Error::IoError)?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            Error::SkillRootError(format!(
                "executable '{}' has no grandparent directory and {} is not set",
                exe.display(),
                SKILL_ROOT_ENV
            ))
        })
}

/// Derives the project name from the root directory's file name.
pub fn project_name<P: AsRef<Path>>(project_root: P) -> String {
    let project_root = project_root.as_ref();
    project_root
        .canonicalize()
        .unwrap_or_else(|_| project_root.to_path_buf())
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project")
        .to_string()
}
