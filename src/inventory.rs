use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;

/// Version-control metadata excluded from every inventory scan
const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git",
    ".git/**",
    "**/.git/**",
    ".hg",
    ".hg/**",
    "**/.hg/**",
    ".svn",
    ".svn/**",
    "**/.svn/**",
];

/// Builds the glob set matching version-control paths.
fn build_ignore_set() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Immutable snapshot of the regular files under a project root.
///
/// Paths are relative to the root and ordered, so every consumer sees the
/// same deterministic view regardless of walk order.
#[derive(Debug)]
pub struct FileInventory {
    files: BTreeSet<PathBuf>,
}

impl FileInventory {
    /// Walks the project root once and records every regular file outside
    /// version-control directories. Symlinks are not followed.
    pub fn scan<P: AsRef<Path>>(project_root: P) -> Result<Self> {
        let project_root = project_root.as_ref();
        let ignore_set = build_ignore_set()?;
        let mut files = BTreeSet::new();

        for dir_entry in WalkDir::new(project_root).into_iter().filter_map(|e| e.ok()) {
            if !dir_entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = dir_entry.path().strip_prefix(project_root) else {
                continue;
            };
            if ignore_set.is_match(relative) {
                log::debug!("Excluding '{}' from inventory", relative.display());
                continue;
            }
            files.insert(relative.to_path_buf());
        }

        log::debug!("Inventory holds {} files", files.len());
        Ok(Self { files })
    }

    /// Builds an inventory directly from relative paths.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { files: paths.into_iter().map(Into::into).collect() }
    }

    /// Whether any file in the tree has exactly this file name.
    pub fn contains_file_named(&self, name: &str) -> bool {
        self.files
            .iter()
            .any(|path| path.file_name().and_then(|n| n.to_str()) == Some(name))
    }

    /// Whether any relative path string matches the regex.
    pub fn any_path_matches(&self, pattern: &Regex) -> bool {
        self.files
            .iter()
            .filter_map(|path| path.to_str())
            .any(|path| pattern.is_match(path))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
