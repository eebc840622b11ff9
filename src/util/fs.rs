//! Filesystem utilities.
//!
//! Plan generation only ever lists single directories; recursive traversal
//! is intentionally not offered here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Check whether a path exists and is a directory.
pub fn dir_exists(path: &Path) -> bool {
    path.is_dir()
}

/// List the regular files in one directory whose extension matches one of
/// the given suffixes (case-sensitive), sorted by file name.
///
/// Subdirectory entries are skipped, never descended into. Sorting the
/// listing makes the output independent of readdir order, which plan
/// determinism relies on.
pub fn list_source_files(dir: &Path, extensions: &[&str]) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };

        let matches = Path::new(name)
            .extension()
            .is_some_and(|ext| extensions.iter().any(|e| ext == *e));
        if matches {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}
