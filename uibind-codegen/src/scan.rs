//! Descriptor discovery.

use std::path::{Path, PathBuf};

/// Descriptor file extension.
const UI_EXTENSION: &str = "ui";

/// Returns the `.ui` descriptor files in `dir`, sorted lexicographically.
///
/// The concatenation order of the generated output derives from this
/// ordering, so identical directory contents must always yield the same
/// sequence. Subdirectories and non-descriptor entries are ignored; an
/// empty match set is not an error.
///
/// # Errors
/// Returns the underlying IO error if the directory cannot be read.
pub fn scan_descriptors(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if path.extension().is_none_or(|ext| ext != UI_EXTENSION) {
            continue;
        }

        files.push(path);
    }

    files.sort();

    Ok(files)
}
