//! Formatter collaborator.
//!
//! The generated output is handed to `cargo fmt` after writing. Formatting
//! is cosmetic; the pipeline driver logs a failure and moves on.

use std::path::Path;
use std::process::Command;

/// Formats a generated file in place by invoking `cargo fmt` on it.
///
/// The command runs from the file's own directory so the formatter resolves
/// the workspace that owns the output, not whatever directory the generator
/// was invoked from.
///
/// # Errors
/// Returns an error if the file cannot be resolved, the command cannot be
/// spawned, or the formatter exits non-zero.
pub fn format_file(path: &Path) -> std::io::Result<()> {
    let file = std::fs::canonicalize(path)?;
    let dir = file.parent().unwrap_or(Path::new("."));

    let status = Command::new("cargo")
        .arg("fmt")
        .arg("--")
        .arg(&file)
        .current_dir(dir)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!(
            "cargo fmt exited with {}",
            status
        )))
    }
}
