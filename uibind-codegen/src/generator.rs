//! Pipeline driver.
//!
//! Orchestrates a whole generation run: scan the descriptor directory,
//! extract and validate every file, render the wrapper blocks and write the
//! concatenated output in one shot, then hand the file to the formatter.

use std::fs;
use std::path::{Path, PathBuf};

use uibind_descriptor::{check_unique_ids, extract_objects, sort_by_id, to_pascal_case};

use crate::error::CodegenError;
use crate::format::format_file;
use crate::scan::scan_descriptors;
use crate::wrapper::{WrapperGenerator, WrapperSpec, support_block};

/// Default data directory, relative to the invocation directory.
const DEFAULT_DATA_DIR: &str = "data";

/// Default path the generated bindings are written to.
const DEFAULT_OUTPUT: &str = "src/ui/builder.rs";

/// Subdirectory of the data directory holding the descriptors.
const UI_DIR: &str = "ui";

/// Pipeline driver binding a descriptor directory to one generated file.
///
/// Descriptors are read from `<data_dir>/ui/*.ui`. [`Default`] supplies the
/// fixed paths the binary uses; explicit paths exist so tests and build
/// scripts can point the driver at other trees.
#[derive(Debug, Clone)]
pub struct Generator {
    /// Data directory holding the `ui/` descriptor subdirectory.
    pub data_dir: PathBuf,
    /// Path the concatenated bindings are written to.
    pub output: PathBuf,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, DEFAULT_OUTPUT)
    }
}

impl Generator {
    /// Creates a generator with explicit paths.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output: output.into(),
        }
    }

    /// Runs the pipeline: scan, extract, validate, render, write, format.
    ///
    /// Every descriptor is rendered before anything is written, so a failing
    /// descriptor leaves the previous output untouched. Zero descriptors
    /// yield an output containing a single newline. The formatter step is
    /// best-effort; its failure is logged and ignored.
    ///
    /// # Errors
    /// Returns a [`CodegenError`] naming the offending file or directory if
    /// the descriptor directory cannot be read, a descriptor cannot be read,
    /// parsed or validated, or the output cannot be written.
    pub fn run(&self) -> Result<GenerateSummary, CodegenError> {
        let ui_dir = self.data_dir.join(UI_DIR);
        let files = scan_descriptors(&ui_dir).map_err(|e| CodegenError::scan(&ui_dir, e))?;

        let mut blocks = Vec::with_capacity(files.len() + 1);
        let mut objects = 0;

        if !files.is_empty() {
            blocks.push(support_block());
        }

        for file in &files {
            let spec = self.wrapper_spec(file)?;
            tracing::debug!(
                "Rendering {} with {} objects from {}",
                spec.name,
                spec.objects.len(),
                file.display()
            );
            objects += spec.objects.len();
            blocks.push(WrapperGenerator::new(&spec).generate());
        }

        let mut content = blocks.join("\n\n");
        content.push('\n');

        self.write_output(&content)?;

        if let Err(e) = format_file(&self.output) {
            tracing::warn!("Formatter skipped for {}: {}", self.output.display(), e);
        }

        let summary = GenerateSummary {
            files: files.len(),
            objects,
            output: self.output.clone(),
        };
        tracing::info!(
            "Bound {} objects from {} descriptors into {}",
            summary.objects,
            summary.files,
            summary.output.display()
        );

        Ok(summary)
    }

    /// Builds the wrapper spec for one descriptor file.
    fn wrapper_spec(&self, file: &Path) -> Result<WrapperSpec, CodegenError> {
        let xml = fs::read_to_string(file).map_err(|e| CodegenError::read(file, e))?;

        let mut objects = extract_objects(&xml).map_err(|e| CodegenError::descriptor(file, e))?;
        check_unique_ids(&objects).map_err(|e| CodegenError::validation(file, e))?;
        sort_by_id(&mut objects);

        Ok(WrapperSpec::new(
            wrapper_name(file),
            self.embed_path(file),
            objects,
        ))
    }

    /// Returns the descriptor path relative to the data directory, as spliced
    /// into the generated `include_str!` invocation.
    fn embed_path(&self, file: &Path) -> String {
        let relative = file.strip_prefix(&self.data_dir).unwrap_or(file);
        relative.display().to_string()
    }

    /// Writes the concatenated output in one shot, creating parent
    /// directories as needed.
    fn write_output(&self, content: &str) -> Result<(), CodegenError> {
        if let Some(parent) = self.output.parent() {
            fs::create_dir_all(parent).map_err(|e| CodegenError::write(&self.output, e))?;
        }

        fs::write(&self.output, content).map_err(|e| CodegenError::write(&self.output, e))
    }
}

/// Derives the wrapper type name from a descriptor file's stem.
pub(crate) fn wrapper_name(file: &Path) -> String {
    to_pascal_case(&file.file_stem().unwrap_or_default().to_string_lossy())
}

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of descriptor files rendered.
    pub files: usize,
    /// Number of object accessors bound across all wrappers.
    pub objects: usize,
    /// Path the bindings were written to.
    pub output: PathBuf,
}
