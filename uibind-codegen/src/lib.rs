//! # uibind Codegen
//!
//! Rust code generation from GTK UI descriptor files.
//!
//! This crate provides:
//! - Builder wrapper generation from `.ui` descriptors
//! - Deterministic descriptor scanning and output concatenation
//! - The fixed-path pipeline driver behind the `uibind` binary
//! - Best-effort output formatting through `cargo fmt`

pub mod error;
pub mod format;
pub mod generator;
pub mod scan;
pub mod wrapper;

pub use error::CodegenError;
pub use generator::{GenerateSummary, Generator};
pub use wrapper::{WrapperGenerator, WrapperSpec, support_block};

use std::path::Path;

use uibind_descriptor::{check_unique_ids, extract_objects, sort_by_id};

/// Generates one builder wrapper from descriptor XML content.
///
/// # Arguments
/// * `type_name` - Name of the emitted wrapper struct
/// * `embed_path` - Descriptor path relative to the data directory
/// * `xml` - Descriptor content
///
/// # Returns
/// The rendered wrapper block. The block refers to the shared diagnostic
/// type rendered by [`support_block`], which a complete output file includes
/// once.
///
/// # Errors
/// Returns `CodegenError` if the content cannot be parsed or validated.
pub fn generate_from_xml(
    type_name: &str,
    embed_path: &str,
    xml: &str,
) -> Result<String, CodegenError> {
    let mut objects =
        extract_objects(xml).map_err(|e| CodegenError::descriptor(Path::new(embed_path), e))?;
    check_unique_ids(&objects).map_err(|e| CodegenError::validation(embed_path, e))?;
    sort_by_id(&mut objects);

    let spec = WrapperSpec::new(type_name, embed_path, objects);
    Ok(WrapperGenerator::new(&spec).generate())
}

/// Generates one builder wrapper from a descriptor file.
///
/// The wrapper struct's name derives from the file stem (`main_window.ui`
/// becomes `MainWindow`).
///
/// # Arguments
/// * `path` - Descriptor file to read
/// * `embed_path` - Descriptor path relative to the data directory
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or validation fails.
pub fn generate_from_file(path: &Path, embed_path: &str) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path).map_err(|e| CodegenError::read(path, e))?;
    generate_from_xml(&generator::wrapper_name(path), embed_path, &xml)
}
