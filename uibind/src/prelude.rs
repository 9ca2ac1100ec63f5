//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use uibind::prelude::*;
//! ```

// Descriptor types
pub use uibind_descriptor::{
    DescriptorError, ObjectDeclaration, ParseError, ValidationError, check_unique_ids,
    extract_objects, resolve_class, sort_by_id, to_pascal_case,
};

// Generation types
pub use uibind_codegen::{
    CodegenError, GenerateSummary, Generator, WrapperGenerator, WrapperSpec, generate_from_file,
    generate_from_xml, support_block,
};
