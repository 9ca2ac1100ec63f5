//! # uibind Descriptor
//!
//! GtkBuilder descriptor dialect for uibind.
//!
//! This crate provides:
//! - Object extraction from `.ui` descriptor XML
//! - Namespace/type inference from the class-naming convention
//! - Descriptor validation (unique object ids)
//! - Naming helpers for the generated wrapper types

pub mod error;
pub mod extract;
pub mod naming;
pub mod object;
pub mod validation;

pub use error::{DescriptorError, ParseError, ValidationError};
pub use extract::extract_objects;
pub use naming::{NAMESPACE_OVERRIDES, resolve_class, to_pascal_case};
pub use object::{ObjectDeclaration, sort_by_id};
pub use validation::check_unique_ids;
