//! # uibind
//!
//! Statically-typed GTK builder bindings generated from `.ui` descriptors.
//!
//! uibind scans a directory of GtkBuilder XML descriptors and generates one
//! wrapper struct per file, with one typed accessor per named object, so a
//! missing or renamed object surfaces at compile time instead of as a
//! stringly-typed lookup failure at runtime.
//!
//! ## Features
//!
//! - **One wrapper per descriptor** - `data/ui/main_window.ui` becomes
//!   `MainWindow`
//! - **Typed accessors** - `<object class="GtkButton" id="back_button"/>`
//!   becomes `pub fn back_button(&self) -> gtk::Button`
//! - **Deterministic output** - wrappers in lexicographic file order,
//!   accessors in ascending id order, byte-identical across runs
//! - **Fail-fast validation** - malformed XML, duplicate ids and classless
//!   objects abort the run and leave the previous output untouched
//!
//! ## Quick Start
//!
//! ```ignore
//! use uibind::prelude::*;
//!
//! // Regenerate src/ui/builder.rs from data/ui/*.ui.
//! let summary = Generator::default().run()?;
//! println!("bound {} objects", summary.objects);
//! ```
//!
//! ## Crate Organization
//!
//! - [`descriptor`] - Descriptor parsing, naming convention and validation
//! - [`codegen`] - Wrapper rendering and the generation pipeline

pub mod prelude;

/// Descriptor parsing, naming convention and validation.
pub mod descriptor {
    pub use uibind_descriptor::*;
}

/// Wrapper rendering and the generation pipeline.
pub mod codegen {
    pub use uibind_codegen::*;
}

// Re-export commonly used items at the crate root
pub use uibind_codegen::{CodegenError, GenerateSummary, Generator};
pub use uibind_descriptor::{DescriptorError, ObjectDeclaration, ParseError, ValidationError};
