//! Error types for descriptor parsing and validation.

use thiserror::Error;

/// Error type for descriptor parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for descriptor validation.
///
/// Each variant carries the offending value; the pipeline attaches the
/// descriptor path when it reports the failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// An `<object>` carries an id but no class attribute.
    #[error("object with id '{id}' has no class attribute")]
    MissingClass {
        /// Object id.
        id: String,
    },

    /// A class name too short to carry a namespace prefix plus a type name.
    #[error("class '{class}' is too short to carry a namespace prefix and a type name")]
    ClassTooShort {
        /// Class attribute value.
        class: String,
    },

    /// The same object id declared twice within one descriptor.
    #[error("duplicate object id '{id}'")]
    DuplicateId {
        /// Object id.
        id: String,
    },
}

/// Error type for descriptor extraction.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<quick_xml::Error> for DescriptorError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Parse(ParseError::Xml(e))
    }
}

impl From<std::str::Utf8Error> for DescriptorError {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::Parse(ParseError::Utf8(e))
    }
}
