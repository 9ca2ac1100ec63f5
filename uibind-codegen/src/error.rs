//! Error types for the generation pipeline.

use std::path::{Path, PathBuf};
use thiserror::Error;
use uibind_descriptor::{DescriptorError, ParseError, ValidationError};

/// Error type for generation pipeline operations.
///
/// Every variant names the file or directory it failed on; the run aborts
/// before anything is written, so prior output is preserved.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Descriptor directory could not be read.
    #[error("cannot read descriptor directory '{dir}': {source}")]
    Scan {
        /// Directory that was being scanned.
        dir: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Descriptor file could not be read.
    #[error("cannot read descriptor '{file}': {source}")]
    Read {
        /// Descriptor path.
        file: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Descriptor file is malformed.
    #[error("cannot parse descriptor '{file}': {source}")]
    Parse {
        /// Descriptor path.
        file: PathBuf,
        /// Underlying parse error.
        source: ParseError,
    },

    /// Descriptor file declares objects the generator must reject.
    #[error("invalid descriptor '{file}': {source}")]
    Validation {
        /// Descriptor path.
        file: PathBuf,
        /// Underlying validation error.
        source: ValidationError,
    },

    /// Output file could not be written.
    #[error("cannot write output '{path}': {source}")]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Creates a scan error for the given directory.
    pub fn scan(dir: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Scan {
            dir: dir.into(),
            source,
        }
    }

    /// Creates a read error for the given descriptor.
    pub fn read(file: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            file: file.into(),
            source,
        }
    }

    /// Creates a validation error for the given descriptor.
    pub fn validation(file: impl Into<PathBuf>, source: ValidationError) -> Self {
        Self::Validation {
            file: file.into(),
            source,
        }
    }

    /// Creates a write error for the given output path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Attaches the offending descriptor path to an extraction failure.
    pub fn descriptor(file: &Path, source: DescriptorError) -> Self {
        match source {
            DescriptorError::Parse(e) => Self::Parse {
                file: file.to_path_buf(),
                source: e,
            },
            DescriptorError::Validation(e) => Self::Validation {
                file: file.to_path_buf(),
                source: e,
            },
        }
    }
}
