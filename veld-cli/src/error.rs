//! Error types for the generator.
//!
//! Generation-time failures are fatal and propagate once to the invoking
//! command. Extraction-time leniency is deliberate and handled inside
//! [`crate::extract`] by skipping or truncating, never by raising.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations.
pub type GenResult<T> = Result<T, GenError>;

/// Main error type for a generation run.
#[derive(Debug, Error)]
pub enum GenError {
    /// Input file could not be read.
    #[error("failed to read {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not parseable Rust source.
    #[error("failed to parse {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// File parsed but contained no recognizable schema declaration.
    #[error("no validation schemas found in {file}")]
    NoSchemaFound { file: PathBuf },

    /// Emission failed for one schema; the rest of the run is aborted.
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Error while emitting one generated file.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Failed to create the output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a generated file.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
