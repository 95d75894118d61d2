//! Fluid catalog errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while resolving and loading fluid records.
#[derive(Error, Debug)]
pub enum FluidError {
    /// Name missing from the alias registry and no matching file on disk.
    #[error("Fluid '{name}' not found in catalog")]
    NotFound { name: String },

    /// Catalog file exists but could not be read.
    #[error("Failed to read fluid file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog file is not a valid fluid record.
    #[error("Failed to parse fluid file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
