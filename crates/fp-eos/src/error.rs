//! EOS evaluation errors.

use thiserror::Error;

/// Result type for EOS operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur while compiling a fluid record into an
/// evaluatable state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// The record lacks data the EOS cannot work without.
    #[error("Ill-formed fluid: {what}")]
    IllFormedFluid { what: &'static str },
}
