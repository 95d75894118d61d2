//! Error types for root-finding operations.

use thiserror::Error;

/// Result type for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;

/// Errors that can occur during root finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Brent precondition unmet: f(a) and f(b) have the same sign.
    #[error("Root not bracketed on [{a:e}, {b:e}]")]
    NotBracketed { a: f64, b: f64 },

    /// Iteration cap reached without meeting the convergence test.
    #[error("Iteration limit ({limit}) reached without convergence")]
    IterationLimit { limit: usize },

    /// Newton step undefined: |det J| below the singularity floor.
    #[error("Singular Jacobian at iteration {iteration} (x={x:e}, y={y:e})")]
    SingularJacobian { iteration: usize, x: f64, y: f64 },

    /// An iterate left the representable range.
    #[error("Diverged to a non-finite iterate at iteration {iteration}")]
    Diverged { iteration: usize },
}
