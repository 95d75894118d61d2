//! fp-solver: root finding for flash inversions.
//!
//! Contains:
//! - brent (1-D bracketed root finding, inverse-quadratic + bisection)
//! - newton (2-D Newton-Raphson on residuals with an analytic Jacobian)
//! - error (shared solver error types)

pub mod brent;
pub mod error;
pub mod newton;

pub use brent::brent;
pub use error::{SolverError, SolverResult};
pub use newton::{newton2d, Newton2dConfig};
