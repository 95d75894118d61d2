//! fp-eos: Helmholtz-energy equation of state evaluation.
//!
//! Provides:
//! - The alpha0/alphar term families and their analytic derivatives
//! - A one-pass energy evaluator returning all six derivative sums
//! - `State`: (T, rho) plus cached derivatives, property accessors,
//!   and the partial derivatives used by flash Jacobians
//!
//! The dimensionless Helmholtz energy is alpha(tau, delta) =
//! alpha0 + alphar with tau = T_c/T and delta = rho/rho_c. All
//! thermodynamic properties follow from alpha and its first and
//! second partials through exact identities; nothing here is
//! differentiated numerically.

pub mod alpha0;
pub mod alphar;
pub mod energy;
pub mod error;
pub mod state;

pub use alpha0::IdealTerm;
pub use alphar::ResidualTerm;
pub use energy::{AlphaDerivs, HelmholtzEnergy};
pub use error::{EosError, EosResult};
pub use state::State;
