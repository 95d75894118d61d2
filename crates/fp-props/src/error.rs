//! Query-surface errors.

use fp_eos::EosError;
use fp_flash::FlashError;
use fp_fluids::FluidError;
use fp_transport::TransportError;
use thiserror::Error;

/// Result type for property queries.
pub type PropsResult<T> = Result<T, PropsError>;

/// Errors surfaced by the query layer. Lower layers keep their own
/// kinds; this enum only adds the query-level failures and passes the
/// rest through unchanged.
#[derive(Error, Debug)]
pub enum PropsError {
    #[error("Input pair ({name1}, {name2}) is not supported")]
    UnsupportedPair { name1: String, name2: String },

    #[error("Output '{output}' is not supported")]
    UnsupportedOutput { output: String },

    #[error("Input values must be finite")]
    NonFiniteInput,

    #[error("Quality undefined at {t_k} K at or above the critical temperature {t_c} K")]
    Supercritical { t_k: f64, t_c: f64 },

    #[error(transparent)]
    Fluid(#[from] FluidError),

    #[error(transparent)]
    Eos(#[from] EosError),

    #[error(transparent)]
    Flash(#[from] FlashError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
