//! Flash errors.

use fp_eos::EosError;
use fp_solver::SolverError;
use thiserror::Error;

/// Result type for flash operations.
pub type FlashResult<T> = Result<T, FlashError>;

/// Errors that can occur during flash inversion. Variants carrying a
/// `context` string name the target variables and the fluid.
#[derive(Error, Debug)]
pub enum FlashError {
    /// Temperature outside the validity band of an ancillary curve.
    #[error("Temperature {t_k} K out of ancillary range [{t_min}, {t_max}] K")]
    TemperatureOutOfRange { t_k: f64, t_min: f64, t_max: f64 },

    /// Pressure outside the saturation curve endpoints.
    #[error("Pressure {p_pa} Pa out of saturation range [{p_min}, {p_max}] Pa")]
    PressureOutOfRange { p_pa: f64, p_min: f64, p_max: f64 },

    /// Saturation properties requested above the critical point.
    #[error("Saturation state undefined at {t_k} K (critical temperature {t_c} K)")]
    Supercritical { t_k: f64, t_c: f64 },

    /// The fluid record lacks a usable saturation ancillary.
    #[error("Missing saturation ancillary: {what}")]
    MissingAncillary { what: &'static str },

    /// Every bracketing attempt failed.
    #[error("No density root found for {context}")]
    NoRoot { context: String },

    /// The Newton flash failed on both the documented seeds.
    #[error("Flash did not converge for {context}")]
    Failed { context: String },

    #[error("{context}: {source}")]
    Solver {
        context: String,
        source: SolverError,
    },

    #[error(transparent)]
    Eos(#[from] EosError),
}
