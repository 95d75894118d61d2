//! Transport property errors.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur during transport property evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// The catalog marks this fluid's correlation as hardcoded
    /// upstream; the generic term families do not apply.
    #[error("Hardcoded {property} correlation for {fluid} is not implemented")]
    NotImplemented {
        property: &'static str,
        fluid: String,
    },

    /// The term block declares a model shape the engine does not know.
    #[error("Unknown {property} model '{model}'")]
    UnknownModel {
        property: &'static str,
        model: String,
    },

    /// Surface tension is only defined along the saturation boundary.
    #[error("Surface tension undefined at {t_k} K above the critical temperature {t_c} K")]
    Supercritical { t_k: f64, t_c: f64 },

    /// The fluid record carries no data for this property.
    #[error("No {property} data for {fluid}")]
    MissingData {
        property: &'static str,
        fluid: String,
    },
}
