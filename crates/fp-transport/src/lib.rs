//! fp-transport: transport property correlations.
//!
//! Provides:
//! - Viscosity: collision-integral dilute part plus a modified
//!   Batschinski-Hildebrand residual
//! - Thermal conductivity: rational-polynomial dilute part plus a
//!   polynomial-exponential residual
//! - Surface tension along the saturation boundary
//!
//! All operations take a pre-solved (T, rho); none of them touch the
//! EOS. Fluids whose catalog entry flags a `hardcoded` upstream
//! correlation are rejected rather than silently approximated.

pub mod conductivity;
pub mod error;
pub mod surface_tension;
pub mod viscosity;

pub use conductivity::conductivity;
pub use error::{TransportError, TransportResult};
pub use surface_tension::surface_tension;
pub use viscosity::viscosity;
