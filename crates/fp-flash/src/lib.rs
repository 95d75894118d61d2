//! fp-flash: inversion of state-variable pairs to (T, rho).
//!
//! Provides:
//! - Saturation helpers built on the ancillary curves (P_sat, T_sat,
//!   saturated liquid/vapor densities)
//! - (T, P) density solve with phase gating and bracketed fallbacks
//! - (T, H) density solve via log-grid scan over a non-monotonic
//!   objective
//! - (P, H) and (P, S) two-dimensional Newton flashes
//! - (T, Q) and (P, Q) saturated-mixture states
//!
//! Every flash builds a private `State`, so callers may run flashes
//! concurrently as long as each call site owns its inputs; the shared
//! `FluidData` is only read.

pub mod error;
pub mod ph;
pub mod ps;
pub mod quality;
pub mod saturation;
pub mod th;
pub mod tp;

#[cfg(test)]
pub(crate) mod testfluid;

pub use error::{FlashError, FlashResult};
pub use ph::flash_ph;
pub use ps::flash_ps;
pub use quality::{flash_pq, flash_tq};
pub use saturation::{psat, rho_l, rho_v, tsat};
pub use th::flash_th;
pub use tp::flash_tp;
