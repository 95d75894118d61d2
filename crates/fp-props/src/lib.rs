//! fp-props: user-facing property queries.
//!
//! Provides:
//! - `prop_si`: the single-call query surface mapping two named state
//!   variables plus a fluid name to any supported output property
//! - `StateSummary`: a typed batch of all state properties for one
//!   solved state
//!
//! All inputs and outputs are SI molar (K, Pa, mol/m3, J/mol,
//! J/(mol K), Pa s, W/(m K), N/m). Queries never panic; every failure
//! surfaces as a `PropsError`.
//!
//! # Example
//!
//! ```no_run
//! use fp_props::prop_si;
//!
//! let rho = prop_si("D", "T", 300.0, "P", 101_325.0, "Nitrogen").unwrap();
//! println!("Density: {rho} mol/m3");
//! ```

pub mod error;
pub mod query;
pub mod summary;

pub use error::{PropsError, PropsResult};
pub use query::{prop_si, prop_si_in, prop_si_with};
pub use summary::{compute_state_summary, InputPair, StateSummary};
