//! fp-fluids: fluid catalog handling for fluidprop.
//!
//! Provides:
//! - Catalog data model (`FluidData` and friends, serde-deserialized)
//! - JSON loader with name resolution against the alias registry
//! - Ancillary saturation-curve evaluation
//!
//! The catalog is a file-per-fluid collection of JSON records whose
//! layout mirrors the CoolProp fluid files: `INFO`, `STATES`, `EOS`,
//! `ANCILLARIES`, and `TRANSPORT` blocks. Unknown keys and unknown
//! term types are tolerated and ignored; the data model only captures
//! what the property engine consumes.
//!
//! `FluidData` is immutable after load and safe to share by reference
//! across threads; every downstream `State` borrows it.

pub mod ancillary;
pub mod data;
pub mod error;
pub mod loader;
pub mod registry;

// Re-exports for ergonomics
pub use data::{
    Alpha0TermData, AlphaRTermData, Ancillaries, AncillaryCurve, ConductivityData,
    ConductivityDilute, ConductivityResidual, Eos, EosStates, FluidData, Info, StatePoint, States,
    SurfaceTensionData, Transport, ViscosityData, ViscosityDilute, ViscosityHigher,
};
pub use error::{FluidError, FluidResult};
pub use loader::{load_fluid, load_fluid_by_name};
pub use registry::{fluid_filename, list_available_fluids, FluidRegistryEntry};
