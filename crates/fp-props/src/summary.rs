//! Typed single-state property batch.

use crate::error::PropsResult;
use crate::query::solve_pair;
use fp_core::units::{jpmol, k, molm3, pa, MolarDensity, MolarEnergy, Pressure, Temperature};
use fp_eos::State;
use fp_fluids::FluidData;
use uom::si::{
    molar_concentration::mole_per_cubic_meter, molar_energy::joule_per_mole, pressure::pascal,
    thermodynamic_temperature::kelvin,
};

/// Molar entropy [J/(mol K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type MolarEntropy = f64;

/// Molar heat capacity [J/(mol K)].
pub type MolarHeatCapacity = f64;

/// The supported input pairs of the query surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPair {
    TD,
    TP,
    TH,
    PH,
    PS,
    TQ,
    PQ,
}

impl InputPair {
    pub fn label(self) -> &'static str {
        match self {
            Self::TD => "T-D",
            Self::TP => "T-P",
            Self::TH => "T-h",
            Self::PH => "P-h",
            Self::PS => "P-s",
            Self::TQ => "T-Q",
            Self::PQ => "P-Q",
        }
    }

    pub fn first_label(self) -> &'static str {
        match self {
            Self::TD | Self::TP | Self::TH | Self::TQ => "Temperature [K]",
            Self::PH | Self::PS | Self::PQ => "Pressure [Pa]",
        }
    }

    pub fn second_label(self) -> &'static str {
        match self {
            Self::TD => "Molar density [mol/m^3]",
            Self::TP => "Pressure [Pa]",
            Self::TH | Self::PH => "Molar enthalpy [J/mol]",
            Self::PS => "Molar entropy [J/(mol K)]",
            Self::TQ | Self::PQ => "Quality [-]",
        }
    }
}

/// All state properties of one solved (T, rho), computed in a single
/// EOS pass. Batching avoids re-running the flash for callers that
/// want more than one property of the same state.
#[derive(Debug, Clone)]
pub struct StateSummary {
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub density: MolarDensity,
    pub enthalpy: MolarEnergy,
    pub internal_energy: MolarEnergy,
    pub entropy: MolarEntropy,
    pub cv: MolarHeatCapacity,
    pub cp: MolarHeatCapacity,
}

impl StateSummary {
    pub fn temperature_k(&self) -> f64 {
        self.temperature.get::<kelvin>()
    }

    pub fn pressure_pa(&self) -> f64 {
        self.pressure.get::<pascal>()
    }

    pub fn density_molm3(&self) -> f64 {
        self.density.get::<mole_per_cubic_meter>()
    }

    pub fn enthalpy_jpmol(&self) -> f64 {
        self.enthalpy.get::<joule_per_mole>()
    }

    pub fn internal_energy_jpmol(&self) -> f64 {
        self.internal_energy.get::<joule_per_mole>()
    }
}

/// Solve one input pair and report every state property at once.
pub fn compute_state_summary(
    fluid: &FluidData,
    pair: InputPair,
    first: f64,
    second: f64,
) -> PropsResult<StateSummary> {
    if !first.is_finite() || !second.is_finite() {
        return Err(crate::error::PropsError::NonFiniteInput);
    }

    let (t, rho) = solve_pair(fluid, pair, first, second)?;

    let mut state = State::new(fluid)?;
    state.update(t, rho);

    Ok(StateSummary {
        temperature: k(state.temperature()),
        pressure: pa(state.pressure()),
        density: molm3(state.density()),
        enthalpy: jpmol(state.molar_enthalpy()),
        internal_energy: jpmol(state.molar_internal_energy()),
        entropy: state.molar_entropy(),
        cv: state.cv(),
        cp: state.cp(),
    })
}
