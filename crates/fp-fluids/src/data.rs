//! Catalog data model.
//!
//! Field names follow the on-disk catalog keys; everything not listed
//! here is ignored on load. All numeric fields default to zero and all
//! lists to empty so partial records still deserialize; consumers are
//! responsible for treating a zero critical value as "absent".

use serde::Deserialize;

/// One fluid record, immutable after load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FluidData {
    #[serde(rename = "INFO", default)]
    pub info: Info,
    #[serde(rename = "STATES", default)]
    pub states: States,
    /// Ordered list of equations of state; the first entry is the default.
    #[serde(rename = "EOS", default)]
    pub eos: Vec<Eos>,
    #[serde(rename = "ANCILLARIES", default)]
    pub ancillaries: Ancillaries,
    #[serde(rename = "TRANSPORT", default)]
    pub transport: Transport,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(rename = "NAME", default)]
    pub name: String,
    #[serde(rename = "FORMULA", default)]
    pub formula: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct States {
    #[serde(default)]
    pub critical: StatePoint,
    #[serde(default)]
    pub triple_liquid: StatePoint,
    #[serde(default)]
    pub triple_vapor: StatePoint,
}

/// A single point on the phase surface as stored in the catalog.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatePoint {
    #[serde(rename = "T", default)]
    pub t: f64,
    #[serde(default)]
    pub p: f64,
    #[serde(default)]
    pub rhomolar: f64,
    #[serde(default)]
    pub hmolar: f64,
    #[serde(default)]
    pub smolar: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Eos {
    #[serde(rename = "STATES", default)]
    pub states: EosStates,
    #[serde(rename = "T_max", default)]
    pub t_max: f64,
    #[serde(rename = "Ttriple", default)]
    pub t_triple: f64,
    #[serde(default)]
    pub acentric: f64,
    #[serde(default)]
    pub alpha0: Vec<Alpha0TermData>,
    #[serde(default)]
    pub alphar: Vec<AlphaRTermData>,
    #[serde(default)]
    pub gas_constant: f64,
    #[serde(default)]
    pub molar_mass: f64,
    #[serde(rename = "p_max", default)]
    pub p_max: f64,
}

/// Reducing/critical overrides local to one EOS block. Either may be
/// absent; zero values fall through to the top-level `STATES.critical`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EosStates {
    #[serde(default)]
    pub reducing: StatePoint,
    #[serde(default)]
    pub critical: StatePoint,
}

/// Ideal-gas Helmholtz term as stored in the catalog. Term types the
/// engine does not model deserialize to `Unknown` and are skipped.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Alpha0TermData {
    IdealGasHelmholtzLead {
        #[serde(default)]
        a1: f64,
        #[serde(default)]
        a2: f64,
    },
    IdealGasHelmholtzLogTau {
        #[serde(default)]
        a: f64,
    },
    IdealGasHelmholtzPlanckEinstein {
        #[serde(default)]
        n: Vec<f64>,
        #[serde(default)]
        t: Vec<f64>,
    },
    #[serde(other)]
    Unknown,
}

/// Residual Helmholtz term as stored in the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum AlphaRTermData {
    ResidualHelmholtzPower {
        #[serde(default)]
        n: Vec<f64>,
        #[serde(default)]
        d: Vec<f64>,
        #[serde(default)]
        t: Vec<f64>,
        /// Empty means no exponential damping on any term.
        #[serde(default)]
        l: Vec<f64>,
    },
    ResidualHelmholtzGaussian {
        #[serde(default)]
        n: Vec<f64>,
        #[serde(default)]
        d: Vec<f64>,
        #[serde(default)]
        t: Vec<f64>,
        #[serde(default)]
        eta: Vec<f64>,
        #[serde(default)]
        epsilon: Vec<f64>,
        #[serde(default)]
        beta: Vec<f64>,
        #[serde(default)]
        gamma: Vec<f64>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ancillaries {
    #[serde(rename = "pS", default)]
    pub p_s: AncillaryCurve,
    #[serde(rename = "rhoL", default)]
    pub rho_l: AncillaryCurve,
    #[serde(rename = "rhoV", default)]
    pub rho_v: AncillaryCurve,
    #[serde(default)]
    pub surface_tension: SurfaceTensionData,
}

/// Closed-form saturation approximation; see `ancillary.rs` for the
/// supported curve shapes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AncillaryCurve {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "Tmin", default)]
    pub t_min: f64,
    #[serde(rename = "Tmax", default)]
    pub t_max: f64,
    #[serde(default)]
    pub reducing_value: f64,
    /// Reducing temperature; zero falls back to `t_max`.
    #[serde(rename = "T_r", default)]
    pub t_r: f64,
    #[serde(default)]
    pub using_tau_r: bool,
    #[serde(default)]
    pub n: Vec<f64>,
    #[serde(default)]
    pub t: Vec<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Transport {
    #[serde(default)]
    pub viscosity: ViscosityData,
    #[serde(default)]
    pub conductivity: ConductivityData,
    #[serde(default)]
    pub surface_tension: SurfaceTensionData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViscosityData {
    /// Non-empty marks a fluid whose correlation exists only as
    /// special-cased code upstream; such fluids are rejected.
    #[serde(default)]
    pub hardcoded: String,
    #[serde(default)]
    pub dilute: Option<ViscosityDilute>,
    #[serde(default)]
    pub higher_order: Option<ViscosityHigher>,
    #[serde(default)]
    pub sigma_eta: f64,
    #[serde(default)]
    pub epsilon_over_k: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViscosityDilute {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "C", default)]
    pub c: f64,
    #[serde(default)]
    pub a: Vec<f64>,
    #[serde(default)]
    pub molar_mass: f64,
    #[serde(default)]
    pub t: Vec<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViscosityHigher {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "T_reduce", default)]
    pub t_reduce: f64,
    #[serde(rename = "rhomolar_reduce", default)]
    pub rhomolar_reduce: f64,
    #[serde(default)]
    pub a: Vec<f64>,
    #[serde(default)]
    pub d1: Vec<f64>,
    #[serde(default)]
    pub d2: Vec<f64>,
    #[serde(default)]
    pub t1: Vec<f64>,
    #[serde(default)]
    pub t2: Vec<f64>,
    #[serde(default)]
    pub f: Vec<f64>,
    #[serde(default)]
    pub g: Vec<f64>,
    #[serde(default)]
    pub gamma: Vec<f64>,
    #[serde(default)]
    pub h: Vec<f64>,
    #[serde(default)]
    pub l: Vec<f64>,
    #[serde(default)]
    pub p: Vec<f64>,
    #[serde(default)]
    pub q: Vec<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConductivityData {
    #[serde(default)]
    pub hardcoded: String,
    #[serde(default)]
    pub dilute: Option<ConductivityDilute>,
    #[serde(default)]
    pub residual: Option<ConductivityResidual>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConductivityDilute {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "A", default)]
    pub a: Vec<f64>,
    #[serde(rename = "B", default)]
    pub b: Vec<f64>,
    #[serde(default)]
    pub t: Vec<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConductivityResidual {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "A", default)]
    pub a: Vec<f64>,
    #[serde(default)]
    pub d: Vec<f64>,
    #[serde(default)]
    pub gamma: Vec<f64>,
    #[serde(default)]
    pub l: Vec<f64>,
    #[serde(default)]
    pub t: Vec<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurfaceTensionData {
    #[serde(default)]
    pub a: Vec<f64>,
    #[serde(default)]
    pub n: Vec<f64>,
    #[serde(rename = "Tc", default)]
    pub t_c: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_term_types_deserialize_to_unknown() {
        let json = r#"[
            {"type": "IdealGasHelmholtzLead", "a1": -6.0, "a2": 5.0},
            {"type": "IdealGasHelmholtzEnthalpyEntropyOffset", "a1": 1.0, "a2": 2.0}
        ]"#;
        let terms: Vec<Alpha0TermData> = serde_json::from_str(json).unwrap();
        assert_eq!(terms.len(), 2);
        assert!(matches!(
            terms[0],
            Alpha0TermData::IdealGasHelmholtzLead { .. }
        ));
        assert!(matches!(terms[1], Alpha0TermData::Unknown));
    }

    #[test]
    fn power_term_without_l_defaults_empty() {
        let json = r#"{"type": "ResidualHelmholtzPower", "n": [0.1], "d": [1.0], "t": [0.5]}"#;
        let term: AlphaRTermData = serde_json::from_str(json).unwrap();
        match term {
            AlphaRTermData::ResidualHelmholtzPower { l, n, .. } => {
                assert!(l.is_empty());
                assert_eq!(n, vec![0.1]);
            }
            _ => panic!("expected a Power term"),
        }
    }

    #[test]
    fn unknown_top_level_keys_are_ignored() {
        let json = r#"{
            "INFO": {"NAME": "Testane", "FORMULA": "T2"},
            "CAS": "000-00-0",
            "STATES": {"critical": {"T": 150.0, "p": 4.0e6, "rhomolar": 11000.0}}
        }"#;
        let fluid: FluidData = serde_json::from_str(json).unwrap();
        assert_eq!(fluid.info.name, "Testane");
        assert_eq!(fluid.states.critical.t, 150.0);
        assert!(fluid.eos.is_empty());
    }
}
