//! Shared synthetic fluid for flash tests.
//!
//! "Testane" is a minimal but physically consistent record: a
//! diatomic-like ideal part, one attractive residual term, and
//! closed-form saturation ancillaries, so every expected value in the
//! tests can be computed by hand.

use fp_fluids::{
    Alpha0TermData, AlphaRTermData, AncillaryCurve, Eos, FluidData, Info, StatePoint, States,
};

pub const R: f64 = 8.314462618;
pub const T_CRIT: f64 = 150.0;
pub const P_CRIT: f64 = 4.0e6;
pub const RHO_CRIT: f64 = 11000.0;

pub fn testane() -> FluidData {
    let mut fluid = FluidData {
        info: Info {
            name: "Testane".to_string(),
            formula: "T2".to_string(),
        },
        states: States {
            critical: StatePoint {
                t: T_CRIT,
                p: P_CRIT,
                rhomolar: RHO_CRIT,
                ..Default::default()
            },
            triple_liquid: StatePoint {
                t: 65.0,
                p: 1500.0,
                rhomolar: 30000.0,
                ..Default::default()
            },
            triple_vapor: StatePoint {
                t: 65.0,
                p: 1500.0,
                rhomolar: 3.0,
                ..Default::default()
            },
        },
        eos: vec![Eos {
            gas_constant: R,
            molar_mass: 0.028,
            t_max: 600.0,
            t_triple: 65.0,
            p_max: 1.0e8,
            alpha0: vec![
                Alpha0TermData::IdealGasHelmholtzLead { a1: 0.0, a2: 0.0 },
                Alpha0TermData::IdealGasHelmholtzLogTau { a: 2.5 },
            ],
            alphar: vec![AlphaRTermData::ResidualHelmholtzPower {
                n: vec![-0.5],
                d: vec![1.0],
                t: vec![1.0],
                l: vec![0.0],
            }],
            ..Default::default()
        }],
        ..Default::default()
    };

    fluid.ancillaries.p_s = AncillaryCurve {
        kind: "pL".to_string(),
        t_min: 65.0,
        t_max: T_CRIT,
        reducing_value: P_CRIT,
        t_r: T_CRIT,
        n: vec![-6.0],
        t: vec![1.0],
        ..Default::default()
    };
    fluid.ancillaries.rho_l = AncillaryCurve {
        kind: "rhoLnoexp".to_string(),
        t_min: 65.0,
        t_max: T_CRIT,
        reducing_value: RHO_CRIT,
        t_r: T_CRIT,
        n: vec![2.0],
        t: vec![0.5],
        ..Default::default()
    };
    fluid.ancillaries.rho_v = AncillaryCurve {
        kind: "rhoV".to_string(),
        t_min: 65.0,
        t_max: T_CRIT,
        reducing_value: RHO_CRIT,
        t_r: T_CRIT,
        n: vec![-4.0],
        t: vec![0.5],
        ..Default::default()
    };

    fluid
}
