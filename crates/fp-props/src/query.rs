//! The `prop_si` query surface.

use crate::error::{PropsError, PropsResult};
use crate::summary::InputPair;
use fp_eos::State;
use fp_flash as flash;
use fp_fluids::{load_fluid_by_name, FluidData};
use fp_transport as transport;
use std::path::Path;
use tracing::debug;

const DEFAULT_DATA_DIR: &str = "data";

/// Compute one property of a pure fluid from two named state variables.
///
/// `name1`/`name2` are case-insensitive letters from
/// {T, P, D, H, S, Q}; the accepted pairs are (T,D), (T,P), (T,H),
/// (P,H), (P,S), (P,Q) and (T,Q) in either order. `output` accepts
/// {T, P, D, H, S, U, CV, CP, Q, P_SAT, T_SAT}, their `*MOLAR` long
/// forms, and the transport outputs V/VISCOSITY, L/CONDUCTIVITY and
/// I/SURFACE_TENSION. All values are SI molar.
///
/// The fluid is resolved through the alias registry against the
/// `data` directory; see [`prop_si_in`] for an explicit catalog path.
pub fn prop_si(
    output: &str,
    name1: &str,
    value1: f64,
    name2: &str,
    value2: f64,
    fluid_name: &str,
) -> PropsResult<f64> {
    prop_si_in(
        output,
        name1,
        value1,
        name2,
        value2,
        fluid_name,
        Path::new(DEFAULT_DATA_DIR),
    )
}

/// [`prop_si`] with an explicit catalog directory.
#[allow(clippy::too_many_arguments)]
pub fn prop_si_in(
    output: &str,
    name1: &str,
    value1: f64,
    name2: &str,
    value2: f64,
    fluid_name: &str,
    data_dir: &Path,
) -> PropsResult<f64> {
    let fluid = load_fluid_by_name(fluid_name, data_dir)?;
    prop_si_with(&fluid, output, name1, value1, name2, value2)
}

/// [`prop_si`] against an already-loaded fluid record.
pub fn prop_si_with(
    fluid: &FluidData,
    output: &str,
    name1: &str,
    value1: f64,
    name2: &str,
    value2: f64,
) -> PropsResult<f64> {
    if !value1.is_finite() || !value2.is_finite() {
        return Err(PropsError::NonFiniteInput);
    }

    let (pair, first, second) = parse_pair(name1, value1, name2, value2)?;
    let (t, rho) = solve_pair(fluid, pair, first, second)?;
    debug!(t, rho, pair = pair.label(), "state solved");

    let mut state = State::new(fluid)?;
    state.update(t, rho);

    match output.to_ascii_uppercase().as_str() {
        "T" => Ok(state.temperature()),
        "D" | "DMOLAR" => Ok(state.density()),
        "P" => Ok(state.pressure()),
        "S" | "SMOLAR" => Ok(state.molar_entropy()),
        "H" | "HMOLAR" => Ok(state.molar_enthalpy()),
        "U" | "UMOLAR" => Ok(state.molar_internal_energy()),
        "CV" | "CVMOLAR" => Ok(state.cv()),
        "CP" | "CPMOLAR" => Ok(state.cp()),
        "P_SAT" => Ok(flash::psat(fluid, state.temperature())?),
        "T_SAT" => Ok(flash::tsat(fluid, state.pressure())?),
        "Q" => quality(fluid, &state),
        "V" | "VISCOSITY" => Ok(transport::viscosity(fluid, t, rho)?),
        "L" | "CONDUCTIVITY" => Ok(transport::conductivity(fluid, t, rho)?),
        "I" | "SURFACE_TENSION" => Ok(transport::surface_tension(fluid, t)?),
        other => Err(PropsError::UnsupportedOutput {
            output: other.to_string(),
        }),
    }
}

/// Map two named inputs onto a supported pair, reordering so the pair's
/// canonical first variable comes first.
pub(crate) fn parse_pair(
    name1: &str,
    value1: f64,
    name2: &str,
    value2: f64,
) -> PropsResult<(InputPair, f64, f64)> {
    let n1 = name1.to_ascii_uppercase();
    let n2 = name2.to_ascii_uppercase();

    let ordered = |pair: InputPair, lead: &str| {
        if n1 == lead {
            (pair, value1, value2)
        } else {
            (pair, value2, value1)
        }
    };

    match (n1.as_str(), n2.as_str()) {
        ("T", "D") | ("D", "T") => Ok(ordered(InputPair::TD, "T")),
        ("T", "P") | ("P", "T") => Ok(ordered(InputPair::TP, "T")),
        ("T", "H") | ("H", "T") => Ok(ordered(InputPair::TH, "T")),
        ("P", "H") | ("H", "P") => Ok(ordered(InputPair::PH, "P")),
        ("P", "S") | ("S", "P") => Ok(ordered(InputPair::PS, "P")),
        ("P", "Q") | ("Q", "P") => Ok(ordered(InputPair::PQ, "P")),
        ("T", "Q") | ("Q", "T") => Ok(ordered(InputPair::TQ, "T")),
        _ => Err(PropsError::UnsupportedPair {
            name1: n1.clone(),
            name2: n2.clone(),
        }),
    }
}

/// Invert one input pair to (T, rho) through the flash routines.
pub(crate) fn solve_pair(
    fluid: &FluidData,
    pair: InputPair,
    first: f64,
    second: f64,
) -> PropsResult<(f64, f64)> {
    let solved = match pair {
        InputPair::TD => (first, second),
        InputPair::TP => (first, flash::flash_tp(fluid, first, second)?),
        InputPair::TH => (first, flash::flash_th(fluid, first, second)?),
        InputPair::PH => flash::flash_ph(fluid, first, second)?,
        InputPair::PS => flash::flash_ps(fluid, first, second)?,
        InputPair::PQ => flash::flash_pq(fluid, first, second)?,
        InputPair::TQ => (first, flash::flash_tq(fluid, first, second)?),
    };
    Ok(solved)
}

/// Vapor quality from the solved state and the saturation ancillaries:
/// Q = (v - v_L) / (v_V - v_L).
fn quality(fluid: &FluidData, state: &State) -> PropsResult<f64> {
    let t = state.temperature();
    let t_c = state.critical_temperature();
    if t >= t_c {
        return Err(PropsError::Supercritical { t_k: t, t_c });
    }

    let rho_liq = flash::rho_l(fluid, t);
    let rho_vap = flash::rho_v(fluid, t);
    if rho_liq <= 0.0 || !rho_liq.is_finite() {
        return Err(fp_flash::FlashError::MissingAncillary { what: "rhoL" }.into());
    }
    if rho_vap <= 0.0 || !rho_vap.is_finite() {
        return Err(fp_flash::FlashError::MissingAncillary { what: "rhoV" }.into());
    }

    let v = 1.0 / state.density();
    let v_liq = 1.0 / rho_liq;
    let v_vap = 1.0 / rho_vap;

    Ok((v - v_liq) / (v_vap - v_liq))
}
