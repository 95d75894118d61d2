//! (T, H) -> density flash.
//!
//! The objective H(T, rho) - H_target is generally non-monotonic in
//! density with up to three real roots near the critical isotherm, so
//! this flash scans a log-spaced density grid for sign changes and
//! refines every bracket with Brent instead of running a bare Newton
//! iteration that could skip roots.

use crate::error::{FlashError, FlashResult};
use fp_eos::State;
use fp_fluids::FluidData;
use fp_solver::brent;
use tracing::debug;

const N_SCAN: usize = 200;

/// Brent tolerance on density inside one scan cell [mol/m3].
const RHO_TOL: f64 = 1.0;

/// Relative spacing below which two roots are the same root.
const DEDUP_REL_TOL: f64 = 1e-6;

/// Solve H(T, rho) = H for the density [mol/m3].
pub fn flash_th(fluid: &FluidData, t: f64, h_target: f64) -> FlashResult<f64> {
    let mut state = State::new(fluid)?;

    let rho_crit = fluid.states.critical.rhomolar;
    let rho_triple_liq = if fluid.states.triple_liquid.rhomolar > 0.0 {
        fluid.states.triple_liquid.rhomolar
    } else {
        2.5 * rho_crit
    };

    let mut obj = move |rho: f64| {
        state.update(t, rho);
        state.molar_enthalpy() - h_target
    };

    // ---- Phase preference from the two seed enthalpies ----
    let rho_gas_guess = (0.01 * rho_crit).max(1e-8);
    let rho_liq_guess = rho_triple_liq;

    let gas_mismatch = obj(rho_gas_guess).abs();
    let liq_mismatch = obj(rho_liq_guess).abs();
    let prefer_liquid = liq_mismatch < gas_mismatch;

    // ---- Global density range to scan ----
    let rho_min = 1e-8;
    let rho_max = if rho_triple_liq > 0.0 {
        3.0 * rho_triple_liq
    } else {
        5.0 * rho_crit
    };
    if rho_max <= rho_min {
        return Err(FlashError::NoRoot {
            context: format!(
                "(T, H) flash of {}: invalid density range [{rho_min}, {rho_max}]",
                fluid.info.name
            ),
        });
    }

    // ---- Scan for sign changes on a log grid ----
    let log_min = rho_min.ln();
    let log_max = rho_max.ln();
    let dlog = (log_max - log_min) / N_SCAN as f64;

    let mut roots: Vec<f64> = Vec::with_capacity(4);
    let mut add_root = |roots: &mut Vec<f64>, r: f64| {
        if r <= 0.0 || !r.is_finite() {
            return;
        }
        for existing in roots.iter() {
            if (r - existing).abs() <= DEDUP_REL_TOL * existing.abs().max(1.0) {
                return;
            }
        }
        roots.push(r);
    };

    let mut prev_rho = rho_min;
    let mut prev_val = obj(prev_rho);
    if !prev_val.is_finite() {
        prev_rho = (log_min + dlog).exp();
        prev_val = obj(prev_rho);
    }

    for i in 1..=N_SCAN {
        let rho = (log_min + dlog * i as f64).exp();
        if rho <= prev_rho {
            continue;
        }

        let val = obj(rho);
        if !val.is_finite() {
            // Skip regions where the EOS blows up
            prev_rho = rho;
            prev_val = val;
            continue;
        }

        if val == 0.0 {
            add_root(&mut roots, rho);
        }

        if prev_val * val < 0.0 {
            let (a, b) = if prev_rho < rho {
                (prev_rho, rho)
            } else {
                (rho, prev_rho)
            };
            if let Ok(root) = brent(&mut obj, a, b, RHO_TOL) {
                add_root(&mut roots, root);
            }
        }

        prev_rho = rho;
        prev_val = val;
    }

    if roots.is_empty() {
        return Err(FlashError::NoRoot {
            context: format!(
                "(T, H) flash of {}: T={t} K, H={h_target} J/mol",
                fluid.info.name
            ),
        });
    }

    debug!(n_roots = roots.len(), prefer_liquid, "(T, H) scan complete");

    // Gas-like targets take the lowest-density root, liquid-like the
    // highest.
    let chosen = if prefer_liquid {
        roots.iter().cloned().fold(f64::MIN, f64::max)
    } else {
        roots.iter().cloned().fold(f64::MAX, f64::min)
    };

    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testfluid::testane;

    fn enthalpy_at(fluid: &FluidData, t: f64, rho: f64) -> f64 {
        let mut state = State::new(fluid).unwrap();
        state.update(t, rho);
        state.molar_enthalpy()
    }

    #[test]
    fn gas_state_round_trips() {
        let fluid = testane();
        let (t, rho_expected) = (300.0, 500.0);
        let h = enthalpy_at(&fluid, t, rho_expected);

        let rho = flash_th(&fluid, t, h).unwrap();
        assert!(
            (rho - rho_expected).abs() / rho_expected < 0.01,
            "rho = {rho}"
        );
    }

    #[test]
    fn dense_state_round_trips() {
        let fluid = testane();
        let (t, rho_expected) = (120.0, 20_000.0);
        let h = enthalpy_at(&fluid, t, rho_expected);

        let rho = flash_th(&fluid, t, h).unwrap();
        assert!(
            (rho - rho_expected).abs() / rho_expected < 0.01,
            "rho = {rho}"
        );
    }

    #[test]
    fn unreachable_enthalpy_reports_no_root() {
        let fluid = testane();
        let err = flash_th(&fluid, 300.0, 1.0e6).unwrap_err();
        assert!(matches!(err, FlashError::NoRoot { .. }));
    }
}
