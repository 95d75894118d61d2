//! (T, P) -> density flash.

use crate::error::{FlashError, FlashResult};
use crate::saturation;
use fp_eos::State;
use fp_fluids::FluidData;
use fp_solver::brent;
use tracing::{debug, warn};

/// The pressure tolerance is expressed through the Brent density
/// tolerance; at gas-like stiffness dP/drho ~ RT this resolves the
/// root to a few Pa.
const RHO_TOL: f64 = 1e-3;

/// Solve P(T, rho) = P for the density [mol/m3].
///
/// Strategy, in order:
/// 1. Compressed-liquid shortcut: below T_c with P above the
///    saturation curve, the saturated-liquid ancillary stands in for
///    the ill-conditioned liquid root.
/// 2. Phase gate via T_sat(P) to rule out the gas or liquid root.
/// 3. Gas root bracketed around the ideal-gas density.
/// 4. Liquid root bracketed around the saturated-liquid seed.
/// 5. Wide fallback bracket between the critical and triple-liquid
///    densities.
pub fn flash_tp(fluid: &FluidData, t: f64, p_target: f64) -> FlashResult<f64> {
    let mut state = State::new(fluid)?;
    let r = state.gas_constant();

    let t_crit = fluid.states.critical.t;
    let p_crit = fluid.states.critical.p;

    // ---- Compressed-liquid shortcut ----
    if t_crit > 0.0 && t < t_crit {
        if let Ok(p_sat) = saturation::psat(fluid, t) {
            if p_target > p_sat {
                let rho = saturation::rho_l(fluid, t);
                if rho > 0.0 {
                    debug!(t, p_target, rho, "compressed-liquid shortcut");
                    return Ok(rho);
                }
            }
        }
    }

    let mut obj = move |rho: f64| {
        state.update(t, rho);
        state.pressure() - p_target
    };

    // ---- Phase gate via Tsat(P) ----
    let mut try_gas = true;
    let mut try_liq = true;
    if let Ok(t_sat) = saturation::tsat(fluid, p_target) {
        if t < t_sat {
            try_gas = false;
        } else if t > t_sat {
            try_liq = false;
        }
        debug!(t, t_sat, try_gas, try_liq, "phase gate");
    }

    // ---- Gas-phase root (for low pressures) ----
    if try_gas && p_target < 0.9 * p_crit {
        let rho_ideal = p_target / (r * t);
        let min_rho = (0.1 * rho_ideal).max(1e-8);
        let max_rho = 3.0 * rho_ideal;

        if obj(min_rho) * obj(max_rho) < 0.0 {
            if let Ok(rho) = brent(&mut obj, min_rho, max_rho, RHO_TOL) {
                return Ok(rho);
            }
        }
    }

    // ---- Liquid-phase root around the saturated-liquid seed ----
    if try_liq {
        let rho_sat = saturation::rho_l(fluid, t);
        let seed = if rho_sat > 0.0 {
            rho_sat
        } else if fluid.states.triple_liquid.rhomolar > 0.0 {
            fluid.states.triple_liquid.rhomolar
        } else if fluid.states.critical.rhomolar > 0.0 {
            fluid.states.critical.rhomolar
        } else {
            60000.0
        };

        let min_rho = (0.2 * seed).max(1e-3);
        let max_rho = 2.0 * seed;

        if obj(min_rho) * obj(max_rho) < 0.0 {
            if let Ok(rho) = brent(&mut obj, min_rho, max_rho, RHO_TOL) {
                return Ok(rho);
            }
        }
    }

    // ---- Wide fallback between critical and triple-liquid density ----
    warn!(t, p_target, "phase-guided brackets failed, trying wide bracket");
    let min_rho = if fluid.states.critical.rhomolar > 0.0 {
        0.5 * fluid.states.critical.rhomolar
    } else {
        1e-3
    };
    let max_rho = if fluid.states.triple_liquid.rhomolar > 0.0 {
        1.5 * fluid.states.triple_liquid.rhomolar
    } else {
        60000.0
    };

    if obj(min_rho) * obj(max_rho) < 0.0 {
        if let Ok(rho) = brent(&mut obj, min_rho, max_rho, RHO_TOL) {
            return Ok(rho);
        }
    }

    Err(FlashError::NoRoot {
        context: format!(
            "(T, P) flash of {}: T={t} K, P={p_target} Pa",
            fluid.info.name
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testfluid::{testane, P_CRIT, R};

    fn pressure_at(fluid: &FluidData, t: f64, rho: f64) -> f64 {
        let mut state = State::new(fluid).unwrap();
        state.update(t, rho);
        state.pressure()
    }

    #[test]
    fn gas_root_round_trips_pressure() {
        let fluid = testane();
        let (t, p) = (300.0, 101_325.0);

        let rho = flash_tp(&fluid, t, p).unwrap();

        let rho_ideal = p / (R * t);
        assert!((rho - rho_ideal).abs() / rho_ideal < 0.01, "rho = {rho}");
        assert!((pressure_at(&fluid, t, rho) - p).abs() < 200.0);
    }

    #[test]
    fn superheated_gas_below_critical_temperature() {
        let fluid = testane();
        let (t, p) = (100.0, 5.0e4);

        let rho = flash_tp(&fluid, t, p).unwrap();
        assert!((pressure_at(&fluid, t, rho) - p).abs() < 200.0);
        // well below the saturated-liquid branch
        assert!(rho < 1000.0, "rho = {rho}");
    }

    #[test]
    fn compressed_liquid_takes_the_ancillary_shortcut() {
        let fluid = testane();
        let t = 100.0;
        let p = 1.0e6; // far above psat(100 K) ~ 0.2 MPa

        let rho = flash_tp(&fluid, t, p).unwrap();
        let expected = saturation::rho_l(&fluid, t);
        assert_eq!(rho, expected);
        assert!(rho > 20_000.0);
    }

    #[test]
    fn unreachable_pressure_reports_no_root() {
        let fluid = testane();
        let err = flash_tp(&fluid, 300.0, 2.0e8).unwrap_err();
        assert!(matches!(err, FlashError::NoRoot { .. }));
    }

    #[test]
    fn high_pressure_gate_skips_the_gas_branch() {
        let fluid = testane();
        // Above 0.9 Pc the gas bracket is not attempted; the wide
        // fallback still finds the root on this smooth EOS.
        let p = 0.95 * P_CRIT;
        let rho = flash_tp(&fluid, 300.0, p).unwrap();
        assert!((pressure_at(&fluid, 300.0, rho) - p).abs() < 1000.0);
    }
}
