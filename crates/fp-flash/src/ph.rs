//! (P, H) -> (T, density) flash.

use crate::error::{FlashError, FlashResult};
use fp_eos::State;
use fp_fluids::FluidData;
use fp_solver::{newton2d, Newton2dConfig};
use nalgebra::{Matrix2, Vector2};
use tracing::{debug, warn};

/// Solve P(T, rho) = P and H(T, rho) = H simultaneously.
///
/// Returns (T [K], rho [mol/m3]). The first Newton attempt starts
/// from an ideal-gas guess with T estimated from H assuming a heat
/// capacity of roughly 4R; on failure a liquid-like seed near the
/// triple-point density is tried before giving up.
pub fn flash_ph(fluid: &FluidData, p_target: f64, h_target: f64) -> FlashResult<(f64, f64)> {
    let mut state = State::new(fluid)?;
    let r = state.gas_constant();

    let mut system = move |t: f64, rho: f64| {
        state.update(t, rho);
        (
            Vector2::new(
                state.pressure() - p_target,
                state.molar_enthalpy() - h_target,
            ),
            Matrix2::new(
                state.dp_dt(),
                state.dp_drho(),
                state.dh_dt(),
                state.dh_drho(),
            ),
        )
    };

    let config = Newton2dConfig::default();

    // H ~ Cp T with Cp somewhere between 2.5R and 4.5R; 4R keeps the
    // seed on the warm side, clamped above the triple point.
    let mut t_guess = h_target / (4.0 * r);
    if t_guess < fluid.states.triple_liquid.t {
        t_guess = fluid.states.triple_liquid.t * 1.1;
    }
    let rho_guess = p_target / (r * t_guess);

    debug!(t_guess, rho_guess, "(P, H) gas-like seed");
    if let Ok((t, rho)) = newton2d(&mut system, t_guess, rho_guess, &config) {
        if t > 0.0 && rho > 0.0 {
            return Ok((t, rho));
        }
    }

    // Liquid-like retry: near-incompressible seed at the triple-point
    // density.
    let rho_guess = if fluid.states.triple_liquid.rhomolar > 0.0 {
        fluid.states.triple_liquid.rhomolar
    } else {
        2.5 * fluid.states.critical.rhomolar
    };
    let t_guess = 300.0;

    warn!(t_guess, rho_guess, "(P, H) retrying with liquid-like seed");
    if let Ok((t, rho)) = newton2d(&mut system, t_guess, rho_guess, &config) {
        if t > 0.0 && rho > 0.0 {
            return Ok((t, rho));
        }
    }

    Err(FlashError::Failed {
        context: format!(
            "(P, H) flash of {}: P={p_target} Pa, H={h_target} J/mol",
            fluid.info.name
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testfluid::testane;

    #[test]
    fn gas_state_round_trips() {
        let fluid = testane();
        let (t_expected, rho_expected) = (300.0, 500.0);

        let mut state = State::new(&fluid).unwrap();
        state.update(t_expected, rho_expected);
        let p = state.pressure();
        let h = state.molar_enthalpy();

        let (t, rho) = flash_ph(&fluid, p, h).unwrap();
        assert!((t - t_expected).abs() < 0.01, "T = {t}");
        assert!(
            (rho - rho_expected).abs() / rho_expected < 1e-3,
            "rho = {rho}"
        );
    }

    #[test]
    fn cold_gas_state_round_trips() {
        let fluid = testane();
        let (t_expected, rho_expected) = (150.0, 100.0);

        let mut state = State::new(&fluid).unwrap();
        state.update(t_expected, rho_expected);
        let p = state.pressure();
        let h = state.molar_enthalpy();

        let (t, rho) = flash_ph(&fluid, p, h).unwrap();
        assert!((t - t_expected).abs() < 0.01, "T = {t}");
        assert!(
            (rho - rho_expected).abs() / rho_expected < 1e-3,
            "rho = {rho}"
        );
    }

    #[test]
    fn unreachable_enthalpy_fails() {
        let fluid = testane();
        let err = flash_ph(&fluid, 101_325.0, -1.0e6).unwrap_err();
        assert!(matches!(err, FlashError::Failed { .. }));
    }
}
