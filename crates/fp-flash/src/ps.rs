//! (P, S) -> (T, density) flash.

use crate::error::{FlashError, FlashResult};
use fp_eos::State;
use fp_fluids::FluidData;
use fp_solver::{newton2d, Newton2dConfig};
use nalgebra::{Matrix2, Vector2};
use tracing::{debug, warn};

/// Solve P(T, rho) = P and S(T, rho) = S simultaneously.
///
/// Returns (T [K], rho [mol/m3]). Entropy has no cheap ideal-gas
/// inverse without a reference state, so the first attempt starts
/// from a fixed 300 K; the retry uses a liquid-like seed.
pub fn flash_ps(fluid: &FluidData, p_target: f64, s_target: f64) -> FlashResult<(f64, f64)> {
    let mut state = State::new(fluid)?;
    let r = state.gas_constant();

    let mut system = move |t: f64, rho: f64| {
        state.update(t, rho);
        (
            Vector2::new(
                state.pressure() - p_target,
                state.molar_entropy() - s_target,
            ),
            Matrix2::new(
                state.dp_dt(),
                state.dp_drho(),
                state.ds_dt(),
                state.ds_drho(),
            ),
        )
    };

    let config = Newton2dConfig::default();

    let t_guess = 300.0;
    let rho_guess = p_target / (r * t_guess);

    debug!(t_guess, rho_guess, "(P, S) gas-like seed");
    if let Ok((t, rho)) = newton2d(&mut system, t_guess, rho_guess, &config) {
        if t > 0.0 && rho > 0.0 {
            return Ok((t, rho));
        }
    }

    let rho_guess = if fluid.states.triple_liquid.rhomolar > 0.0 {
        fluid.states.triple_liquid.rhomolar
    } else {
        2.5 * fluid.states.critical.rhomolar
    };

    warn!(rho_guess, "(P, S) retrying with liquid-like seed");
    if let Ok((t, rho)) = newton2d(&mut system, t_guess, rho_guess, &config) {
        if t > 0.0 && rho > 0.0 {
            return Ok((t, rho));
        }
    }

    Err(FlashError::Failed {
        context: format!(
            "(P, S) flash of {}: P={p_target} Pa, S={s_target} J/(mol K)",
            fluid.info.name
        ),
    })
}
