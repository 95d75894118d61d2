//! Surface tension along the saturation boundary.

use crate::error::{TransportError, TransportResult};
use fp_fluids::{FluidData, SurfaceTensionData};

/// Surface tension [N/m] at temperature `t` [K]:
/// sigma = sum a_i (1 - T/T_c)^n_i.
///
/// Coefficients live in `TRANSPORT.surface_tension` with
/// `ANCILLARIES.surface_tension` as the fallback location; the curve's
/// own critical temperature wins over the fluid's.
pub fn surface_tension(fluid: &FluidData, t: f64) -> TransportResult<f64> {
    let data: &SurfaceTensionData = if !fluid.transport.surface_tension.a.is_empty() {
        &fluid.transport.surface_tension
    } else {
        &fluid.ancillaries.surface_tension
    };

    if data.a.is_empty() {
        return Err(TransportError::MissingData {
            property: "surface tension",
            fluid: fluid.info.name.clone(),
        });
    }

    let t_c = if data.t_c > 0.0 {
        data.t_c
    } else {
        fluid.states.critical.t
    };

    if t > t_c {
        return Err(TransportError::Supercritical { t_k: t, t_c });
    }

    let theta = 1.0 - t / t_c;
    let mut sum = 0.0;
    for (a, n) in data.a.iter().zip(data.n.iter()) {
        sum += a * theta.powf(*n);
    }

    Ok(sum)
}
