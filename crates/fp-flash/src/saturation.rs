//! Saturation-curve helpers built on the ancillary approximations.

use crate::error::{FlashError, FlashResult};
use fp_fluids::FluidData;
use fp_solver::brent;

/// Saturation pressure [Pa] at temperature `t` from the pS ancillary.
///
/// Valid on [Tmin, Tmax] of the curve; a 0.1 K widening tolerance
/// absorbs bracket endpoints that land marginally outside.
pub fn psat(fluid: &FluidData, t: f64) -> FlashResult<f64> {
    let curve = &fluid.ancillaries.p_s;
    if !curve.is_present() {
        return Err(FlashError::MissingAncillary { what: "pS" });
    }

    if t < curve.t_min - 0.1 || t > curve.t_max + 0.1 {
        return Err(FlashError::TemperatureOutOfRange {
            t_k: t,
            t_min: curve.t_min,
            t_max: curve.t_max,
        });
    }

    Ok(curve.evaluate(t))
}

/// Saturation temperature [K] at pressure `p`, by Brent-inverting the
/// pS ancillary on its validity interval.
///
/// Pressures beyond 1 % outside the curve endpoints are rejected.
pub fn tsat(fluid: &FluidData, p: f64) -> FlashResult<f64> {
    let curve = &fluid.ancillaries.p_s;
    if !curve.is_present() {
        return Err(FlashError::MissingAncillary { what: "pS" });
    }

    let t_min = curve.t_min;
    let t_max = curve.t_max;
    let p_min = curve.evaluate(t_min);
    let p_max = curve.evaluate(t_max);

    if p < p_min * 0.99 || p > p_max * 1.01 {
        return Err(FlashError::PressureOutOfRange {
            p_pa: p,
            p_min,
            p_max,
        });
    }

    brent(|t| curve.evaluate(t) - p, t_min, t_max, 1e-6).map_err(|source| FlashError::Solver {
        context: format!("T_sat at P={p} Pa"),
        source,
    })
}

/// Saturated liquid density [mol/m3] at temperature `t`.
///
/// Evaluates to 0 when the fluid carries no usable rhoL curve;
/// callers treat non-positive values as "no estimate".
pub fn rho_l(fluid: &FluidData, t: f64) -> f64 {
    fluid.ancillaries.rho_l.evaluate(t)
}

/// Saturated vapor density [mol/m3] at temperature `t`.
pub fn rho_v(fluid: &FluidData, t: f64) -> f64 {
    fluid.ancillaries.rho_v.evaluate(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_fluids::{AncillaryCurve, FluidData};

    fn fluid_with_psat() -> FluidData {
        let mut fluid = FluidData::default();
        fluid.ancillaries.p_s = AncillaryCurve {
            kind: "pL".to_string(),
            t_min: 65.0,
            t_max: 150.0,
            reducing_value: 4.0e6,
            t_r: 150.0,
            n: vec![-6.0],
            t: vec![1.0],
            ..Default::default()
        };
        fluid
    }

    #[test]
    fn tsat_inverts_psat() {
        let fluid = fluid_with_psat();
        let p = psat(&fluid, 100.0).unwrap();
        let t = tsat(&fluid, p).unwrap();
        assert!((t - 100.0).abs() < 1e-4, "T_sat = {t}");
    }

    #[test]
    fn psat_rejects_out_of_band_temperature() {
        let fluid = fluid_with_psat();
        let err = psat(&fluid, 200.0).unwrap_err();
        assert!(matches!(err, FlashError::TemperatureOutOfRange { .. }));
    }

    #[test]
    fn psat_allows_small_overshoot() {
        let fluid = fluid_with_psat();
        assert!(psat(&fluid, 150.05).is_ok());
        assert!(psat(&fluid, 64.95).is_ok());
    }

    #[test]
    fn tsat_rejects_out_of_band_pressure() {
        let fluid = fluid_with_psat();
        let err = tsat(&fluid, 5.0e6).unwrap_err();
        assert!(matches!(err, FlashError::PressureOutOfRange { .. }));

        let err = tsat(&fluid, 1.0).unwrap_err();
        assert!(matches!(err, FlashError::PressureOutOfRange { .. }));
    }

    #[test]
    fn missing_curve_is_reported() {
        let fluid = FluidData::default();
        let err = psat(&fluid, 100.0).unwrap_err();
        assert!(matches!(err, FlashError::MissingAncillary { .. }));
    }
}
