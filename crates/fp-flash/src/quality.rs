//! (T, Q) and (P, Q) saturated-mixture flashes.

use crate::error::{FlashError, FlashResult};
use crate::saturation;
use fp_fluids::FluidData;

/// Density [mol/m3] of a two-phase mixture of quality `q` at
/// temperature `t`.
///
/// The saturated endpoint densities come from the ancillary curves;
/// the mixture follows from quality-weighted specific volumes. `q` is
/// clamped to [0, 1].
pub fn flash_tq(fluid: &FluidData, t: f64, q: f64) -> FlashResult<f64> {
    let t_crit = fluid.states.critical.t;
    if t_crit > 0.0 && t >= t_crit {
        return Err(FlashError::Supercritical { t_k: t, t_c: t_crit });
    }

    let rho_liq = saturation::rho_l(fluid, t);
    let rho_vap = saturation::rho_v(fluid, t);
    if rho_liq <= 0.0 || !rho_liq.is_finite() {
        return Err(FlashError::MissingAncillary { what: "rhoL" });
    }
    if rho_vap <= 0.0 || !rho_vap.is_finite() {
        return Err(FlashError::MissingAncillary { what: "rhoV" });
    }

    let q = q.clamp(0.0, 1.0);
    if q <= 0.0 {
        return Ok(rho_liq);
    }
    if q >= 1.0 {
        return Ok(rho_vap);
    }

    let v_liq = 1.0 / rho_liq;
    let v_vap = 1.0 / rho_vap;
    let v = q * v_vap + (1.0 - q) * v_liq;
    Ok(1.0 / v)
}

/// (T [K], density [mol/m3]) of a two-phase mixture of quality `q`
/// at pressure `p`, via T_sat(P).
pub fn flash_pq(fluid: &FluidData, p: f64, q: f64) -> FlashResult<(f64, f64)> {
    let t = saturation::tsat(fluid, p)?;
    let rho = flash_tq(fluid, t, q)?;
    Ok((t, rho))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testfluid::testane;

    #[test]
    fn quality_endpoints_hit_the_saturation_curves() {
        let fluid = testane();
        let t = 100.0;

        let rho_liq = flash_tq(&fluid, t, 0.0).unwrap();
        let rho_vap = flash_tq(&fluid, t, 1.0).unwrap();

        assert_eq!(rho_liq, saturation::rho_l(&fluid, t));
        assert_eq!(rho_vap, saturation::rho_v(&fluid, t));
        assert!(rho_liq > rho_vap);
    }

    #[test]
    fn mid_quality_is_the_volume_weighted_mix() {
        let fluid = testane();
        let t = 100.0;

        let rho_liq = saturation::rho_l(&fluid, t);
        let rho_vap = saturation::rho_v(&fluid, t);
        let v = 0.5 / rho_vap + 0.5 / rho_liq;

        let rho = flash_tq(&fluid, t, 0.5).unwrap();
        assert!((rho - 1.0 / v).abs() < 1e-9);
    }

    #[test]
    fn quality_is_clamped() {
        let fluid = testane();
        let t = 100.0;

        assert_eq!(
            flash_tq(&fluid, t, -0.3).unwrap(),
            saturation::rho_l(&fluid, t)
        );
        assert_eq!(
            flash_tq(&fluid, t, 1.7).unwrap(),
            saturation::rho_v(&fluid, t)
        );
    }

    #[test]
    fn supercritical_temperature_is_rejected() {
        let fluid = testane();
        let err = flash_tq(&fluid, 200.0, 0.5).unwrap_err();
        assert!(matches!(err, FlashError::Supercritical { .. }));
    }

    #[test]
    fn pq_flash_solves_the_saturation_temperature_first() {
        let fluid = testane();
        let p = saturation::psat(&fluid, 100.0).unwrap();

        let (t, rho) = flash_pq(&fluid, p, 0.0).unwrap();
        assert!((t - 100.0).abs() < 1e-3);
        assert!((rho - saturation::rho_l(&fluid, t)).abs() < 1e-6);
    }
}
