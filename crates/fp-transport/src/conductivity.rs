//! Thermal conductivity correlations.

use crate::error::{TransportError, TransportResult};
use fp_fluids::FluidData;

/// Thermal conductivity [W/(m K)] at a pre-solved (T [K], rho [mol/m3]).
pub fn conductivity(fluid: &FluidData, t: f64, rho: f64) -> TransportResult<f64> {
    if !fluid.transport.conductivity.hardcoded.is_empty() {
        return Err(TransportError::NotImplemented {
            property: "conductivity",
            fluid: fluid.info.name.clone(),
        });
    }

    Ok(conductivity_dilute(fluid, t)? + conductivity_residual(fluid, t, rho)?)
}

/// Dilute-gas contribution, rational polynomial in T:
/// lambda0 = sum(A_i T^i) / sum(B_i T^i), denominator defaulting to 1
/// when no B coefficients are given.
pub fn conductivity_dilute(fluid: &FluidData, t: f64) -> TransportResult<f64> {
    let Some(dilute) = &fluid.transport.conductivity.dilute else {
        return Ok(0.0);
    };

    if dilute.kind != "rational_polynomial" && dilute.kind != "polynomial_and_exponential" {
        return Err(TransportError::UnknownModel {
            property: "dilute conductivity",
            model: dilute.kind.clone(),
        });
    }

    let mut num = 0.0;
    for (i, a) in dilute.a.iter().enumerate() {
        num += a * t.powi(i as i32);
    }

    let mut den = 1.0;
    if !dilute.b.is_empty() {
        den = 0.0;
        for (i, b) in dilute.b.iter().enumerate() {
            den += b * t.powi(i as i32);
        }
    }

    Ok(num / den)
}

/// Residual contribution, polynomial-exponential form using the
/// catalog-level critical reducers:
/// lambda_r = sum A_i tau^t_i delta^d_i exp(-gamma_i delta^l_i).
pub fn conductivity_residual(fluid: &FluidData, t: f64, rho: f64) -> TransportResult<f64> {
    let Some(residual) = &fluid.transport.conductivity.residual else {
        return Ok(0.0);
    };

    if residual.kind != "polynomial_and_exponential" {
        return Err(TransportError::UnknownModel {
            property: "residual conductivity",
            model: residual.kind.clone(),
        });
    }

    let tau = fluid.states.critical.t / t;
    let delta = rho / fluid.states.critical.rhomolar;

    let mut sum = 0.0;
    for i in 0..residual.a.len() {
        let mut term = residual.a[i];
        term *= tau.powf(residual.t[i]);
        term *= delta.powf(residual.d[i]);
        if residual.gamma[i] != 0.0 {
            term *= (-residual.gamma[i] * delta.powf(residual.l[i])).exp();
        }
        sum += term;
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_fluids::{ConductivityDilute, ConductivityResidual, FluidData};

    fn base_fluid() -> FluidData {
        let mut fluid = FluidData::default();
        fluid.info.name = "Testane".to_string();
        fluid.states.critical.t = 150.0;
        fluid.states.critical.rhomolar = 11000.0;
        fluid
    }

    #[test]
    fn dilute_polynomial_with_unit_denominator() {
        let mut fluid = base_fluid();
        fluid.transport.conductivity.dilute = Some(ConductivityDilute {
            kind: "rational_polynomial".to_string(),
            a: vec![1.0e-3, 5.0e-5],
            b: vec![],
            t: vec![],
        });

        let t = 300.0;
        let expected = 1.0e-3 + 5.0e-5 * t;
        let lambda = conductivity_dilute(&fluid, t).unwrap();
        assert!((lambda - expected).abs() < 1e-15);
    }

    #[test]
    fn dilute_rational_polynomial() {
        let mut fluid = base_fluid();
        fluid.transport.conductivity.dilute = Some(ConductivityDilute {
            kind: "rational_polynomial".to_string(),
            a: vec![2.0e-3],
            b: vec![0.5, 1.0e-3],
            t: vec![],
        });

        let t = 300.0;
        let expected = 2.0e-3 / (0.5 + 1.0e-3 * t);
        let lambda = conductivity_dilute(&fluid, t).unwrap();
        assert!((lambda - expected).abs() < 1e-15);
    }

    #[test]
    fn residual_uses_critical_reducers() {
        let mut fluid = base_fluid();
        fluid.transport.conductivity.residual = Some(ConductivityResidual {
            kind: "polynomial_and_exponential".to_string(),
            a: vec![4.0e-3],
            d: vec![1.0],
            t: vec![0.0],
            gamma: vec![1.0],
            l: vec![2.0],
        });

        let (t, rho) = (300.0, 5500.0);
        let delta: f64 = 0.5;
        let expected = 4.0e-3 * delta * (-delta * delta).exp();
        let lambda = conductivity_residual(&fluid, t, rho).unwrap();
        assert!((lambda - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn missing_blocks_contribute_zero() {
        let fluid = base_fluid();
        assert_eq!(conductivity(&fluid, 300.0, 100.0).unwrap(), 0.0);
    }

    #[test]
    fn hardcoded_marker_is_rejected() {
        let mut fluid = base_fluid();
        fluid.transport.conductivity.hardcoded = "special-cased upstream".to_string();

        let err = conductivity(&fluid, 300.0, 100.0).unwrap_err();
        assert!(matches!(err, TransportError::NotImplemented { .. }));
    }
}
