//! Dynamic viscosity correlations.

use crate::error::{TransportError, TransportResult};
use fp_fluids::FluidData;

/// Dynamic viscosity [Pa s] at a pre-solved (T [K], rho [mol/m3]).
pub fn viscosity(fluid: &FluidData, t: f64, rho: f64) -> TransportResult<f64> {
    if !fluid.transport.viscosity.hardcoded.is_empty() {
        return Err(TransportError::NotImplemented {
            property: "viscosity",
            fluid: fluid.info.name.clone(),
        });
    }

    Ok(viscosity_dilute(fluid, t)? + viscosity_residual(fluid, t, rho)?)
}

/// Dilute-gas contribution, collision-integral form:
/// mu0 = C sqrt(M_g T) / (sigma_nm^2 Omega(T*)).
///
/// M_g is the molar mass in g/mol, sigma_nm the Lennard-Jones size in
/// nm, T* = T/(eps/k), and Omega = exp(sum a_i (ln T*)^i). With the
/// catalog's tabulated C scale the result lands directly in Pa s.
pub fn viscosity_dilute(fluid: &FluidData, t: f64) -> TransportResult<f64> {
    let Some(dilute) = &fluid.transport.viscosity.dilute else {
        return Ok(0.0);
    };

    if dilute.kind != "collision_integral" {
        return Err(TransportError::UnknownModel {
            property: "dilute viscosity",
            model: dilute.kind.clone(),
        });
    }

    let m_g = dilute.molar_mass * 1000.0;
    let sigma_nm = fluid.transport.viscosity.sigma_eta * 1e9;
    let t_star = t / fluid.transport.viscosity.epsilon_over_k;

    let ln_t = t_star.ln();
    let mut sum = 0.0;
    for (i, a) in dilute.a.iter().enumerate() {
        sum += a * ln_t.powi(i as i32);
    }
    let omega = sum.exp();

    Ok(dilute.c * (m_g * t).sqrt() / (sigma_nm * sigma_nm * omega))
}

/// Residual contribution, modified Batschinski-Hildebrand form:
/// mu_r = sum a_i delta^d1_i tau^t1_i exp(gamma_i delta^l_i), with
/// the reducing pair taken from the term block itself.
pub fn viscosity_residual(fluid: &FluidData, t: f64, rho: f64) -> TransportResult<f64> {
    let Some(higher) = &fluid.transport.viscosity.higher_order else {
        return Ok(0.0);
    };

    if higher.kind != "modified_Batschinski_Hildebrand" {
        return Err(TransportError::UnknownModel {
            property: "residual viscosity",
            model: higher.kind.clone(),
        });
    }

    let delta = rho / higher.rhomolar_reduce;
    let tau = higher.t_reduce / t;

    let mut sum = 0.0;
    for i in 0..higher.a.len() {
        let mut term = higher.a[i];
        term *= delta.powf(higher.d1[i]);
        term *= tau.powf(higher.t1[i]);
        if higher.gamma[i] != 0.0 {
            term *= (higher.gamma[i] * delta.powf(higher.l[i])).exp();
        }
        sum += term;
    }

    Ok(sum)
}
