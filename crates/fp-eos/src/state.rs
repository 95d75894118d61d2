//! Thermodynamic state: (T, rho) plus cached derivatives.

use crate::energy::{AlphaDerivs, HelmholtzEnergy};
use crate::error::{EosError, EosResult};
use fp_core::units::constants::GAS_CONSTANT_SI;
use fp_fluids::FluidData;

/// A single-fluid state point.
///
/// Holds the fluid record by reference and the compiled term lists by
/// value. `update(T, rho)` recomputes tau, delta, the six derivative
/// sums, and the cached pressure; accessors are then side-effect free.
/// One writer per state: share the `FluidData`, not the `State`.
///
/// `update` does not validate its inputs. Non-positive T or rho make
/// the term library produce NaN, which flash scans and the query layer
/// screen out.
#[derive(Debug, Clone)]
pub struct State<'a> {
    fluid: &'a FluidData,
    energy: HelmholtzEnergy,

    r: f64,
    t_c: f64,
    rho_c: f64,

    t: f64,
    rho: f64,
    tau: f64,
    delta: f64,

    derivs: AlphaDerivs,
    p: f64,
}

/// First value of the fallback chain that is usable as a reducing value.
fn first_positive(candidates: [f64; 3]) -> Option<f64> {
    candidates.into_iter().find(|v| *v > 0.0)
}

impl<'a> State<'a> {
    /// Compile a state evaluator for the fluid's default EOS.
    ///
    /// The reducing temperature and density come from the EOS-local
    /// `STATES.reducing` block, then the EOS-local critical point,
    /// then the top-level critical point. A fluid providing none of
    /// these is rejected as ill-formed.
    pub fn new(fluid: &'a FluidData) -> EosResult<Self> {
        let eos = fluid.eos.first().ok_or(EosError::IllFormedFluid {
            what: "no EOS block",
        })?;

        let t_c = first_positive([
            eos.states.reducing.t,
            eos.states.critical.t,
            fluid.states.critical.t,
        ])
        .ok_or(EosError::IllFormedFluid {
            what: "missing critical/reducing temperature",
        })?;

        let rho_c = first_positive([
            eos.states.reducing.rhomolar,
            eos.states.critical.rhomolar,
            fluid.states.critical.rhomolar,
        ])
        .ok_or(EosError::IllFormedFluid {
            what: "missing critical/reducing density",
        })?;

        let r = if eos.gas_constant > 0.0 {
            eos.gas_constant
        } else {
            GAS_CONSTANT_SI
        };

        Ok(Self {
            fluid,
            energy: HelmholtzEnergy::from_eos(eos),
            r,
            t_c,
            rho_c,
            t: 0.0,
            rho: 0.0,
            tau: 0.0,
            delta: 0.0,
            derivs: AlphaDerivs::default(),
            p: 0.0,
        })
    }

    /// Recompute all cached derivatives at (T [K], rho [mol/m3]).
    pub fn update(&mut self, t: f64, rho: f64) {
        self.t = t;
        self.rho = rho;
        self.tau = self.t_c / t;
        self.delta = rho / self.rho_c;

        self.derivs = self.energy.eval(self.tau, self.delta);

        // P = rho R T (1 + delta alphar_delta); alpha0_delta is exactly
        // 1/delta, so the total collapses to rho R T delta alpha_delta.
        self.p = rho * self.r * t * self.delta * self.derivs.d_delta;
    }

    pub fn fluid(&self) -> &'a FluidData {
        self.fluid
    }

    pub fn gas_constant(&self) -> f64 {
        self.r
    }

    pub fn critical_temperature(&self) -> f64 {
        self.t_c
    }

    pub fn critical_density(&self) -> f64 {
        self.rho_c
    }

    pub fn temperature(&self) -> f64 {
        self.t
    }

    /// Molar density [mol/m3].
    pub fn density(&self) -> f64 {
        self.rho
    }

    /// Pressure [Pa], cached by `update`.
    pub fn pressure(&self) -> f64 {
        self.p
    }

    /// Molar entropy [J/(mol K)]: R (tau alpha_tau - alpha).
    pub fn molar_entropy(&self) -> f64 {
        self.r * (self.tau * self.derivs.d_tau - self.derivs.alpha)
    }

    /// Molar enthalpy [J/mol]: R T (tau alpha_tau + delta alpha_delta).
    pub fn molar_enthalpy(&self) -> f64 {
        self.r * self.t * (self.tau * self.derivs.d_tau + self.delta * self.derivs.d_delta)
    }

    /// Molar internal energy [J/mol]: R T tau alpha_tau.
    pub fn molar_internal_energy(&self) -> f64 {
        self.r * self.t * self.tau * self.derivs.d_tau
    }

    /// Isochoric heat capacity [J/(mol K)]: -R tau^2 alpha_tau2.
    pub fn cv(&self) -> f64 {
        -self.r * self.tau * self.tau * self.derivs.d_tau2
    }

    /// Isobaric heat capacity [J/(mol K)].
    ///
    /// Cp = Cv + R (1 + delta ar_d - delta tau ar_dt)^2
    ///          / (1 + 2 delta ar_d + delta^2 ar_dd)
    /// with the residual derivatives recovered from the totals via
    /// ar_d = alpha_delta - 1/delta and ar_dd = alpha_delta2 + 1/delta^2.
    pub fn cp(&self) -> f64 {
        let ar_d = self.derivs.d_delta - 1.0 / self.delta;
        let ar_dd = self.derivs.d_delta2 + 1.0 / (self.delta * self.delta);
        let ar_dt = self.derivs.d_delta_tau;

        let num = 1.0 + self.delta * ar_d - self.delta * self.tau * ar_dt;
        let den = 1.0 + 2.0 * self.delta * ar_d + self.delta * self.delta * ar_dd;

        self.cv() + self.r * num * num / den
    }

    // ---- Partial derivatives for flash Jacobians ----

    /// dP/dT at constant rho [Pa/K].
    pub fn dp_dt(&self) -> f64 {
        self.p / self.t
            - self.rho * self.r * self.t * self.delta * self.derivs.d_delta_tau * self.t_c
                / (self.t * self.t)
    }

    /// dP/drho at constant T [Pa m3/mol].
    pub fn dp_drho(&self) -> f64 {
        self.r * self.t * self.delta * self.derivs.d_delta
            + self.rho * self.r * self.t * (self.derivs.d_delta + self.delta * self.derivs.d_delta2)
                / self.rho_c
    }

    /// dH/dT at constant rho [J/(mol K)], taken as Cp for the Jacobian.
    pub fn dh_dt(&self) -> f64 {
        self.cp()
    }

    /// dH/drho at constant T [J m3/mol^2].
    pub fn dh_drho(&self) -> f64 {
        self.r * self.t * (self.derivs.d_delta + self.delta * self.derivs.d_delta2) / self.rho_c
    }

    /// dS/dT at constant rho [J/(mol K^2)].
    pub fn ds_dt(&self) -> f64 {
        self.cv() / self.t
    }

    /// dS/drho at constant T [J m3/(mol^2 K)].
    pub fn ds_drho(&self) -> f64 {
        self.r * (self.tau * self.derivs.d_delta_tau - self.derivs.d_delta) / self.rho_c
    }
}
