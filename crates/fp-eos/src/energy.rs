//! One-pass Helmholtz energy evaluation.

use crate::alpha0::IdealTerm;
use crate::alphar::ResidualTerm;
use fp_fluids::{Alpha0TermData, AlphaRTermData, Eos};

/// alpha and its five required partials at one (tau, delta).
///
/// Returned by value; the evaluator holds no mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlphaDerivs {
    pub alpha: f64,
    pub d_delta: f64,
    pub d_tau: f64,
    pub d_delta2: f64,
    pub d_tau2: f64,
    pub d_delta_tau: f64,
}

/// Compiled term lists for one fluid's default EOS.
#[derive(Debug, Clone, Default)]
pub struct HelmholtzEnergy {
    pub alpha0: Vec<IdealTerm>,
    pub alphar: Vec<ResidualTerm>,
}

impl HelmholtzEnergy {
    /// Compile the catalog term data into evaluatable terms.
    ///
    /// Term types the engine does not model are skipped. A `Power`
    /// block without an `l` array gets all-zero damping exponents.
    pub fn from_eos(eos: &Eos) -> Self {
        let mut energy = Self::default();

        for term in &eos.alpha0 {
            match term {
                Alpha0TermData::IdealGasHelmholtzLead { a1, a2 } => {
                    energy.alpha0.push(IdealTerm::Lead { a1: *a1, a2: *a2 });
                }
                Alpha0TermData::IdealGasHelmholtzLogTau { a } => {
                    energy.alpha0.push(IdealTerm::LogTau { a: *a });
                }
                Alpha0TermData::IdealGasHelmholtzPlanckEinstein { n, t } => {
                    energy.alpha0.push(IdealTerm::PlanckEinstein {
                        n: n.clone(),
                        t: t.clone(),
                    });
                }
                Alpha0TermData::Unknown => {}
            }
        }

        for term in &eos.alphar {
            match term {
                AlphaRTermData::ResidualHelmholtzPower { n, d, t, l } => {
                    let l = if l.is_empty() {
                        vec![0.0; n.len()]
                    } else {
                        l.clone()
                    };
                    energy.alphar.push(ResidualTerm::Power {
                        n: n.clone(),
                        d: d.clone(),
                        t: t.clone(),
                        l,
                    });
                }
                AlphaRTermData::ResidualHelmholtzGaussian {
                    n,
                    d,
                    t,
                    eta,
                    epsilon,
                    beta,
                    gamma,
                } => {
                    energy.alphar.push(ResidualTerm::Gaussian {
                        n: n.clone(),
                        d: d.clone(),
                        t: t.clone(),
                        eta: eta.clone(),
                        epsilon: epsilon.clone(),
                        beta: beta.clone(),
                        gamma: gamma.clone(),
                    });
                }
                AlphaRTermData::Unknown => {}
            }
        }

        energy
    }

    /// Sum all terms and their derivatives at (tau, delta).
    ///
    /// Each term contributes exactly once per call, in catalog order,
    /// so repeated evaluation at the same point is bit-reproducible.
    pub fn eval(&self, tau: f64, delta: f64) -> AlphaDerivs {
        let mut out = AlphaDerivs::default();

        for term in &self.alpha0 {
            out.alpha += term.term(tau, delta);
            out.d_delta += term.d_delta(tau, delta);
            out.d_tau += term.d_tau(tau, delta);
            out.d_delta2 += term.d_delta2(tau, delta);
            out.d_tau2 += term.d_tau2(tau, delta);
            out.d_delta_tau += term.d_delta_tau(tau, delta);
        }

        for term in &self.alphar {
            out.alpha += term.term(tau, delta);
            out.d_delta += term.d_delta(tau, delta);
            out.d_tau += term.d_tau(tau, delta);
            out.d_delta2 += term.d_delta2(tau, delta);
            out.d_tau2 += term.d_tau2(tau, delta);
            out.d_delta_tau += term.d_delta_tau(tau, delta);
        }

        out
    }
}
