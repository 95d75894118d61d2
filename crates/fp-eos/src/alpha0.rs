//! Ideal-gas Helmholtz term families.

/// One ideal-gas contribution to alpha(tau, delta).
///
/// The set is closed by the catalog schema:
/// - `Lead`: ln(delta) + a1 + a2*tau
/// - `LogTau`: a * ln(tau)
/// - `PlanckEinstein`: sum(n_i * ln(1 - exp(-t_i * tau)))
///
/// Only `Lead` depends on delta, and its delta-derivative is exactly
/// 1/delta; the pressure identity relies on this to recover the
/// residual delta-derivatives from the totals.
#[derive(Debug, Clone, PartialEq)]
pub enum IdealTerm {
    Lead { a1: f64, a2: f64 },
    LogTau { a: f64 },
    PlanckEinstein { n: Vec<f64>, t: Vec<f64> },
}

impl IdealTerm {
    pub fn term(&self, tau: f64, delta: f64) -> f64 {
        match self {
            Self::Lead { a1, a2 } => delta.ln() + a1 + a2 * tau,
            Self::LogTau { a } => a * tau.ln(),
            Self::PlanckEinstein { n, t } => {
                let mut sum = 0.0;
                for (n_i, t_i) in n.iter().zip(t.iter()) {
                    sum += n_i * (1.0 - (-t_i * tau).exp()).ln();
                }
                sum
            }
        }
    }

    pub fn d_delta(&self, _tau: f64, delta: f64) -> f64 {
        match self {
            Self::Lead { .. } => 1.0 / delta,
            _ => 0.0,
        }
    }

    pub fn d_tau(&self, tau: f64, _delta: f64) -> f64 {
        match self {
            Self::Lead { a2, .. } => *a2,
            Self::LogTau { a } => a / tau,
            Self::PlanckEinstein { n, t } => {
                let mut sum = 0.0;
                for (n_i, t_i) in n.iter().zip(t.iter()) {
                    let e = (-t_i * tau).exp();
                    sum += n_i * t_i * e / (1.0 - e);
                }
                sum
            }
        }
    }

    pub fn d_delta2(&self, _tau: f64, delta: f64) -> f64 {
        match self {
            Self::Lead { .. } => -1.0 / (delta * delta),
            _ => 0.0,
        }
    }

    pub fn d_tau2(&self, tau: f64, _delta: f64) -> f64 {
        match self {
            Self::Lead { .. } => 0.0,
            Self::LogTau { a } => -a / (tau * tau),
            Self::PlanckEinstein { n, t } => {
                let mut sum = 0.0;
                for (n_i, t_i) in n.iter().zip(t.iter()) {
                    let e = (-t_i * tau).exp();
                    let denom = 1.0 - e;
                    sum += -n_i * t_i * t_i * e / (denom * denom);
                }
                sum
            }
        }
    }

    pub fn d_delta_tau(&self, _tau: f64, _delta: f64) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_delta_derivatives_are_exact() {
        let term = IdealTerm::Lead { a1: -6.1, a2: 5.2 };
        let (tau, delta) = (1.3, 0.7);

        assert_eq!(term.d_delta(tau, delta), 1.0 / delta);
        assert_eq!(term.d_delta2(tau, delta), -1.0 / (delta * delta));
        assert_eq!(term.d_delta_tau(tau, delta), 0.0);
        assert_eq!(term.d_tau(tau, delta), 5.2);
        assert_eq!(term.d_tau2(tau, delta), 0.0);
    }

    #[test]
    fn log_tau_matches_closed_form() {
        let term = IdealTerm::LogTau { a: 2.5 };
        let tau = 0.8;

        assert!((term.term(tau, 1.0) - 2.5 * tau.ln()).abs() < 1e-15);
        assert!((term.d_tau(tau, 1.0) - 2.5 / tau).abs() < 1e-15);
        assert!((term.d_tau2(tau, 1.0) + 2.5 / (tau * tau)).abs() < 1e-15);
        assert_eq!(term.d_delta(tau, 1.0), 0.0);
    }

    #[test]
    fn planck_einstein_tau_derivative_by_finite_difference() {
        let term = IdealTerm::PlanckEinstein {
            n: vec![0.9, 0.2],
            t: vec![3.5, 7.1],
        };
        let tau = 1.2;
        let h = 1e-6;

        let fd = (term.term(tau + h, 1.0) - term.term(tau - h, 1.0)) / (2.0 * h);
        assert!((term.d_tau(tau, 1.0) - fd).abs() < 1e-7);

        let fd2 = (term.d_tau(tau + h, 1.0) - term.d_tau(tau - h, 1.0)) / (2.0 * h);
        assert!((term.d_tau2(tau, 1.0) - fd2).abs() < 1e-7);
    }
}
