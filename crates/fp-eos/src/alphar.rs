//! Residual Helmholtz term families.

/// One residual contribution to alpha(tau, delta).
///
/// Coefficient vectors within a variant run in parallel; the catalog
/// guarantees equal lengths. `Power` terms with l = 0 have no
/// exponential damping.
#[derive(Debug, Clone, PartialEq)]
pub enum ResidualTerm {
    /// sum(n_i * delta^d_i * tau^t_i * exp(-delta^l_i))
    Power {
        n: Vec<f64>,
        d: Vec<f64>,
        t: Vec<f64>,
        l: Vec<f64>,
    },
    /// sum(n_i * delta^d_i * tau^t_i
    ///     * exp(-eta_i*(delta-epsilon_i)^2 - beta_i*(tau-gamma_i)^2))
    Gaussian {
        n: Vec<f64>,
        d: Vec<f64>,
        t: Vec<f64>,
        eta: Vec<f64>,
        epsilon: Vec<f64>,
        beta: Vec<f64>,
        gamma: Vec<f64>,
    },
}

impl ResidualTerm {
    pub fn term(&self, tau: f64, delta: f64) -> f64 {
        let mut sum = 0.0;
        match self {
            Self::Power { n, d, t, l } => {
                for i in 0..n.len() {
                    let mut val = n[i] * delta.powf(d[i]) * tau.powf(t[i]);
                    if l[i] != 0.0 {
                        val *= (-delta.powf(l[i])).exp();
                    }
                    sum += val;
                }
            }
            Self::Gaussian {
                n,
                d,
                t,
                eta,
                epsilon,
                beta,
                gamma,
            } => {
                for i in 0..n.len() {
                    let dd = delta - epsilon[i];
                    let dt = tau - gamma[i];
                    let e = (-eta[i] * dd * dd - beta[i] * dt * dt).exp();
                    sum += n[i] * delta.powf(d[i]) * tau.powf(t[i]) * e;
                }
            }
        }
        sum
    }

    pub fn d_delta(&self, tau: f64, delta: f64) -> f64 {
        let mut sum = 0.0;
        match self {
            Self::Power { n, d, t, l } => {
                for i in 0..n.len() {
                    let mut term = n[i] * delta.powf(d[i] - 1.0) * tau.powf(t[i]);
                    if l[i] != 0.0 {
                        // d/ddelta [delta^d exp(-delta^l)]
                        //   = delta^(d-1) exp(-delta^l) (d - l delta^l)
                        term *= (-delta.powf(l[i])).exp() * (d[i] - l[i] * delta.powf(l[i]));
                    } else {
                        term *= d[i];
                    }
                    sum += term;
                }
            }
            Self::Gaussian {
                n,
                d,
                t,
                eta,
                epsilon,
                beta,
                gamma,
            } => {
                for i in 0..n.len() {
                    let dd = delta - epsilon[i];
                    let dt = tau - gamma[i];
                    let e = (-eta[i] * dd * dd - beta[i] * dt * dt).exp();
                    let f = n[i] * delta.powf(d[i]) * tau.powf(t[i]) * e;
                    sum += f * (d[i] / delta - 2.0 * eta[i] * dd);
                }
            }
        }
        sum
    }

    pub fn d_tau(&self, tau: f64, delta: f64) -> f64 {
        let mut sum = 0.0;
        match self {
            Self::Power { n, d, t, l } => {
                for i in 0..n.len() {
                    let mut term = n[i] * delta.powf(d[i]) * tau.powf(t[i] - 1.0) * t[i];
                    if l[i] != 0.0 {
                        term *= (-delta.powf(l[i])).exp();
                    }
                    sum += term;
                }
            }
            Self::Gaussian {
                n,
                d,
                t,
                eta,
                epsilon,
                beta,
                gamma,
            } => {
                for i in 0..n.len() {
                    let dd = delta - epsilon[i];
                    let dt = tau - gamma[i];
                    let e = (-eta[i] * dd * dd - beta[i] * dt * dt).exp();
                    let f = n[i] * delta.powf(d[i]) * tau.powf(t[i]) * e;
                    sum += f * (t[i] / tau - 2.0 * beta[i] * dt);
                }
            }
        }
        sum
    }

    pub fn d_delta2(&self, tau: f64, delta: f64) -> f64 {
        let mut sum = 0.0;
        match self {
            Self::Power { n, d, t, l } => {
                for i in 0..n.len() {
                    if l[i] == 0.0 {
                        sum += n[i] * d[i] * (d[i] - 1.0) * delta.powf(d[i] - 2.0)
                            * tau.powf(t[i]);
                    } else {
                        // d2/ddelta2 [delta^d exp(-delta^l)] = delta^(d-2) exp(-delta^l)
                        //   * [d(d-1) - l(2d+l-1) delta^l + l^2 delta^(2l)]
                        let e = (-delta.powf(l[i])).exp();
                        let dl = delta.powf(l[i]);
                        let bracket = d[i] * (d[i] - 1.0)
                            - l[i] * (2.0 * d[i] + l[i] - 1.0) * dl
                            + l[i] * l[i] * dl * dl;
                        sum += n[i] * delta.powf(d[i] - 2.0) * tau.powf(t[i]) * e * bracket;
                    }
                }
            }
            Self::Gaussian {
                n,
                d,
                t,
                eta,
                epsilon,
                beta,
                gamma,
            } => {
                for i in 0..n.len() {
                    let dd = delta - epsilon[i];
                    let dt = tau - gamma[i];
                    let e = (-eta[i] * dd * dd - beta[i] * dt * dt).exp();
                    let f = n[i] * delta.powf(d[i]) * tau.powf(t[i]) * e;
                    // f_dd = f * [(d/delta - 2 eta (delta-eps))^2 - d/delta^2 - 2 eta]
                    let b1 = d[i] / delta - 2.0 * eta[i] * dd;
                    let b2 = -d[i] / (delta * delta) - 2.0 * eta[i];
                    sum += f * (b1 * b1 + b2);
                }
            }
        }
        sum
    }

    pub fn d_tau2(&self, tau: f64, delta: f64) -> f64 {
        let mut sum = 0.0;
        match self {
            Self::Power { n, d, t, l } => {
                for i in 0..n.len() {
                    let mut term =
                        n[i] * delta.powf(d[i]) * t[i] * (t[i] - 1.0) * tau.powf(t[i] - 2.0);
                    if l[i] != 0.0 {
                        term *= (-delta.powf(l[i])).exp();
                    }
                    sum += term;
                }
            }
            Self::Gaussian {
                n,
                d,
                t,
                eta,
                epsilon,
                beta,
                gamma,
            } => {
                for i in 0..n.len() {
                    let dd = delta - epsilon[i];
                    let dt = tau - gamma[i];
                    let e = (-eta[i] * dd * dd - beta[i] * dt * dt).exp();
                    let f = n[i] * delta.powf(d[i]) * tau.powf(t[i]) * e;
                    let b1 = t[i] / tau - 2.0 * beta[i] * dt;
                    let b2 = -t[i] / (tau * tau) - 2.0 * beta[i];
                    sum += f * (b1 * b1 + b2);
                }
            }
        }
        sum
    }

    pub fn d_delta_tau(&self, tau: f64, delta: f64) -> f64 {
        let mut sum = 0.0;
        match self {
            Self::Power { n, d, t, l } => {
                for i in 0..n.len() {
                    let mut term = n[i] * delta.powf(d[i] - 1.0) * t[i] * tau.powf(t[i] - 1.0);
                    if l[i] != 0.0 {
                        term *= (-delta.powf(l[i])).exp() * (d[i] - l[i] * delta.powf(l[i]));
                    } else {
                        term *= d[i];
                    }
                    sum += term;
                }
            }
            Self::Gaussian {
                n,
                d,
                t,
                eta,
                epsilon,
                beta,
                gamma,
            } => {
                for i in 0..n.len() {
                    let dd = delta - epsilon[i];
                    let dt = tau - gamma[i];
                    let e = (-eta[i] * dd * dd - beta[i] * dt * dt).exp();
                    let f = n[i] * delta.powf(d[i]) * tau.powf(t[i]) * e;
                    let bd = d[i] / delta - 2.0 * eta[i] * dd;
                    let bt = t[i] / tau - 2.0 * beta[i] * dt;
                    sum += f * bd * bt;
                }
            }
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(label: &str, analytic: f64, numeric: f64) {
        let scale = analytic.abs().max(numeric.abs()).max(1e-8);
        assert!(
            (analytic - numeric).abs() / scale < 1e-6,
            "{label}: analytic {analytic} vs numeric {numeric}"
        );
    }

    fn check_derivatives(term: &ResidualTerm, tau: f64, delta: f64) {
        let h = 1e-5;

        let fd_delta =
            (term.term(tau, delta + h) - term.term(tau, delta - h)) / (2.0 * h);
        assert_close("d_delta", term.d_delta(tau, delta), fd_delta);

        let fd_tau = (term.term(tau + h, delta) - term.term(tau - h, delta)) / (2.0 * h);
        assert_close("d_tau", term.d_tau(tau, delta), fd_tau);

        let fd_delta2 =
            (term.d_delta(tau, delta + h) - term.d_delta(tau, delta - h)) / (2.0 * h);
        assert_close("d_delta2", term.d_delta2(tau, delta), fd_delta2);

        let fd_tau2 = (term.d_tau(tau + h, delta) - term.d_tau(tau - h, delta)) / (2.0 * h);
        assert_close("d_tau2", term.d_tau2(tau, delta), fd_tau2);

        let fd_cross =
            (term.d_delta(tau + h, delta) - term.d_delta(tau - h, delta)) / (2.0 * h);
        assert_close("d_delta_tau", term.d_delta_tau(tau, delta), fd_cross);
    }

    #[test]
    fn power_term_without_damping() {
        let term = ResidualTerm::Power {
            n: vec![0.42, -1.1],
            d: vec![1.0, 2.0],
            t: vec![0.5, 1.25],
            l: vec![0.0, 0.0],
        };
        check_derivatives(&term, 1.4, 0.8);
    }

    #[test]
    fn power_term_with_exponential_damping() {
        let term = ResidualTerm::Power {
            n: vec![-0.3, 0.7],
            d: vec![1.0, 3.0],
            t: vec![2.0, 1.5],
            l: vec![1.0, 2.0],
        };
        check_derivatives(&term, 0.9, 1.3);
    }

    #[test]
    fn gaussian_term() {
        let term = ResidualTerm::Gaussian {
            n: vec![0.6],
            d: vec![2.0],
            t: vec![1.0],
            eta: vec![0.8],
            epsilon: vec![1.1],
            beta: vec![1.5],
            gamma: vec![1.2],
        };
        check_derivatives(&term, 1.05, 0.95);
    }

    #[test]
    fn damped_power_vanishes_at_high_density() {
        let term = ResidualTerm::Power {
            n: vec![1.0],
            d: vec![1.0],
            t: vec![0.0],
            l: vec![2.0],
        };
        // exp(-delta^2) suppresses the term far from the critical region
        assert!(term.term(1.0, 8.0).abs() < 1e-20);
    }
}
