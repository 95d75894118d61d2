//! Brent's method for 1-D bracketed root finding.

use crate::error::{SolverError, SolverResult};

const MAX_ITER: usize = 100;

/// Find a root of `f` in `[a, b]` using Brent's method.
///
/// `f(a)` and `f(b)` must have opposite signs, or one of them must be
/// exactly zero. `tol` is the absolute tolerance on the root location;
/// the effective bracket tolerance is `2*eps*|b| + tol/2`.
///
/// Combines inverse quadratic interpolation, the secant step, and
/// bisection as the safety fallback (Numerical Recipes style).
pub fn brent<F>(mut f: F, a: f64, b: f64, tol: f64) -> SolverResult<f64>
where
    F: FnMut(f64) -> f64,
{
    let (mut a, mut b) = (a, b);
    let mut fa = f(a);
    let mut fb = f(b);

    // Exact roots at the endpoints
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    if fa * fb > 0.0 {
        return Err(SolverError::NotBracketed { a, b });
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..MAX_ITER {
        // Keep the root bracketed by [b, c].
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }

        // b must stay the best current approximation.
        if fc.abs() < fb.abs() {
            let (na, nb, nc) = (b, c, b);
            a = na;
            b = nb;
            c = nc;
            let (nfa, nfb, nfc) = (fb, fc, fb);
            fa = nfa;
            fb = nfb;
            fc = nfc;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * tol;
        let xm = 0.5 * (c - b);

        // Convergence: small bracket or small residual
        if xm.abs() <= tol1 || fb == 0.0 {
            return Ok(b);
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q);
            if a == c {
                // Secant step
                p = 2.0 * xm * s;
                q = 1.0 - s;
            } else {
                // Inverse quadratic interpolation
                q = fa / fc;
                let r = fb / fc;
                p = s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0));
                q = (q - 1.0) * (r - 1.0) * (s - 1.0);
            }

            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();

            // Accept the interpolated step only if it is small and safe
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;

        if d.abs() > tol1 {
            b += d;
        } else {
            b += tol1.copysign(xm);
        }

        fb = f(b);
    }

    Err(SolverError::IterationLimit { limit: MAX_ITER })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_root() {
        let root = brent(|x| x * x - 4.0, 0.0, 5.0, 1e-10).unwrap();
        assert!((root - 2.0).abs() < 1e-8);
    }

    #[test]
    fn exponential_root() {
        // exp(-x) - 0.5 = 0  =>  x = ln 2
        let root = brent(|x| (-x).exp() - 0.5, 0.0, 10.0, 1e-10).unwrap();
        assert!((root - std::f64::consts::LN_2).abs() < 1e-8);
    }

    #[test]
    fn exact_endpoint_root() {
        let root = brent(|x| x - 3.0, 3.0, 5.0, 1e-10).unwrap();
        assert_eq!(root, 3.0);
    }

    #[test]
    fn rejects_unbracketed_interval() {
        let err = brent(|x| x * x - 4.0, 3.0, 5.0, 1e-10).unwrap_err();
        assert!(matches!(err, SolverError::NotBracketed { .. }));
    }

    #[test]
    fn steep_function_converges() {
        let root = brent(|x| x.powi(9) - 0.5, 0.0, 1.0, 1e-12).unwrap();
        assert!((root - 0.5f64.powf(1.0 / 9.0)).abs() < 1e-6);
    }
}
