//! 2-D Newton-Raphson on residuals with an analytic Jacobian.

use crate::error::{SolverError, SolverResult};
use nalgebra::{Matrix2, Vector2};

/// Determinant magnitude below which the Jacobian is treated as singular.
const DET_FLOOR: f64 = 1e-20;

/// Newton solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct Newton2dConfig {
    /// Convergence tolerance on each residual component
    pub tol: f64,
    /// Maximum iterations
    pub max_iterations: usize,
    /// Optional step damping factor in (0, 1]; `None` takes full steps
    pub damping: Option<f64>,
}

impl Default for Newton2dConfig {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iterations: 100,
            damping: None,
        }
    }
}

/// Solve f1(x, y) = f2(x, y) = 0.
///
/// `func` returns the residual vector and the 2x2 Jacobian
/// `[[df1/dx, df1/dy], [df2/dx, df2/dy]]` at a given point. Converges
/// when `max(|f1|, |f2|) < tol`.
pub fn newton2d<F>(
    mut func: F,
    x0: f64,
    y0: f64,
    config: &Newton2dConfig,
) -> SolverResult<(f64, f64)>
where
    F: FnMut(f64, f64) -> (Vector2<f64>, Matrix2<f64>),
{
    let mut x = x0;
    let mut y = y0;

    for iteration in 0..config.max_iterations {
        let (r, jac) = func(x, y);

        if r[0].abs() < config.tol && r[1].abs() < config.tol {
            return Ok((x, y));
        }

        let det = jac[(0, 0)] * jac[(1, 1)] - jac[(0, 1)] * jac[(1, 0)];
        if det.abs() < DET_FLOOR {
            return Err(SolverError::SingularJacobian { iteration, x, y });
        }

        // dx = -J^-1 r, written out for the 2x2 case
        let mut dx = -(jac[(1, 1)] * r[0] - jac[(0, 1)] * r[1]) / det;
        let mut dy = -(-jac[(1, 0)] * r[0] + jac[(0, 0)] * r[1]) / det;

        if let Some(alpha) = config.damping {
            dx *= alpha;
            dy *= alpha;
        }

        x += dx;
        y += dy;

        if !x.is_finite() || !y.is_finite() {
            return Err(SolverError::Diverged { iteration });
        }
    }

    Err(SolverError::IterationLimit {
        limit: config.max_iterations,
    })
}
