//! Gauss–Seidel iteration (Saad §4.1).
//!
//! Rows are updated in order and each update reads the entries already refreshed in the
//! current sweep:
//!
//! `x[i] = (b[i] − Σ_{j<i} A[i,j]·x[j] − Σ_{j>i} A[i,j]·x_old[j]) / A[i,i]`
//!
//! `x_old` is the snapshot taken at the start of the sweep; it feeds the upper sum and the
//! step norm. The row dependency makes the sweep inherently sequential.

use std::fmt;

use crate::config::DEFAULT_MAX_ITERS;
use crate::core::traits::{MatShape, MatrixGet};
use crate::error::IterError;
use crate::solver::LinearSolver;
use crate::utils::convergence::{as_f64, check_system, is_decoupled, step_norm, Convergence, SolveResult};
use num_traits::Float;

#[derive(Debug, Clone)]
pub struct GaussSeidelSolver<T> {
    pub conv: Convergence<T>,
}

impl<T: Float> GaussSeidelSolver<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters } }
    }

    /// Same as `new` with the default cap of 100 sweeps.
    pub fn with_tol(tol: T) -> Self {
        Self::new(tol, DEFAULT_MAX_ITERS)
    }
}

impl<T: Float + fmt::Display> fmt::Display for GaussSeidelSolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GaussSeidel(tol={}, max_iters={})", self.conv.tol, self.conv.max_iters)
    }
}

fn forward_sweep<M, T>(a: &M, b: &[T], x: &mut [T], x_old: &[T])
where
    M: MatrixGet<T>,
    T: Float,
{
    let n = x.len();
    for i in 0..n {
        let mut lower = T::zero();
        for j in 0..i {
            lower = lower + a.get(i, j) * x[j];
        }
        let mut upper = T::zero();
        for j in (i + 1)..n {
            upper = upper + a.get(i, j) * x_old[j];
        }
        x[i] = (b[i] - lower - upper) / a.get(i, i);
    }
}

impl<M, T> LinearSolver<M, T> for GaussSeidelSolver<T>
where
    M: MatShape + MatrixGet<T>,
    T: Float,
{
    type Error = IterError;

    fn solve(&self, a: &M, b: &[T]) -> Result<SolveResult<T>, IterError> {
        let n = check_system(a, b)?;
        if self.conv.unreachable() {
            log::warn!(
                "Gauss-Seidel: tolerance {:e} can never be met, running all {} sweeps",
                as_f64(self.conv.tol),
                self.conv.max_iters
            );
        }
        let decoupled = !self.conv.unreachable() && is_decoupled::<M, T>(a, n);

        let mut x = vec![T::zero(); n];
        let mut x_old = vec![T::zero(); n];
        let mut history = Vec::new();

        for it in 1..=self.conv.max_iters {
            x_old.copy_from_slice(&x);
            forward_sweep(a, b, &mut x, &x_old);
            let err = step_norm(&x, &x_old);
            history.push(err);
            log::trace!("Gauss-Seidel sweep {}: step norm = {:.6e}", it, as_f64(err));
            if self.conv.check(err) || decoupled {
                log::debug!("Gauss-Seidel converged after {} sweeps (step norm {:.3e})", it, as_f64(err));
                return Ok(SolveResult { x, iterations: it, history, converged: true });
            }
        }

        log::warn!(
            "Gauss-Seidel: no convergence after {} sweeps (last step norm {:.3e})",
            self.conv.max_iters,
            history.last().map_or(f64::NAN, |&e| as_f64(e))
        );
        Ok(SolveResult { x, iterations: self.conv.max_iters, history, converged: false })
    }
}

/// Solve `A x = b` by Gauss–Seidel iteration from a zero start.
///
/// Same stopping rule and exhaustion behaviour as [`jacobi`](fn@crate::solver::jacobi).
pub fn gauss_seidel<M, T>(a: &M, b: &[T], tol: T, max_iters: usize) -> Result<SolveResult<T>, IterError>
where
    M: MatShape + MatrixGet<T>,
    T: Float,
{
    GaussSeidelSolver::new(tol, max_iters).solve(a, b)
}
