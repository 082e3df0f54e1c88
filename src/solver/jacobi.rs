//! Jacobi iteration (Saad §4.1).
//!
//! Every component of the new iterate is computed from the previous iterate only:
//!
//! `x_new[i] = (b[i] − Σ_{j≠i} A[i,j]·x[j]) / A[i,i]`
//!
//! Rows are therefore independent within a sweep. With the `rayon` feature, large systems
//! split the sweep across threads; each row sum is still accumulated in column order, so
//! the parallel sweep produces exactly the serial result.

use std::fmt;

use crate::config::DEFAULT_MAX_ITERS;
use crate::core::traits::{MatShape, MatrixGet};
use crate::error::IterError;
use crate::solver::LinearSolver;
use crate::utils::convergence::{as_f64, check_system, is_decoupled, step_norm, Convergence, SolveResult};
use num_traits::Float;

/// Below this many rows the sweep always runs on the calling thread.
pub const PAR_ROW_THRESHOLD: usize = 256;

#[derive(Debug, Clone)]
pub struct JacobiSolver<T> {
    pub conv: Convergence<T>,
}

impl<T: Float> JacobiSolver<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters } }
    }

    /// Same as `new` with the default cap of 100 sweeps.
    pub fn with_tol(tol: T) -> Self {
        Self::new(tol, DEFAULT_MAX_ITERS)
    }
}

impl<T: Float + fmt::Display> fmt::Display for JacobiSolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Jacobi(tol={}, max_iters={})", self.conv.tol, self.conv.max_iters)
    }
}

#[inline]
fn row_update<M, T>(a: &M, b: &[T], x: &[T], i: usize) -> T
where
    M: MatrixGet<T>,
    T: Float,
{
    let mut s = T::zero();
    for (j, &xj) in x.iter().enumerate() {
        if j != i {
            s = s + a.get(i, j) * xj;
        }
    }
    (b[i] - s) / a.get(i, i)
}

fn sweep<M, T>(a: &M, b: &[T], x: &[T], x_new: &mut [T])
where
    M: MatrixGet<T> + Sync,
    T: Float + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        if x.len() >= PAR_ROW_THRESHOLD {
            use rayon::prelude::*;
            x_new
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, xi)| *xi = row_update(a, b, x, i));
            return;
        }
    }
    for (i, xi) in x_new.iter_mut().enumerate() {
        *xi = row_update(a, b, x, i);
    }
}

impl<M, T> LinearSolver<M, T> for JacobiSolver<T>
where
    M: MatShape + MatrixGet<T> + Sync,
    T: Float + Send + Sync,
{
    type Error = IterError;

    fn solve(&self, a: &M, b: &[T]) -> Result<SolveResult<T>, IterError> {
        let n = check_system(a, b)?;
        if self.conv.unreachable() {
            log::warn!(
                "Jacobi: tolerance {:e} can never be met, running all {} sweeps",
                as_f64(self.conv.tol),
                self.conv.max_iters
            );
        }
        // A diagonal system is solved exactly by the first sweep, unless the caller asked
        // for a tolerance no step can meet.
        let decoupled = !self.conv.unreachable() && is_decoupled::<M, T>(a, n);

        let mut x = vec![T::zero(); n];
        let mut x_new = vec![T::zero(); n];
        let mut history = Vec::new();

        for it in 1..=self.conv.max_iters {
            sweep(a, b, &x, &mut x_new);
            let err = step_norm(&x_new, &x);
            history.push(err);
            log::trace!("Jacobi sweep {}: step norm = {:.6e}", it, as_f64(err));
            if self.conv.check(err) || decoupled {
                log::debug!("Jacobi converged after {} sweeps (step norm {:.3e})", it, as_f64(err));
                return Ok(SolveResult { x: x_new, iterations: it, history, converged: true });
            }
            std::mem::swap(&mut x, &mut x_new);
        }

        log::warn!(
            "Jacobi: no convergence after {} sweeps (last step norm {:.3e})",
            self.conv.max_iters,
            history.last().map_or(f64::NAN, |&e| as_f64(e))
        );
        Ok(SolveResult { x, iterations: self.conv.max_iters, history, converged: false })
    }
}

/// Solve `A x = b` by Jacobi iteration from a zero start.
///
/// Stops as soon as `‖x_new − x‖₂ < tol` or after `max_iters` sweeps. Exhaustion is not an
/// error: the last iterate comes back with `iterations == max_iters` and `converged == false`.
pub fn jacobi<M, T>(a: &M, b: &[T], tol: T, max_iters: usize) -> Result<SolveResult<T>, IterError>
where
    M: MatShape + MatrixGet<T> + Sync,
    T: Float + Send + Sync,
{
    JacobiSolver::new(tol, max_iters).solve(a, b)
}
