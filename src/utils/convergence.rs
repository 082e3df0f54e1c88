//! Convergence tracking & stopping rule for the stationary solvers.
//!
//! Both methods stop on the Euclidean norm of the step between successive iterates,
//! `‖x_new − x_old‖₂ < tol`. This measures stagnation of the iterate, not smallness of the
//! residual `‖Ax − b‖₂`; [`residual_norm`] is provided for callers who want the latter.

use crate::core::traits::{InnerProduct, MatShape, MatVec, MatrixGet};
use crate::error::IterError;
use num_traits::Float;

/// Step norms, one entry per completed sweep.
pub type ErrorHistory<T> = Vec<T>;

/// Stopping criteria.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

impl<T: Float> Convergence<T> {
    /// True when `step` is strictly below the tolerance.
    pub fn check(&self, step: T) -> bool {
        step < self.tol
    }

    /// A tolerance no step norm can satisfy.
    pub fn unreachable(&self) -> bool {
        self.tol.is_nan() || self.tol <= T::zero()
    }
}

/// Outcome of one solve: final iterate, sweeps performed, step-norm history.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveResult<T> {
    pub x: Vec<T>,
    pub iterations: usize,
    pub history: ErrorHistory<T>,
    pub converged: bool,
}

impl<T: Float> SolveResult<T> {
    /// Last recorded step norm, if any sweep ran.
    pub fn final_error(&self) -> Option<T> {
        self.history.last().copied()
    }

    /// `log10` of every history entry, for plotting on a logarithmic axis.
    /// A zero step maps to negative infinity.
    pub fn log10_history(&self) -> Vec<T> {
        self.history.iter().map(|e| e.log10()).collect()
    }
}

/// `sqrt(Σ (new[i] − old[i])²)`, accumulated in index order.
pub fn step_norm<T: Float>(new: &[T], old: &[T]) -> T {
    debug_assert_eq!(new.len(), old.len());
    new.iter()
        .zip(old)
        .fold(T::zero(), |acc, (&a, &b)| {
            let d = a - b;
            acc + d * d
        })
        .sqrt()
}

/// Lossy view of a scalar for log output.
pub(crate) fn as_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

/// `‖A x − b‖₂`. Diagnostic only; never used as a stopping rule.
pub fn residual_norm<M, T>(a: &M, x: &[T], b: &[T]) -> T
where
    M: MatVec<T>,
    T: Float,
    (): InnerProduct<[T], Scalar = T>,
{
    let mut ax = vec![T::zero(); b.len()];
    a.matvec(x, &mut ax);
    for (r, &bi) in ax.iter_mut().zip(b) {
        *r = *r - bi;
    }
    let ip = ();
    ip.norm(ax.as_slice())
}

/// Entry checks shared by both solvers: square `a`, `b` of matching length, non-zero diagonal.
pub fn check_system<M, T>(a: &M, b: &[T]) -> Result<usize, IterError>
where
    M: MatShape + MatrixGet<T>,
    T: Float,
{
    let (nrows, ncols) = (a.nrows(), a.ncols());
    if nrows != ncols {
        return Err(IterError::NotSquare { nrows, ncols });
    }
    if b.len() != nrows {
        return Err(IterError::DimensionMismatch { expected: nrows, found: b.len() });
    }
    if let Some(i) = (0..nrows).find(|&i| a.get(i, i) == T::zero()) {
        return Err(IterError::ZeroPivot(i));
    }
    Ok(nrows)
}

/// True when every off-diagonal entry is zero, i.e. one sweep is a direct solve.
pub fn is_decoupled<M, T>(a: &M, n: usize) -> bool
where
    M: MatrixGet<T>,
    T: Float,
{
    (0..n).all(|i| (0..n).all(|j| i == j || a.get(i, j) == T::zero()))
}
