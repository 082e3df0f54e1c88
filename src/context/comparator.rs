//! Side-by-side runs of the two stationary methods.
//!
//! `SolverKind` selects a method and dispatches a single solve; [`compare`] runs both on the
//! same `(A, b, options)` and reports which one needed fewer sweeps. The two solves share only
//! the read-only `A` and `b`, so with the `rayon` feature they run concurrently.
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems, §4.1. SIAM.

use std::fmt;

use crate::config::SolveOptions;
use crate::core::traits::{MatShape, MatrixGet};
use crate::error::IterError;
use crate::solver::{GaussSeidelSolver, JacobiSolver, LinearSolver};
use crate::utils::convergence::SolveResult;
use num_traits::Float;

/// The available stationary methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// Parallel-update method
    Jacobi,
    /// Sequential-update method
    GaussSeidel,
}

impl SolverKind {
    /// Run this method on `A x = b` with the given options.
    pub fn solve<M, T>(self, a: &M, b: &[T], opts: &SolveOptions) -> Result<SolveResult<T>, IterError>
    where
        M: MatShape + MatrixGet<T> + Sync,
        T: Float + Send + Sync,
    {
        match self {
            SolverKind::Jacobi => JacobiSolver { conv: opts.convergence() }.solve(a, b),
            SolverKind::GaussSeidel => GaussSeidelSolver { conv: opts.convergence() }.solve(a, b),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SolverKind::Jacobi => "Jacobi",
            SolverKind::GaussSeidel => "Gauss-Seidel",
        })
    }
}

/// Results of both methods on one system.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison<T> {
    pub jacobi: SolveResult<T>,
    pub gauss_seidel: SolveResult<T>,
}

impl<T> Comparison<T> {
    /// The method that used strictly fewer sweeps; a tie goes to Jacobi.
    pub fn faster(&self) -> SolverKind {
        if self.jacobi.iterations > self.gauss_seidel.iterations {
            SolverKind::GaussSeidel
        } else {
            SolverKind::Jacobi
        }
    }

    pub fn result(&self, kind: SolverKind) -> &SolveResult<T> {
        match kind {
            SolverKind::Jacobi => &self.jacobi,
            SolverKind::GaussSeidel => &self.gauss_seidel,
        }
    }

    /// One-line verdict, e.g. "Gauss-Seidel converged faster (5 iterations) than Jacobi (9 iterations)."
    pub fn summary(&self) -> String {
        let winner = self.faster();
        let loser = match winner {
            SolverKind::Jacobi => SolverKind::GaussSeidel,
            SolverKind::GaussSeidel => SolverKind::Jacobi,
        };
        format!(
            "{} converged faster ({} iterations) than {} ({} iterations).",
            winner,
            self.result(winner).iterations,
            loser,
            self.result(loser).iterations
        )
    }
}

/// Solve `A x = b` with both methods and identical options.
pub fn compare<M, T>(a: &M, b: &[T], opts: &SolveOptions) -> Result<Comparison<T>, IterError>
where
    M: MatShape + MatrixGet<T> + Sync,
    T: Float + Send + Sync,
{
    #[cfg(feature = "rayon")]
    let (jacobi, gauss_seidel) = rayon::join(
        || SolverKind::Jacobi.solve(a, b, opts),
        || SolverKind::GaussSeidel.solve(a, b, opts),
    );
    #[cfg(not(feature = "rayon"))]
    let (jacobi, gauss_seidel) = (
        SolverKind::Jacobi.solve(a, b, opts),
        SolverKind::GaussSeidel.solve(a, b, opts),
    );
    let cmp = Comparison { jacobi: jacobi?, gauss_seidel: gauss_seidel? };
    log::info!("{}", cmp.summary());
    Ok(cmp)
}
