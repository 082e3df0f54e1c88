//! Stationary solver interfaces.

use crate::utils::convergence::SolveResult;

/// Common interface for the stationary iterative solvers.
pub trait LinearSolver<M, T> {
    type Error;
    /// Solve A·x = b starting from the zero vector.
    /// Returns the final iterate together with the sweep count and step-norm history.
    fn solve(&self, a: &M, b: &[T]) -> Result<SolveResult<T>, Self::Error>;
}

pub mod jacobi;
pub use jacobi::{jacobi, JacobiSolver};

pub mod gauss_seidel;
pub use gauss_seidel::{gauss_seidel, GaussSeidelSolver};
