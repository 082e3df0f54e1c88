//! Command-line or API options for the stationary solvers.
//!
//! `SolveOptions` bundles the two values an outer driver supplies: the convergence
//! tolerance (usually typed in by a user) and an optional iteration cap.

use crate::error::IterError;
use crate::utils::convergence::Convergence;
use num_traits::Float;

/// Iteration cap used when the caller does not override it.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Tolerance & iteration cap for one solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// Stop once the step norm drops strictly below this value
    pub tol: f64,

    /// Maximum number of sweeps
    pub max_iters: usize,
}

impl SolveOptions {
    pub fn new(tol: f64) -> Self {
        Self { tol, max_iters: DEFAULT_MAX_ITERS }
    }

    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Stopping policy in the solver's scalar type.
    pub fn convergence<T: Float>(&self) -> Convergence<T> {
        Convergence {
            tol: T::from(self.tol).unwrap_or_else(T::nan),
            max_iters: self.max_iters,
        }
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::new(1e-4)
    }
}

/// Parse a user-supplied tolerance such as `"1e-4"`.
///
/// Non-positive values are accepted (they simply can never be reached); NaN is not.
pub fn parse_tolerance(input: &str) -> Result<f64, IterError> {
    let trimmed = input.trim();
    let tol: f64 = trimmed
        .parse()
        .map_err(|_| IterError::InvalidTolerance(trimmed.to_string()))?;
    if tol.is_nan() {
        return Err(IterError::InvalidTolerance(trimmed.to_string()));
    }
    Ok(tol)
}
