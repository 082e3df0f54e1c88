//! stationary: Jacobi and Gauss–Seidel iteration over Faer
//!
//! This crate provides the two classical stationary iterative methods for square dense
//! linear systems, the convergence bookkeeping that drives them (step-norm stopping rule,
//! per-iteration error history), and a comparator that runs both on the same system.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod matrix;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use solver::*;
pub use utils::*;

// Re-export SolveResult at the crate root for convenience
pub use utils::convergence::SolveResult;
