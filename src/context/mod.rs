//! Context module: method selection and comparison.
//!
//! - [`comparator`]: `SolverKind` dispatch and the `compare` driver that runs Jacobi and
//!   Gauss–Seidel on the same system.

pub mod comparator;
pub use comparator::{compare, Comparison, SolverKind};
