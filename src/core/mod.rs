//! Core traits and their implementations for Faer matrices and slices.

pub mod traits;
pub mod wrappers;

pub use traits::{InnerProduct, MatShape, MatVec, MatrixGet};
