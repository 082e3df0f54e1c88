//! Matrix module: dense matrix construction on top of Faer.

pub mod dense;
pub use dense::DenseMatrix;
