//! Dense‐matrix API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait and its implementation for `faer::Mat<T>`,
//! enabling construction from raw column-major storage or from literal row data.

use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::IterError;
use faer::Mat;
use num_traits::Float;

/// Dense matrices the solvers can be handed directly.
pub trait DenseMatrix<T>: MatVec<T> + MatShape + MatrixGet<T> + Sized {
    /// Construct from raw column-major storage of exactly `nrows * ncols` entries.
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, IterError>;

    /// Construct from a sequence of rows, e.g. `&[[10.0, -1.0], [-1.0, 11.0]]`.
    ///
    /// Every row must have the length of the first one.
    fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, IterError>;
}

impl<T: Float> DenseMatrix<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, IterError> {
        if data.len() != nrows * ncols {
            return Err(IterError::DimensionMismatch { expected: nrows * ncols, found: data.len() });
        }
        Ok(Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i]))
    }

    fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, IterError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        for (row, r) in rows.iter().enumerate() {
            let len = r.as_ref().len();
            if len != ncols {
                return Err(IterError::RaggedRow { row, len, expected: ncols });
            }
        }
        Ok(Mat::from_fn(nrows, ncols, |i, j| rows[i].as_ref()[j]))
    }
}
