//! Wrappers for faer dense matrix types and vector operations.
//!
//! This module implements the core traits for `faer::Mat`, `faer::MatRef` and plain slices,
//! so the stationary solvers can run on Faer storage while staying generic over the matrix type.
//! The norm on slices is always evaluated serially in index order; the solvers rely on
//! that to make repeated solves bit-for-bit reproducible.

use crate::core::traits::{InnerProduct, MatShape, MatVec, MatrixGet};
use faer::{Mat, MatRef};
use num_traits::Float;

/// Computes `y = A * x` for an owned Faer matrix.
impl<T: Float> MatVec<T> for Mat<T> {
    fn matvec(&self, x: &[T], y: &mut [T]) {
        self.as_ref().matvec(x, y)
    }
}

/// Computes `y = A * x` for a Faer matrix view.
impl<'a, T: Float> MatVec<T> for MatRef<'a, T> {
    fn matvec(&self, x: &[T], y: &mut [T]) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = (0..self.ncols()).fold(T::zero(), |acc, j| acc + self[(i, j)] * x[j]);
        }
    }
}

impl<T: Float> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<'a, T: Float> MatShape for MatRef<'a, T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<T: Float> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<'a, T: Float> MatrixGet<T> for MatRef<'a, T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

/// Serial Euclidean norm over slices.
impl<T: Float> InnerProduct<[T]> for () {
    type Scalar = T;
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &[T]) -> T {
        x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi).sqrt()
    }
}
