//! Tests for core dense matrix operations: construction, matrix-vector multiplication, and norms.
//!
//! These tests verify the MatVec and InnerProduct trait implementations for Faer matrices and
//! slices, and the `DenseMatrix` constructors used to hand literal data to the solvers.

use approx::assert_abs_diff_eq;
use faer::Mat;
use rand::Rng;
use stationary::core::traits::{InnerProduct, MatVec};
use stationary::matrix::DenseMatrix;
use stationary::utils::convergence::step_norm;

/// Matrix-vector multiplication for a small random dense matrix, checked against a manual sum.
#[test]
fn matvec_random_small() {
    let n = 5;
    let mut rng = rand::thread_rng();
    let vals: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let a = <Mat<f64> as DenseMatrix<f64>>::from_raw(n, n, vals.clone()).unwrap();
    let x: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    let mut y = vec![0.0; n];
    a.matvec(&x, &mut y);

    // check y[i] == sum_j A[i,j]*x[j]
    for i in 0..n {
        let expected = (0..n).map(|j| vals[j * n + i] * x[j]).sum::<f64>();
        assert_abs_diff_eq!(y[i], expected, epsilon = 1e-12);
    }
}

/// Euclidean norm, and the step norm used as the stopping signal.
#[test]
fn norm_and_step_norm() {
    let x = vec![1.0, 2.0, 3.0];
    let y = vec![4.0, -5.0, 6.0];
    let ip = ();
    let norm_x = ip.norm(x.as_slice());
    let expected_norm = ((1.0f64).powi(2) + 2.0f64.powi(2) + 3.0f64.powi(2)).sqrt();
    assert_abs_diff_eq!(norm_x, expected_norm, epsilon = 1e-12);

    let diff: Vec<f64> = x.iter().zip(&y).map(|(a, b)| a - b).collect();
    assert_abs_diff_eq!(step_norm(&x, &y), ip.norm(diff.as_slice()), epsilon = 1e-12);
}

/// Row literals and raw column-major storage describe the same matrix.
#[test]
fn rows_and_raw_agree() {
    let by_rows: Mat<f64> = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let by_raw = <Mat<f64> as DenseMatrix<f64>>::from_raw(2, 2, vec![1.0, 3.0, 2.0, 4.0]).unwrap();
    assert_eq!(by_rows, by_raw);
}
