//! Tests for the stationary solvers (Jacobi, Gauss–Seidel) against direct solves.
//!
//! Random strictly diagonally dominant systems are solved with both methods and compared
//! elementwise with a Faer LU solve. The remaining tests pin the stopping policy: history
//! length, exhaustion at the cap, reproducibility, and the one-unknown case.

use approx::assert_abs_diff_eq;
use faer::Mat;
use faer::linalg::solvers::SolveCore;
use rand::Rng;
use stationary::matrix::DenseMatrix;
use stationary::solver::{GaussSeidelSolver, JacobiSolver, LinearSolver, gauss_seidel, jacobi};
use stationary::utils::convergence::residual_norm;

/// Random strictly diagonally dominant matrix `A` and right-hand side `b`.
///
/// Off-diagonal entries are uniform in [-1, 1]; each diagonal entry is the row's absolute
/// off-diagonal sum plus `n`, which keeps the Jacobi iteration matrix norm below 1/2.
fn random_diag_dominant(n: usize, symmetric: bool) -> (Mat<f64>, Vec<f64>) {
    let mut rng = rand::thread_rng();
    let mut a = Mat::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            if i == j || (symmetric && j < i) {
                continue;
            }
            let v = rng.gen_range(-1.0..1.0);
            a[(i, j)] = v;
            if symmetric {
                a[(j, i)] = v;
            }
        }
    }
    for i in 0..n {
        let off: f64 = (0..n).filter(|&j| j != i).map(|j| a[(i, j)].abs()).sum();
        a[(i, i)] = off + n as f64;
    }
    let b: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    (a, b)
}

fn direct_solve(a: &Mat<f64>, b: &[f64]) -> Vec<f64> {
    let n = b.len();
    let mut x = b.to_vec();
    let lu = faer::linalg::solvers::FullPivLu::new(a.as_ref());
    let x_mat = faer::MatMut::from_column_major_slice_mut(&mut x, n, 1);
    lu.solve_in_place_with_conj(faer::Conj::No, x_mat);
    x
}

fn textbook() -> (Mat<f64>, Vec<f64>) {
    let a: Mat<f64> =
        DenseMatrix::from_rows(&[[10.0, -1.0, 2.0], [-1.0, 11.0, -1.0], [2.0, -1.0, 10.0]]).unwrap();
    (a, vec![6.0, 25.0, -11.0])
}

/// Tridiagonal `[-1, 4, -1]` matrix of size `n`.
fn make_tridiag(n: usize) -> Mat<f64> {
    let mut mat = Mat::<f64>::zeros(n, n);
    for i in 0..n {
        if i > 0 {
            mat[(i, i - 1)] = -1.0;
        }
        mat[(i, i)] = 4.0;
        if i + 1 < n {
            mat[(i, i + 1)] = -1.0;
        }
    }
    mat
}

#[test]
fn both_methods_match_direct_on_random_systems() {
    let n = 10;
    let tol = 1e-10;
    let (a, b) = random_diag_dominant(n, false);
    let x_direct = direct_solve(&a, &b);
    for res in [jacobi(&a, &b, tol, 1000).unwrap(), gauss_seidel(&a, &b, tol, 1000).unwrap()] {
        assert!(res.converged);
        assert!(res.iterations < 1000);
        assert_eq!(res.history.len(), res.iterations);
        assert!(residual_norm(&a, &res.x, &b) < 100.0 * tol);
        for i in 0..n {
            assert_abs_diff_eq!(res.x[i], x_direct[i], epsilon = 1e-8);
        }
    }
}

#[test]
fn textbook_system_converges_within_tolerance() {
    let (a, b) = textbook();
    let tol = 1e-4;
    let x_direct = direct_solve(&a, &b);
    let res_j = jacobi(&a, &b, tol, 100).unwrap();
    let res_gs = gauss_seidel(&a, &b, tol, 100).unwrap();
    for res in [&res_j, &res_gs] {
        assert!(res.converged);
        assert!(res.iterations < 100);
        assert!(residual_norm(&a, &res.x, &b) < 10.0 * tol);
        for i in 0..3 {
            assert_abs_diff_eq!(res.x[i], x_direct[i], epsilon = tol);
        }
    }
    assert!(res_gs.iterations < res_j.iterations);
}

#[test]
fn gauss_seidel_no_slower_on_symmetric_dominant_systems() {
    let n = 6;
    let a = make_tridiag(n);
    let x_true: Vec<f64> = (1..=n).map(|v| v as f64).collect();
    let mut b = vec![0.0; n];
    stationary::core::traits::MatVec::<f64>::matvec(&a, &x_true, &mut b);
    for tol in [1e-4, 1e-8, 1e-12] {
        let res_j = jacobi(&a, &b, tol, 500).unwrap();
        let res_gs = gauss_seidel(&a, &b, tol, 500).unwrap();
        assert!(res_j.converged && res_gs.converged);
        assert!(res_gs.iterations <= res_j.iterations, "tol {tol}: GS {} > Jacobi {}", res_gs.iterations, res_j.iterations);
    }
}

#[test]
fn history_length_matches_iterations() {
    let (a, b) = textbook();
    for max_iters in [1, 3, 7, 100] {
        let res_j = jacobi(&a, &b, 1e-6, max_iters).unwrap();
        let res_gs = gauss_seidel(&a, &b, 1e-6, max_iters).unwrap();
        assert_eq!(res_j.history.len(), res_j.iterations);
        assert_eq!(res_gs.history.len(), res_gs.iterations);
    }
}

#[test]
fn unreachable_tolerance_exhausts_cap() {
    let (a, b) = textbook();
    let res_j = JacobiSolver::with_tol(0.0).solve(&a, &b).unwrap();
    let res_gs = GaussSeidelSolver::with_tol(0.0).solve(&a, &b).unwrap();
    for res in [&res_j, &res_gs] {
        assert!(!res.converged);
        assert_eq!(res.iterations, 100);
        assert_eq!(res.history.len(), 100);
    }
    // negative tolerance behaves the same
    let res = jacobi(&a, &b, -1.0, 12).unwrap();
    assert_eq!(res.iterations, 12);
    assert!(!res.converged);
}

#[test]
fn repeated_solves_are_identical() {
    let (a, b) = random_diag_dominant(8, true);
    let jac = JacobiSolver::new(1e-9, 200);
    let gs = GaussSeidelSolver::new(1e-9, 200);
    assert_eq!(jac.solve(&a, &b).unwrap(), jac.solve(&a, &b).unwrap());
    assert_eq!(gs.solve(&a, &b).unwrap(), gs.solve(&a, &b).unwrap());
}

#[test]
fn one_unknown_takes_one_sweep() {
    let a: Mat<f64> = DenseMatrix::from_rows(&[[2.0]]).unwrap();
    for res in [jacobi(&a, &[4.0], 1e-6, 100).unwrap(), gauss_seidel(&a, &[4.0], 1e-6, 100).unwrap()] {
        assert_eq!(res.x, vec![2.0]);
        assert_eq!(res.iterations, 1);
        assert_eq!(res.history.len(), 1);
    }
}

#[test]
fn diagonal_systems_are_solved_exactly() {
    let a = Mat::from_fn(4, 4, |i, j| if i == j { (i + 1) as f64 } else { 0.0 });
    let b = vec![1.0, 4.0, 9.0, 16.0];
    let res = gauss_seidel(&a, &b, 1e-12, 50).unwrap();
    assert_eq!(res.iterations, 1);
    assert_eq!(res.x, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn matrix_views_are_accepted() {
    let (a, b) = textbook();
    let owned = jacobi(&a, &b, 1e-6, 100).unwrap();
    let view = jacobi(&a.as_ref(), &b, 1e-6, 100).unwrap();
    assert_eq!(owned, view);
}
