//! tests for the Thomas algorithm
use approx::assert_abs_diff_eq;
use numlab::tridiagonal::{solve, TridiagonalError};

type TestResult = Result<(), TridiagonalError>;

#[test]
fn solves_3x3() -> TestResult {
    let x = solve(&[-1.0, -1.0], &[2.0, 2.0, 2.0], &[-1.0, -1.0], &[0.0, 0.0, 4.0])?;

    assert_eq!(x.len(), 3);
    for (xi, expected) in x.iter().zip([1.0, 2.0, 3.0]) {
        assert_abs_diff_eq!(*xi, expected, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn residual_of_dominant_system() -> TestResult {
    let n = 50;
    let lower: Vec<f64> = (0..n - 1).map(|i| 1.0 + i as f64 * 0.01).collect();
    let upper: Vec<f64> = (0..n - 1).map(|i| -0.5 + i as f64 * 0.02).collect();
    let diag:  Vec<f64> = (0..n).map(|i| 4.0 + (i % 3) as f64).collect();
    let rhs:   Vec<f64> = (0..n).map(|i| (i as f64).sin()).collect();

    let x = solve(&lower, &diag, &upper, &rhs)?;

    for i in 0..n {
        let mut row = diag[i] * x[i];
        if i > 0     { row += lower[i - 1] * x[i - 1]; }
        if i + 1 < n { row += upper[i] * x[i + 1]; }
        assert_abs_diff_eq!(row, rhs[i], epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn singular_pivot_mid_sweep() {
    let err = solve(&[1.0], &[1.0, 1.0], &[1.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, TridiagonalError::SingularPivot { row: 1 });
}

#[test]
fn dimension_errors() {
    assert_eq!(solve(&[], &[], &[], &[]).unwrap_err(), TridiagonalError::Empty);

    let err = solve(&[1.0], &[2.0, 2.0, 2.0], &[1.0, 1.0], &[0.0; 3]).unwrap_err();
    assert_eq!(
        err,
        TridiagonalError::DimensionMismatch { name: "lower", n: 3, got: 1, expected: 2 }
    );

    let err = solve(&[1.0, 1.0], &[2.0, 2.0, 2.0], &[1.0, 1.0], &[0.0; 2]).unwrap_err();
    assert_eq!(
        err,
        TridiagonalError::DimensionMismatch { name: "rhs", n: 3, got: 2, expected: 3 }
    );
}

#[test]
fn non_finite_entry() {
    let err = solve(&[1.0], &[2.0, 2.0], &[1.0], &[0.0, f64::NAN]).unwrap_err();
    assert_eq!(err, TridiagonalError::NonFiniteEntry { name: "rhs", idx: 1 });
}
