//! tests for the empirical error order
use approx::assert_abs_diff_eq;
use numlab::quadrature::{error_order, QuadratureError, Rule};

type TestResult = Result<(), QuadratureError>;

#[test]
fn orders_match_theory_for_exponential() -> TestResult {
    let exact = 10f64.exp() - 1.0;

    for rule in [Rule::Trapezoidal, Rule::Simpson] {
        for n in [100, 1000] {
            let p = error_order(rule, f64::exp, exact, 0.0, 10.0, n)?;
            assert_abs_diff_eq!(p, rule.theoretical_order() as f64, epsilon = 0.1);
        }
    }
    Ok(())
}

#[test]
fn trapezoid_order_below_two() -> TestResult {
    // leading error term shrinks by exactly 4, the next one makes it slightly less
    let exact = 10f64.exp() - 1.0;
    let p = error_order(Rule::Trapezoidal, f64::exp, exact, 0.0, 10.0, 100)?;

    assert!(p < 2.0);
    assert!(p > 1.999);
    Ok(())
}

#[test]
fn exact_estimate_has_no_order() {
    let err = error_order(Rule::Trapezoidal, |_x| 1.0, 1.0, 0.0, 1.0, 1).unwrap_err();
    assert_eq!(err, QuadratureError::ExactMatch { intervals: 1 });
}

#[test]
fn non_finite_exact() {
    let err = error_order(Rule::Simpson, f64::exp, f64::NAN, 0.0, 1.0, 4).unwrap_err();
    assert!(matches!(err, QuadratureError::NonFiniteExact { got } if got.is_nan()));
}

#[test]
fn propagates_rule_errors() {
    let err = error_order(Rule::Simpson, f64::exp, 1.0, 0.0, 1.0, 0).unwrap_err();
    assert_eq!(err, QuadratureError::ZeroIntervals);
}
