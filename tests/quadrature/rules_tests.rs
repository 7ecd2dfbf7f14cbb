//! tests for the composite rules
use approx::assert_abs_diff_eq;
use numlab::quadrature::{integrate, simpson, trapezoidal, QuadratureError, Rule};

type TestResult = Result<(), QuadratureError>;

#[test]
fn simpson_is_exact_for_cubics() -> TestResult {
    let rep = simpson(|x| x * x * x, 0.0, 2.0, 1)?;

    assert_eq!(rep.value, 4.0);
    assert_eq!(rep.evals, 3);
    assert_eq!(rep.rule, Rule::Simpson);
    Ok(())
}

#[test]
fn trapezoid_is_exact_for_lines() -> TestResult {
    let rep = trapezoidal(|x| 3.0 * x + 1.0, 0.0, 1.0, 4)?;

    assert_abs_diff_eq!(rep.value, 2.5, epsilon = 1e-15);
    assert_eq!(rep.intervals, 4);
    Ok(())
}

#[test]
fn exponential_on_0_10() -> TestResult {
    let exact = 10f64.exp() - 1.0;

    let trap = integrate(Rule::Trapezoidal, f64::exp, 0.0, 10.0, 1000)?;
    let simp = integrate(Rule::Simpson, f64::exp, 0.0, 10.0, 1000)?;

    // trapezoid overestimates a convex integrand
    assert!(trap.value > exact);
    assert!((trap.value - exact) / exact < 1e-5);
    assert!((simp.value - exact).abs() / exact < 1e-11);
    Ok(())
}

#[test]
fn simpson_beats_trapezoid() -> TestResult {
    let exact = 2.0;
    for n in [2, 8, 32] {
        let trap = trapezoidal(f64::sin, 0.0, std::f64::consts::PI, n)?;
        let simp = simpson(f64::sin, 0.0, std::f64::consts::PI, n)?;
        assert!((simp.value - exact).abs() < (trap.value - exact).abs(), "n = {n}");
    }
    Ok(())
}

#[test]
fn evaluation_counts() -> TestResult {
    assert_eq!(trapezoidal(f64::exp, 0.0, 10.0, 100)?.evals, 101);
    assert_eq!(simpson(f64::exp, 0.0, 10.0, 100)?.evals, 201);
    Ok(())
}

#[test]
fn rejects_bad_input() {
    assert_eq!(
        trapezoidal(f64::exp, 1.0, 1.0, 10).unwrap_err(),
        QuadratureError::InvalidBounds { a: 1.0, b: 1.0 }
    );
    assert_eq!(
        simpson(f64::exp, 2.0, 1.0, 10).unwrap_err(),
        QuadratureError::InvalidBounds { a: 2.0, b: 1.0 }
    );
    assert!(matches!(
        simpson(f64::exp, f64::NEG_INFINITY, 1.0, 10).unwrap_err(),
        QuadratureError::InvalidBounds { .. }
    ));
    assert_eq!(
        trapezoidal(f64::exp, 0.0, 1.0, 0).unwrap_err(),
        QuadratureError::ZeroIntervals
    );
}

#[test]
fn singular_integrand() {
    let err = trapezoidal(|x| 1.0 / x, 0.0, 1.0, 10).unwrap_err();
    assert_eq!(err, QuadratureError::NonFiniteEvaluation { x: 0.0, fx: f64::INFINITY });
}

#[test]
fn rule_names() {
    assert_eq!(Rule::Trapezoidal.to_string(), "trapezoidal");
    assert_eq!(Rule::Simpson.theoretical_order(), 4);
}
