//! tests for the bracketing searches
use approx::assert_abs_diff_eq;
use numlab::cubic::config::CubicCfg;
use numlab::cubic::errors::CubicError;
use numlab::cubic::report::Termination;
use numlab::cubic::search::{
    search_decreasing, search_increasing, search_left_unbounded, search_right_unbounded,
};

type TestResult = Result<(), CubicError>;

#[test]
fn increasing_finds_2() -> TestResult {
    let rep = search_increasing(|x| x - 2.0, 0.0, 5.0, CubicCfg::new())?;

    assert_eq!(rep.termination, Termination::ZeroReached);
    assert_abs_diff_eq!(rep.root, 2.0, epsilon = 1e-9);
    assert_eq!(rep.evals, rep.iterations);
    assert_eq!(rep.doublings, 0);
    Ok(())
}

#[test]
fn decreasing_mirrors_increasing() -> TestResult {
    let up   = search_increasing(|x| x - 2.0, 0.0, 5.0, CubicCfg::new())?;
    let down = search_decreasing(|x| 2.0 - x, 0.0, 5.0, CubicCfg::new())?;

    assert_eq!(up.root, down.root);
    assert_eq!(up.iterations, down.iterations);
    Ok(())
}

#[test]
fn exact_midpoint_returns_immediately() -> TestResult {
    let rep = search_increasing(|x| x - 0.5, 0.0, 1.0, CubicCfg::new())?;

    assert_eq!(rep.root, 0.5);
    assert_eq!(rep.iterations, 1);
    assert_eq!(rep.evals, 1);
    assert_eq!(rep.termination, Termination::ZeroReached);
    Ok(())
}

#[test]
fn steep_function_stops_on_width() -> TestResult {
    let rep = search_increasing(|x| 1e6 * (x - 1.0 / 3.0), 0.0, 1.0, CubicCfg::new())?;

    assert_eq!(rep.termination, Termination::WidthReached);
    assert!(rep.right - rep.left < 1e-9);
    assert_abs_diff_eq!(rep.root, 1.0 / 3.0, epsilon = 1e-9);
    // final midpoint is evaluated for the report
    assert_eq!(rep.evals, rep.iterations + 1);
    Ok(())
}

#[test]
fn uses_max_iter() -> TestResult {
    let cfg = CubicCfg::new().with_max_iter(3);
    let rep = search_increasing(|x| x - 0.3, 0.0, 1.0, cfg)?;

    assert_eq!(rep.termination, Termination::IterationLimit);
    assert_eq!(rep.iterations, 3);
    assert_eq!(rep.root, 0.3125);
    Ok(())
}

#[test]
fn degenerate_bracket_returns_its_point() -> TestResult {
    let rep = search_increasing(|x| x - 1.0, 4.0, 4.0, CubicCfg::new())?;

    assert_eq!(rep.root, 4.0);
    assert_eq!(rep.iterations, 0);
    assert_eq!(rep.termination, Termination::WidthReached);
    Ok(())
}

#[test]
fn left_unbounded_doubles_probe() -> TestResult {
    let rep = search_left_unbounded(|x| x + 100.0, 0.0, CubicCfg::new())?;

    assert_eq!(rep.doublings, 7);
    assert_abs_diff_eq!(rep.root, -100.0, epsilon = 1e-9);
    assert!(rep.left >= -128.0);
    Ok(())
}

#[test]
fn right_unbounded_doubles_probe() -> TestResult {
    let rep = search_right_unbounded(|x| x - 100.0, 0.0, CubicCfg::new())?;

    assert_eq!(rep.doublings, 7);
    assert_abs_diff_eq!(rep.root, 100.0, epsilon = 1e-9);
    assert!(rep.right <= 128.0);
    Ok(())
}

#[test]
fn unbounded_start_beyond_unit_probe() -> TestResult {
    // probe starts at the bound itself when it is already outside [-1, 1]
    let rep = search_right_unbounded(|x| x - 5.0, 3.0, CubicCfg::new())?;
    assert_eq!(rep.doublings, 1);
    assert_abs_diff_eq!(rep.root, 5.0, epsilon = 1e-9);

    let rep = search_left_unbounded(|x| x + 5.0, -3.0, CubicCfg::new())?;
    assert_eq!(rep.doublings, 1);
    assert_abs_diff_eq!(rep.root, -5.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn probe_doubling_cap() {
    let cfg = CubicCfg::new().with_max_doublings(10);
    let err = search_left_unbounded(|_x| 1.0, 0.0, cfg).unwrap_err();

    assert_eq!(err, CubicError::ProbeDiverged { start: -1.0, probe: -1024.0, doublings: 10 });
}

#[test]
fn probe_overflow_is_an_error() {
    // -e^x overflows to -inf once the probe reaches 1024
    let err = search_right_unbounded(|x| -x.exp(), 0.0, CubicCfg::new()).unwrap_err();

    assert_eq!(err, CubicError::ProbeDiverged { start: 1.0, probe: 1024.0, doublings: 10 });
}

#[test]
fn non_finite_eval() {
    let err = search_increasing(|x| 1.0 / (x - 0.5), 0.0, 1.0, CubicCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        CubicError::NonFiniteEvaluation { x, fx } if x == 0.5 && fx.is_infinite()
    ));
}

#[test]
fn detects_invalid_bounds() {
    let err = search_increasing(|x| x, 2.0, 0.0, CubicCfg::new()).unwrap_err();
    assert_eq!(err, CubicError::InvalidBounds { l: 2.0, r: 0.0 });

    let err = search_right_unbounded(|x| x, f64::NAN, CubicCfg::new()).unwrap_err();
    assert!(matches!(err, CubicError::InvalidBounds { .. }));
}
