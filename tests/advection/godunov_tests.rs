//! tests for the upwind advection scheme
use numlab::advection::{exact, shelf, solve, AdvectionCfg, AdvectionError};

type TestResult = Result<(), AdvectionError>;

#[test]
fn unit_courant_transports_exactly() -> TestResult {
    let cfg = AdvectionCfg::new(11, 1.0, 5.0)?;
    let num = solve(&cfg)?;
    let ex  = exact(&cfg)?;

    assert_eq!(cfg.layers()?, 4);
    assert_eq!(num.t.len(), 4);
    assert_eq!(num.max_final_error(&ex), 0.0);
    Ok(())
}

#[test]
fn stable_scheme_stays_within_shelf() -> TestResult {
    for r in [0.25, 0.5, 1.0] {
        for nodes in [11, 101] {
            let grid = solve(&AdvectionCfg::new(nodes, r, 5.0)?)?;
            for layer in &grid.values {
                assert!(layer.iter().all(|&u| (1.0..=3.0).contains(&u)), "r = {r}, nodes = {nodes}");
            }
        }
    }
    Ok(())
}

#[test]
fn unstable_scheme_overshoots() -> TestResult {
    let grid = solve(&AdvectionCfg::new(11, 1.25, 5.0)?)?;

    assert!(grid.last_layer().iter().any(|&u| u > 3.0));
    Ok(())
}

#[test]
fn left_boundary_is_upstream_value() -> TestResult {
    let grid = solve(&AdvectionCfg::new(101, 0.5, 5.0)?)?;

    assert!(grid.values.iter().all(|layer| layer[0] == 3.0));
    assert_eq!(grid.x[0], -10.0);
    assert_eq!(grid.x[100], 10.0);
    Ok(())
}

#[test]
fn shelf_profile() {
    assert_eq!(shelf(-1.0), 3.0);
    assert_eq!(shelf(0.0), 3.0);
    assert_eq!(shelf(1e-3), 1.0);
}

#[test]
fn rejects_bad_parameters() {
    assert_eq!(AdvectionCfg::new(1, 1.0, 5.0).unwrap_err(), AdvectionError::TooFewNodes { got: 1 });
    assert_eq!(AdvectionCfg::new(11, 0.0, 5.0).unwrap_err(), AdvectionError::InvalidCourant { got: 0.0 });
    assert_eq!(AdvectionCfg::new(11, 1.0, -5.0).unwrap_err(), AdvectionError::InvalidSpeed { got: -5.0 });

    let tiny = AdvectionCfg::new(11, 1e-9, 5.0).unwrap();
    assert!(matches!(tiny.layers().unwrap_err(), AdvectionError::TooManyLayers { .. }));
}
