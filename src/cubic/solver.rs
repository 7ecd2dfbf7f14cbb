//! Root-count case analysis.
//!
//! The sign of the derivative discriminant `D = 4a² − 12b` splits the
//! problem in two:
//!
//! ┌ D <= 0 : f is monotonic, exactly one real root (reported ×3)
//! └ D  > 0 : f has a local max at α and a local min at β; the signs of
//!            f(α) and f(β) select one of six root layouts
//!
//! ```text
//!        f(α) > 0, f(β) < 0
//!
//!    ^                  /
//!    |        _        /
//!    |       /^\      /
//! ---+------@-|-@----@---->
//!    |     /  |  \_/
//!    |    /   |   ^
//!    |   /  alpha beta
//! ```

use tracing::{debug, warn};

use super::config::CubicCfg;
use super::errors::CubicError;
use super::polynomial::Cubic;
use super::report::{CubicReport, Root, Shape};
use super::search::{search_decreasing, search_left_unbounded, search_right_unbounded, Counted};
use super::signs::Sign;


/// Solves `x³ + a·x² + b·x + c = 0` with the default [`CubicCfg`].
pub fn solve(cubic: Cubic) -> Result<CubicReport, CubicError> {
    solve_with(cubic, CubicCfg::default())
}

/// Finds every real root of `cubic` together with its multiplicity.
///
/// # Behavior
/// With `D` the derivative discriminant, classified under `cfg.eps()`:
///
/// - `D <= 0`: classify f(0); negative searches `[0, +inf)`, positive
///   searches `(-inf, 0]`, zero returns exactly `0.0`. One root, multiplicity 3.
/// - `D > 0`: with stationary points α < β, first match wins:
///
/// | f(α) | f(β) | roots                                                 |
/// |------|------|-------------------------------------------------------|
/// | +    | +    | (-inf, α) ×1                                          |
/// | +    | 0    | (-inf, α) ×1, β ×2                                    |
/// | 0    | 0    | (α+β)/2 ×1                                            |
/// | +    | −    | (-inf, α) ×1, (α, β) ×1, (β, +inf) ×1                 |
/// | 0    | −    | α ×2, (β, +inf) ×1                                    |
/// | −    | −    | (β, +inf) ×1                                          |
///
/// Any other pattern yields no roots and [`Shape::Inconsistent`].
///
/// # Returns
/// A [`CubicReport`] whose roots are ordered left to right.
///
/// # Errors
/// ├ [`CubicError::NonFiniteCoefficient`] - NaN or inf coefficient
/// ├ configuration errors from [`CubicCfg::validate`]
/// ├ [`CubicError::NonFiniteEvaluation`]  - f overflowed during bisection
/// └ [`CubicError::ProbeDiverged`]        - no bracket inside the f64 range
///
/// # Notes
/// ├ Multiplicity 2 in the touching layouts is inferred from the shape, not
/// │ verified; three clustered simple roots can be reported as a double root.
/// └ Total multiplicity can be below 3 when eps masks nearby roots.
pub fn solve_with(cubic: Cubic, cfg: CubicCfg) -> Result<CubicReport, CubicError> {
    cubic.validate()?;
    let cfg = cfg.validate()?;
    let eps = cfg.eps();

    let f = |x: f64| cubic.eval(x);
    let mut own_f = f;
    let mut counted = Counted::new(&mut own_f);

    let discriminant = cubic.derivative_discriminant();
    let mut roots = Vec::with_capacity(3);
    let mut search_evals = 0;

    let stationary = cubic
        .stationary_points()
        .filter(|_| Sign::classify(discriminant, eps).is_positive());

    let Some((alpha, beta)) = stationary else {
        let f0 = counted.eval(0.0)?;
        let value = match Sign::classify(f0, eps) {
            Sign::Negative => {
                let rep = search_right_unbounded(f, 0.0, cfg)?;
                search_evals += rep.evals;
                rep.root
            }
            Sign::Positive => {
                let rep = search_left_unbounded(f, 0.0, cfg)?;
                search_evals += rep.evals;
                rep.root
            }
            Sign::Zero => 0.0,
        };
        roots.push(Root::new(value, 3));

        debug!(%cubic, discriminant, f0, value, "monotonic cubic");
        return Ok(CubicReport {
            roots,
            shape: Shape::Monotonic,
            discriminant,
            stationary_points: None,
            evals: counted.evals + search_evals,
        });
    };

    let f_alpha = counted.eval(alpha)?;
    let f_beta  = counted.eval(beta)?;
    let signs = (Sign::classify(f_alpha, eps), Sign::classify(f_beta, eps));

    let mut left_of = |x: f64| -> Result<f64, CubicError> {
        let rep = search_left_unbounded(f, x, cfg)?;
        search_evals += rep.evals;
        Ok(rep.root)
    };

    let shape = match signs {
        (Sign::Positive, Sign::Positive) => {
            roots.push(Root::new(left_of(alpha)?, 1));
            Shape::SingleLeft
        }
        (Sign::Positive, Sign::Zero) => {
            roots.push(Root::new(left_of(alpha)?, 1));
            roots.push(Root::new(beta, 2));
            Shape::TouchingRight
        }
        (Sign::Zero, Sign::Zero) => {
            roots.push(Root::new((alpha + beta) / 2.0, 1));
            Shape::Collapsed
        }
        (Sign::Positive, Sign::Negative) => {
            roots.push(Root::new(left_of(alpha)?, 1));

            let middle = search_decreasing(f, alpha, beta, cfg)?;
            let right  = search_right_unbounded(f, beta, cfg)?;
            search_evals += middle.evals + right.evals;

            roots.push(Root::new(middle.root, 1));
            roots.push(Root::new(right.root, 1));
            Shape::ThreeSimple
        }
        (Sign::Zero, Sign::Negative) => {
            let right = search_right_unbounded(f, beta, cfg)?;
            search_evals += right.evals;

            roots.push(Root::new(alpha, 2));
            roots.push(Root::new(right.root, 1));
            Shape::TouchingLeft
        }
        (Sign::Negative, Sign::Negative) => {
            let right = search_right_unbounded(f, beta, cfg)?;
            search_evals += right.evals;

            roots.push(Root::new(right.root, 1));
            Shape::SingleRight
        }
        (f_alpha, f_beta) => {
            warn!(%cubic, %f_alpha, %f_beta, eps, "inconsistent stationary values; no roots emitted");
            Shape::Inconsistent { f_alpha, f_beta }
        }
    };

    debug!(%cubic, discriminant, alpha, beta, f_alpha, f_beta, ?shape, "cubic with two stationary points");
    Ok(CubicReport {
        roots,
        shape,
        discriminant,
        stationary_points: Some((alpha, beta)),
        evals: counted.evals + search_evals,
    })
}
