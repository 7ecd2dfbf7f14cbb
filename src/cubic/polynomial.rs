//! Monic cubic `x³ + a·x² + b·x + c`.
//!
//! The derivative `3x² + 2a·x + b` decides the shape of the curve:
//! its discriminant `4a² − 12b` tells whether the cubic is monotonic or has
//! a local maximum at α and a local minimum at β (α < β).

use std::str::FromStr;

use super::errors::CubicError;


/// Coefficients of a monic cubic. Immutable for the duration of a solve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cubic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Cubic {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Rejects NaN or infinite coefficients.
    pub fn validate(&self) -> Result<(), CubicError> {
        for (name, got) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !got.is_finite() {
                return Err(CubicError::NonFiniteCoefficient { name, got });
            }
        }
        Ok(())
    }

    /// f(x) = x³ + a·x² + b·x + c
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        x * x * x + self.a * x * x + self.b * x + self.c
    }

    /// Discriminant of the derivative, `(2a)² − 4·3·b`.
    #[inline]
    pub fn derivative_discriminant(&self) -> f64 {
        (2.0 * self.a) * (2.0 * self.a) - 4.0 * 3.0 * self.b
    }

    /// Stationary points `(α, β)` with α < β, or `None` when the
    /// discriminant is not strictly positive.
    pub fn stationary_points(&self) -> Option<(f64, f64)> {
        let d = self.derivative_discriminant();
        if d > 0.0 {
            let sqrt_d = d.sqrt();
            Some((
                (-2.0 * self.a - sqrt_d) / 6.0,
                (-2.0 * self.a + sqrt_d) / 6.0,
            ))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Cubic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x^3 + ({})x^2 + ({})x + ({})", self.a, self.b, self.c)
    }
}

/// Parses three whitespace-separated numbers `a b c`.
impl FromStr for Cubic {
    type Err = CubicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coeffs = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| CubicError::InvalidInput { token: token.to_string() })
            })
            .collect::<Result<Vec<f64>, CubicError>>()?;

        match coeffs.as_slice() {
            &[a, b, c] => {
                let cubic = Cubic::new(a, b, c);
                cubic.validate()?;
                Ok(cubic)
            }
            other => Err(CubicError::WrongArity { got: other.len() }),
        }
    }
}
