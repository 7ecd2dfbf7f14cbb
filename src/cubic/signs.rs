//! Sign utilities for the cubic solver.
//! - [`Sign::classify`] : three-way classification against a tolerance

/// Three-way sign of a real number under a tolerance `eps`.
///
/// ┌ [`Sign::Negative`] : x <= -eps
/// ├ [`Sign::Zero`]     : -eps < x < eps
/// └ [`Sign::Positive`] : x >= eps
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Classifies `x` against `eps`.
    ///
    /// Exactly one class is returned for every finite `x` and `eps > 0`.
    /// NaN falls through to [`Sign::Zero`]; callers are expected to reject
    /// non-finite values before classifying.
    #[inline]
    pub fn classify(x: f64, eps: f64) -> Self {
        if x <= -eps {
            Sign::Negative
        } else if x >= eps {
            Sign::Positive
        } else {
            Sign::Zero
        }
    }

    #[inline] pub fn is_negative(self) -> bool { self == Sign::Negative }
    #[inline] pub fn is_zero(self)     -> bool { self == Sign::Zero }
    #[inline] pub fn is_positive(self) -> bool { self == Sign::Positive }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sign::Negative => "-",
            Sign::Zero     => "0",
            Sign::Positive => "+",
        };
        write!(f, "{s}")
    }
}
