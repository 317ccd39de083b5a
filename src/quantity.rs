pub mod area;
pub mod cost;
pub mod percentage;

use serde::{Deserialize, Serialize};

/// Dimensioned value, the exponents are for square metres, years and euros.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    derive_more::Sum,
)]
pub struct Quantity<T, const AREA: isize, const TIME: isize, const COST: isize>(pub T);

impl<T, const AREA: isize, const TIME: isize, const COST: isize> Quantity<T, AREA, TIME, COST>
where
    Self: PartialOrd,
{
    pub fn min(mut self, rhs: Self) -> Self {
        if rhs < self {
            self = rhs;
        }
        self
    }
}

impl<const AREA: isize, const TIME: isize, const COST: isize> Quantity<f64, AREA, TIME, COST> {
    pub const ZERO: Self = Self(0.0);

    /// Finite and strictly positive.
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}
