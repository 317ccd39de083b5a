use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::quantity::Quantity;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, From, Serialize, Deserialize)]
pub struct Percentage(pub u16);

impl Percentage {
    pub const HUNDRED: Self = Self(100);

    /// Convert the percentage into `0.0..=1.0`.
    pub fn to_ratio(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} %", self.0)
    }
}

impl Debug for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<const AREA: isize, const TIME: isize, const COST: isize> Mul<Percentage>
    for Quantity<f64, AREA, TIME, COST>
{
    type Output = Self;

    fn mul(self, rhs: Percentage) -> Self::Output {
        Quantity(self.0 * rhs.to_ratio())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::cost::Cost;

    #[test]
    fn test_to_ratio() {
        assert_abs_diff_eq!(Percentage(40).to_ratio(), 0.4);
        assert_abs_diff_eq!(Percentage::HUNDRED.to_ratio(), 1.0);
    }

    #[test]
    fn test_mul_quantity() {
        assert_abs_diff_eq!((Cost::from(5600.0) * Percentage(60)).0, 3360.0);
    }
}
