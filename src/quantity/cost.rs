use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use crate::quantity::{Quantity, area::SquareMetres};

/// Euros.
pub type Cost = Quantity<f64, 0, 0, 1>;

/// Euros per square metre of the dwelling.
pub type CostPerSquareMetre = Quantity<f64, -1, 0, 1>;

/// Euros per year.
pub type AnnualCost = Quantity<f64, 0, -1, 1>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€", self.0)
    }
}

impl Display for CostPerSquareMetre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €/m²", self.0)
    }
}

impl Debug for CostPerSquareMetre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€/m²", self.0)
    }
}

impl Display for AnnualCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €/year", self.0)
    }
}

impl Debug for AnnualCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€/y", self.0)
    }
}

impl Mul<SquareMetres> for CostPerSquareMetre {
    type Output = Cost;

    fn mul(self, rhs: SquareMetres) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

/// Number of years it takes to accumulate the cost.
impl Div<AnnualCost> for Cost {
    type Output = f64;

    fn div(self, rhs: AnnualCost) -> Self::Output {
        self.0 / rhs.0
    }
}
