use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type SquareMetres = Quantity<f64, 1, 0, 0>;

impl Display for SquareMetres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m²", self.0)
    }
}

impl Debug for SquareMetres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m²", self.0)
    }
}
