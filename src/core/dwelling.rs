use std::{collections::BTreeSet, ops::RangeInclusive};

use bon::Builder;
use crate::{core::energy_class::EnergyClass, quantity::area::SquareMetres};

/// Homeowner's input to the calculator.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct Dwelling {
    pub surface_area: SquareMetres,

    pub current_class: EnergyClass,

    /// Selected catalog ids.
    #[builder(default)]
    pub improvements: BTreeSet<String>,
}

impl Dwelling {
    /// Surface areas the estimates are calibrated for.
    pub const PRACTICAL_SURFACE_AREA: RangeInclusive<f64> = 40.0..=200.0;

    pub fn has_practical_surface_area(&self) -> bool {
        Self::PRACTICAL_SURFACE_AREA.contains(&self.surface_area.0)
    }
}
