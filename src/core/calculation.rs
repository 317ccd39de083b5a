use serde::Serialize;

use crate::{
    core::energy_class::EnergyClass,
    quantity::{
        area::SquareMetres,
        cost::{AnnualCost, Cost},
    },
};

/// Estimated outcome of renovating a dwelling.
///
/// Replaced as a whole on every recalculation, never patched.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Calculation {
    pub surface_area: SquareMetres,

    pub current_class: EnergyClass,

    /// Selected measures in the order of their ids.
    pub measures: Vec<Measure>,

    pub total_cost: Cost,

    /// Unrounded sum of the class steps of the selected measures.
    pub total_gain: f64,

    pub estimated_subsidy: Cost,

    pub tax_deduction: Cost,

    /// Total cost minus the aids. Negative when the aids exceed the cost.
    pub net_cost: Cost,

    pub new_class: EnergyClass,

    /// Letters actually gained, capped by the top of the scale.
    pub class_steps_gained: usize,

    pub annual_savings: AnnualCost,

    pub payback_years: u32,

    pub meets_2030_threshold: bool,

    pub meets_2033_threshold: bool,
}

/// Selected improvement priced for the specific dwelling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Measure {
    pub id: String,
    pub name: String,
    pub cost: Cost,
    pub class_steps: f64,
}
