use bon::Builder;

use crate::{
    core::{
        aid::AidRules,
        calculation::{Calculation, Measure},
        catalog::Catalog,
        dwelling::Dwelling,
        energy_class::EnergyClass,
    },
    prelude::*,
    quantity::{
        area::SquareMetres,
        cost::{AnnualCost, Cost},
    },
};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("unknown improvement `{id}`")]
    UnknownImprovement { id: String },

    #[error("surface area must be positive, got {0}")]
    InvalidSurfaceArea(SquareMetres),
}

/// Estimates cost, aids and the resulting energy class of a renovation.
///
/// Pure: the same inputs always produce the same [`Calculation`].
#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Calculator<'a> {
    catalog: &'a Catalog,
    rules: &'a AidRules,
    dwelling: &'a Dwelling,
}

impl<S: calculator_builder::IsComplete> CalculatorBuilder<'_, S> {
    pub fn calculate(self) -> Result<Calculation, CalculationError> {
        self.build().calculate()
    }
}

impl Calculator<'_> {
    #[instrument(
        skip_all,
        fields(
            surface_area = %self.dwelling.surface_area,
            current_class = %self.dwelling.current_class,
            n_improvements = self.dwelling.improvements.len(),
        )
    )]
    fn calculate(self) -> Result<Calculation, CalculationError> {
        let surface_area = self.dwelling.surface_area;
        if !surface_area.is_positive() {
            return Err(CalculationError::InvalidSurfaceArea(surface_area));
        }
        if !self.dwelling.has_practical_surface_area() {
            warn!(%surface_area, "the estimates are not calibrated for this surface area");
        }

        let measures = self.measures()?;
        let total_cost: Cost = measures.iter().map(|measure| measure.cost).sum();
        let total_gain: f64 = measures.iter().map(|measure| measure.class_steps).sum();

        let current_class = self.dwelling.current_class;
        let new_class = current_class.improved_by(Self::applied_steps(total_gain));
        let class_steps_gained = new_class.index().saturating_sub(current_class.index());

        let estimated_subsidy = self.rules.subsidy(total_cost);
        let tax_deduction = self.rules.tax_deduction(total_cost, total_gain);
        let annual_savings = self.rules.annual_savings(total_cost);
        let payback_years = Self::payback_years(total_cost - estimated_subsidy, annual_savings);

        let calculation = Calculation {
            surface_area,
            current_class,
            measures,
            total_cost,
            total_gain,
            estimated_subsidy,
            tax_deduction,
            net_cost: total_cost - estimated_subsidy - tax_deduction,
            new_class,
            class_steps_gained,
            annual_savings,
            payback_years,
            meets_2030_threshold: new_class >= EnergyClass::MIN_2030,
            meets_2033_threshold: new_class >= EnergyClass::MIN_2033,
        };
        info!(
            total_cost = %calculation.total_cost,
            net_cost = %calculation.net_cost,
            new_class = %calculation.new_class,
            calculation.payback_years,
            "calculated",
        );
        Ok(calculation)
    }

    /// Price the selected improvements, failing on the first unknown id.
    fn measures(&self) -> Result<Vec<Measure>, CalculationError> {
        self.dwelling
            .improvements
            .iter()
            .map(|id| -> Result<Measure, CalculationError> {
                let improvement = self
                    .catalog
                    .get(id)
                    .ok_or_else(|| CalculationError::UnknownImprovement { id: id.clone() })?;
                let cost = improvement.cost_for(self.dwelling.surface_area);
                debug!(%id, %cost, improvement.class_steps, "priced");
                Ok(Measure {
                    id: improvement.id.clone(),
                    name: improvement.name.clone(),
                    cost,
                    class_steps: improvement.class_steps,
                })
            })
            .collect()
    }

    /// Whole letters the gain moves the dwelling up, before capping at A.
    #[expect(clippy::cast_possible_truncation)]
    #[expect(clippy::cast_sign_loss)]
    fn applied_steps(total_gain: f64) -> usize {
        total_gain.floor().max(0.0) as usize
    }

    /// Whole years, at least one, for the savings to repay the subsidised investment.
    #[expect(clippy::cast_possible_truncation)]
    #[expect(clippy::cast_sign_loss)]
    fn payback_years(investment: Cost, annual_savings: AnnualCost) -> u32 {
        if annual_savings <= AnnualCost::ZERO {
            return 1;
        }
        (investment / annual_savings).round().max(1.0) as u32
    }
}
