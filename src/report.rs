//! Plain-text export of a calculation, suitable for saving or e-mailing.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::core::{calculation::Calculation, energy_class::EnergyClass};

#[must_use]
pub struct Report<'a> {
    pub calculation: &'a Calculation,
    pub generated_on: NaiveDate,
}

impl Report<'_> {
    const DISCLAIMER: &'static str = "The subsidy and the tax deduction are approximations for \
        guidance only, not an official computation. Actual amounts depend on the household \
        income, the region, and the call for applications in force.";

    fn verdict(meets: bool) -> &'static str {
        if meets { "yes" } else { "no" }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let calculation = self.calculation;

        writeln!(f, "EPBD 2024 RENOVATION ESTIMATE")?;
        writeln!(f, "Generated on {}", self.generated_on.format("%Y-%m-%d"))?;
        writeln!(f)?;

        writeln!(f, "Dwelling")?;
        writeln!(f, "  Surface area:   {}", calculation.surface_area)?;
        writeln!(f, "  Current class:  {}", calculation.current_class)?;
        writeln!(f)?;

        writeln!(f, "Selected measures")?;
        if calculation.measures.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for measure in &calculation.measures {
            writeln!(
                f,
                "  - {}: {} (+{} class steps)",
                measure.name, measure.cost, measure.class_steps,
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Costs")?;
        writeln!(f, "  Total cost:         {}", calculation.total_cost)?;
        writeln!(f, "  Estimated subsidy:  {}", calculation.estimated_subsidy)?;
        writeln!(f, "  Tax deduction:      {}", calculation.tax_deduction)?;
        writeln!(f, "  Net cost:           {}", calculation.net_cost)?;
        writeln!(f, "  Annual savings:     {}", calculation.annual_savings)?;
        writeln!(
            f,
            "  Payback period:     {} {}",
            calculation.payback_years,
            if calculation.payback_years == 1 { "year" } else { "years" },
        )?;
        writeln!(f)?;

        writeln!(f, "Energy class")?;
        writeln!(
            f,
            "  {} → {} (+{} of {:.1} estimated steps)",
            calculation.current_class,
            calculation.new_class,
            calculation.class_steps_gained,
            calculation.total_gain,
        )?;
        writeln!(
            f,
            "  Meets the 2030 minimum ({}):  {}",
            EnergyClass::MIN_2030,
            Self::verdict(calculation.meets_2030_threshold),
        )?;
        writeln!(
            f,
            "  Meets the 2033 minimum ({}):  {}",
            EnergyClass::MIN_2033,
            Self::verdict(calculation.meets_2033_threshold),
        )?;
        writeln!(f)?;

        write!(f, "{}", Self::DISCLAIMER)
    }
}
