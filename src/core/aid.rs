use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{
        Quantity,
        cost::{AnnualCost, Cost},
        percentage::Percentage,
    },
};

/// Public aid and savings parameters.
///
/// These are approximations for an estimate, not an official computation:
/// the actual grants depend on the household income and the region.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AidRules {
    /// Share of the total cost covered by the grant.
    pub subsidy_rate: Percentage,

    pub subsidy_cap: Cost,

    /// Share of the total cost saved on energy bills every year.
    pub savings_rate: Percentage,

    /// Income-tax deduction tiers by the total class-step gain.
    pub deduction_tiers: Vec<DeductionTier>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeductionTier {
    /// Minimal unrounded class-step gain for the tier to apply.
    pub min_gain: f64,

    pub rate: Percentage,

    pub cap: Cost,
}

impl Default for AidRules {
    fn default() -> Self {
        Self {
            subsidy_rate: Percentage(40),
            subsidy_cap: Quantity(15_000.0),
            savings_rate: Percentage(15),
            deduction_tiers: vec![
                DeductionTier { min_gain: 0.0, rate: Percentage(20), cap: Quantity(7_500.0) },
                DeductionTier { min_gain: 1.0, rate: Percentage(40), cap: Quantity(7_500.0) },
                DeductionTier { min_gain: 2.0, rate: Percentage(60), cap: Quantity(15_000.0) },
            ],
        }
    }
}

impl AidRules {
    pub fn validate(&self) -> Result {
        ensure!(
            self.subsidy_rate <= Percentage::HUNDRED,
            "invalid subsidy rate: {}",
            self.subsidy_rate,
        );
        ensure!(
            self.savings_rate <= Percentage::HUNDRED,
            "invalid savings rate: {}",
            self.savings_rate,
        );
        ensure!(
            self.subsidy_cap.0.is_finite() && self.subsidy_cap >= Cost::ZERO,
            "invalid subsidy cap: {}",
            self.subsidy_cap,
        );
        for tier in &self.deduction_tiers {
            ensure!(tier.min_gain.is_finite(), "invalid tier minimal gain: {}", tier.min_gain);
            ensure!(tier.rate <= Percentage::HUNDRED, "invalid tier rate: {}", tier.rate);
            ensure!(
                tier.cap.0.is_finite() && tier.cap >= Cost::ZERO,
                "invalid tier cap: {}",
                tier.cap,
            );
        }
        Ok(())
    }

    /// Capped grant for the total renovation cost.
    pub fn subsidy(&self, total_cost: Cost) -> Cost {
        (total_cost * self.subsidy_rate).min(self.subsidy_cap)
    }

    /// The tier with the highest threshold the gain reaches.
    ///
    /// The gain is the unrounded sum over the selected measures, not the number of
    /// letters the dwelling actually moves up.
    pub fn deduction_tier(&self, total_gain: f64) -> Option<&DeductionTier> {
        self.deduction_tiers
            .iter()
            .filter(|tier| tier.min_gain <= total_gain)
            .max_by_key(|tier| OrderedFloat(tier.min_gain))
    }

    pub fn tax_deduction(&self, total_cost: Cost, total_gain: f64) -> Cost {
        self.deduction_tier(total_gain)
            .map_or(Cost::ZERO, |tier| (total_cost * tier.rate).min(tier.cap))
    }

    pub fn annual_savings(&self, total_cost: Cost) -> AnnualCost {
        Quantity((total_cost * self.savings_rate).0)
    }
}
