use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{
        area::SquareMetres,
        cost::{Cost, CostPerSquareMetre},
    },
};

/// Renovation measure offered to the homeowner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Improvement {
    pub id: String,

    /// Display label.
    pub name: String,

    /// Preferred over [`Improvement::fixed_cost`] when both are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_square_metre: Option<CostPerSquareMetre>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_cost: Option<Cost>,

    /// Energy-class letters the measure contributes, may be fractional.
    pub class_steps: f64,
}

impl Improvement {
    /// Cost of applying the measure to the dwelling of the given surface area.
    pub fn cost_for(&self, surface_area: SquareMetres) -> Cost {
        match (self.cost_per_square_metre, self.fixed_cost) {
            (Some(cost_per_square_metre), _) => cost_per_square_metre * surface_area,
            (None, Some(fixed_cost)) => fixed_cost,
            (None, None) => Cost::ZERO,
        }
    }

    fn validate(&self) -> Result {
        ensure!(!self.id.trim().is_empty(), "improvement `{}` has an empty id", self.name);
        ensure!(
            self.class_steps.is_finite() && self.class_steps > 0.0,
            "improvement `{}` has invalid class steps: {}",
            self.id,
            self.class_steps,
        );
        match (self.cost_per_square_metre, self.fixed_cost) {
            (None, None) => {
                bail!(
                    "improvement `{}` has neither a cost per square metre nor a fixed cost",
                    self.id,
                );
            }
            (Some(cost_per_square_metre), fixed_cost) => {
                ensure!(
                    cost_per_square_metre.is_positive(),
                    "improvement `{}` has invalid cost per square metre: {cost_per_square_metre}",
                    self.id,
                );
                if fixed_cost.is_some() {
                    warn!(id = %self.id, "both costs are set, the fixed cost will be ignored");
                }
            }
            (None, Some(fixed_cost)) => {
                ensure!(
                    fixed_cost.is_positive(),
                    "improvement `{}` has invalid fixed cost: {fixed_cost}",
                    self.id,
                );
            }
        }
        Ok(())
    }
}

/// Validated list of the available improvements.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "Vec<Improvement>")]
pub struct Catalog(Vec<Improvement>);

impl TryFrom<Vec<Improvement>> for Catalog {
    type Error = Error;

    fn try_from(improvements: Vec<Improvement>) -> Result<Self> {
        for improvement in &improvements {
            improvement.validate()?;
        }
        if let Some(id) = improvements.iter().map(|improvement| &improvement.id).duplicates().next()
        {
            bail!("duplicate improvement id `{id}`");
        }
        Ok(Self(improvements))
    }
}

impl Catalog {
    pub fn get(&self, id: &str) -> Option<&Improvement> {
        self.0.iter().find(|improvement| improvement.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Improvement> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::Quantity;

    fn improvement(id: &str) -> Improvement {
        Improvement {
            id: id.to_string(),
            name: id.to_uppercase(),
            cost_per_square_metre: Some(Quantity(45.0)),
            fixed_cost: None,
            class_steps: 1.5,
        }
    }

    #[test]
    fn test_cost_per_square_metre() {
        assert_abs_diff_eq!(improvement("aislamiento").cost_for(Quantity(80.0)).0, 3600.0);
    }

    #[test]
    fn test_fixed_cost() {
        let improvement = Improvement {
            cost_per_square_metre: None,
            fixed_cost: Some(Quantity(8000.0)),
            ..improvement("aerotermia")
        };
        assert_abs_diff_eq!(improvement.cost_for(Quantity(80.0)).0, 8000.0);
    }

    #[test]
    fn test_cost_per_square_metre_takes_precedence() {
        let improvement =
            Improvement { fixed_cost: Some(Quantity(8000.0)), ..improvement("aislamiento") };
        assert_abs_diff_eq!(improvement.cost_for(Quantity(100.0)).0, 4500.0);
    }

    #[test]
    fn test_get() -> Result {
        let catalog = Catalog::try_from(vec![improvement("aislamiento"), improvement("ventanas")])?;
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("ventanas").map(|improvement| improvement.name.as_str()),
            Some("VENTANAS"),
        );
        assert!(catalog.get("tejado").is_none());
        Ok(())
    }

    #[test]
    fn test_duplicate_id() {
        let error = Catalog::try_from(vec![improvement("ventanas"), improvement("ventanas")])
            .unwrap_err();
        assert!(error.to_string().contains("`ventanas`"), "{error}");
    }

    #[test]
    fn test_missing_cost() {
        let improvement = Improvement { cost_per_square_metre: None, ..improvement("ventanas") };
        assert!(Catalog::try_from(vec![improvement]).is_err());
    }

    #[test]
    fn test_non_positive_class_steps() {
        let improvement = Improvement { class_steps: 0.0, ..improvement("ventanas") };
        assert!(Catalog::try_from(vec![improvement]).is_err());
    }

    #[test]
    fn test_negative_cost() {
        let improvement =
            Improvement { cost_per_square_metre: Some(Quantity(-1.0)), ..improvement("ventanas") };
        assert!(Catalog::try_from(vec![improvement]).is_err());
    }

    #[test]
    fn test_empty_id() {
        assert!(Catalog::try_from(vec![improvement(" ")]).is_err());
    }
}
