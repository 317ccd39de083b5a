use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    core::{aid::AidRules, catalog::Catalog},
    prelude::*,
};

/// Catalog shipped with the binary.
const BUILTIN: &str = include_str!("../../catalog.toml");

/// Improvement catalog together with the aid rules.
#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub aid: AidRules,

    #[serde(rename = "improvements")]
    pub catalog: Catalog,
}

impl Settings {
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN).context("failed to parse the built-in catalog")
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let settings = Self::from_toml(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        info!(n_improvements = settings.catalog.len(), "loaded the catalog");
        Ok(settings)
    }

    fn from_toml(contents: &str) -> Result<Self> {
        let settings: Self = toml::from_str(contents)?;
        settings.aid.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::percentage::Percentage;

    #[test]
    fn test_builtin() -> Result {
        let settings = Settings::builtin()?;
        assert!(settings.catalog.len() >= 2);
        let insulation = settings.catalog.get("aislamiento").context("missing insulation")?;
        assert_abs_diff_eq!(insulation.cost_per_square_metre.context("missing cost")?.0, 45.0);
        assert_abs_diff_eq!(insulation.class_steps, 1.5);
        let windows = settings.catalog.get("ventanas").context("missing windows")?;
        assert_abs_diff_eq!(windows.cost_per_square_metre.context("missing cost")?.0, 25.0);
        assert_abs_diff_eq!(windows.class_steps, 1.0);
        Ok(())
    }

    #[test]
    fn test_aid_defaults_when_omitted() -> Result {
        let settings = Settings::from_toml(
            r#"
            [[improvements]]
            id = "ventanas"
            name = "Ventanas"
            cost_per_square_metre = 25
            class_steps = 1
            "#,
        )?;
        assert_eq!(settings.aid.subsidy_rate, Percentage(40));
        assert_abs_diff_eq!(settings.aid.subsidy_cap.0, 15_000.0);
        assert_eq!(settings.aid.deduction_tiers.len(), 3);
        Ok(())
    }

    #[test]
    fn test_aid_override() -> Result {
        let settings = Settings::from_toml(
            r#"
            [aid]
            subsidy_rate = 50
            subsidy_cap = 20000.0

            [[aid.deduction_tiers]]
            min_gain = 0.0
            rate = 10
            cap = 1000.0

            [[improvements]]
            id = "aerotermia"
            name = "Bomba de calor"
            fixed_cost = 8000.0
            class_steps = 1.5
            "#,
        )?;
        assert_eq!(settings.aid.subsidy_rate, Percentage(50));
        assert_eq!(settings.aid.savings_rate, Percentage(15));
        assert_eq!(settings.aid.deduction_tiers.len(), 1);
        assert_abs_diff_eq!(
            settings.catalog.get("aerotermia").context("missing")?.fixed_cost.context("missing")?.0,
            8000.0,
        );
        Ok(())
    }

    #[test]
    fn test_invalid_improvement() {
        let error = Settings::from_toml(
            r#"
            [[improvements]]
            id = "ventanas"
            name = "Ventanas"
            class_steps = 1
            "#,
        )
        .unwrap_err();
        assert!(format!("{error:#}").contains("`ventanas`"), "{error:#}");
    }

    #[test]
    fn test_invalid_aid() {
        let result = Settings::from_toml(
            r#"
            [aid]
            savings_rate = 250

            [[improvements]]
            id = "ventanas"
            name = "Ventanas"
            fixed_cost = 100
            class_steps = 1
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_read_missing_file() {
        assert!(Settings::read_from(Path::new("/nonexistent/catalog.toml")).is_err());
    }
}
