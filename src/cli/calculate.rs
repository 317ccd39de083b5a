use chrono::Local;
use clap::Parser;

use crate::{
    cli::settings::SettingsArgs,
    core::{calculator::Calculator, dwelling::Dwelling, energy_class::EnergyClass},
    prelude::*,
    quantity::area::SquareMetres,
    report::Report,
    tables::{build_calculation_table, build_measures_table},
};

#[derive(Parser)]
pub struct CalculateArgs {
    /// Useful floor area of the dwelling in square metres.
    #[clap(long = "surface-area", alias = "area")]
    surface_area: SquareMetres,

    /// Current energy certificate letter, G to A.
    #[clap(long = "class", ignore_case = true)]
    current_class: EnergyClass,

    /// Catalog ids of the planned improvements.
    #[clap(long = "improvements", alias = "improvement", value_delimiter = ',', num_args = 1..)]
    improvements: Vec<String>,

    #[clap(long, default_value = "table")]
    format: OutputFormat,

    #[clap(flatten)]
    settings: SettingsArgs,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Terminal tables.
    Table,

    /// Plain-text report.
    Text,

    Json,
}

impl CalculateArgs {
    pub fn run(self) -> Result {
        let settings = self.settings.load()?;
        let dwelling = Dwelling::builder()
            .surface_area(self.surface_area)
            .current_class(self.current_class)
            .improvements(self.improvements.into_iter().collect())
            .build();
        let calculation = Calculator::builder()
            .catalog(&settings.catalog)
            .rules(&settings.aid)
            .dwelling(&dwelling)
            .calculate()?;

        match self.format {
            OutputFormat::Table => {
                println!("{}", build_measures_table(&calculation));
                println!("{}", build_calculation_table(&calculation));
            }
            OutputFormat::Text => {
                let report =
                    Report { calculation: &calculation, generated_on: Local::now().date_naive() };
                println!("{report}");
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&calculation)?);
            }
        }
        Ok(())
    }
}
