mod calculate;
mod catalog;
mod settings;

use clap::{Parser, Subcommand};

use crate::{
    cli::{calculate::CalculateArgs, catalog::CatalogArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Calculate(args) => args.run(),
            Command::Catalog(args) => args.run(),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Estimate the renovation cost, aids, and the resulting energy class.
    #[clap(name = "calculate")]
    Calculate(Box<CalculateArgs>),

    /// Show the available improvements and the aid rules.
    #[clap(name = "catalog")]
    Catalog(CatalogArgs),
}
