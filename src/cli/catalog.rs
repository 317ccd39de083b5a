use clap::Parser;

use crate::{
    cli::settings::SettingsArgs,
    prelude::*,
    tables::{build_aid_rules_table, build_catalog_table},
};

#[derive(Parser)]
pub struct CatalogArgs {
    #[clap(flatten)]
    settings: SettingsArgs,
}

impl CatalogArgs {
    pub fn run(self) -> Result {
        let settings = self.settings.load()?;
        println!("{}", build_catalog_table(&settings.catalog));
        println!("{}", build_aid_rules_table(&settings.aid));
        Ok(())
    }
}
