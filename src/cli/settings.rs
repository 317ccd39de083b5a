use std::path::PathBuf;

use clap::Parser;

use crate::{core::settings::Settings, prelude::*};

#[derive(Parser)]
pub struct SettingsArgs {
    /// TOML file with the improvements and aid rules, the built-in catalog is used by default.
    #[clap(long = "catalog", env = "EPBD_CATALOG")]
    path: Option<PathBuf>,
}

impl SettingsArgs {
    pub fn load(&self) -> Result<Settings> {
        match &self.path {
            Some(path) => Settings::read_from(path),
            None => {
                debug!("using the built-in catalog");
                Settings::builtin()
            }
        }
    }
}
