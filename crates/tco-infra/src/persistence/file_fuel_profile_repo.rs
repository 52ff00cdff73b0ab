//! File-based implementation of FuelProfileRepository

use std::path::PathBuf;

use tco_domain::model::FuelProfiles;
use tco_domain::repository::FuelProfileRepository;
use tco_types::Error;

use crate::fuel_profile_loader::load_fuel_profiles;

/// Fuel profile table from a TOML file (overlaid on the built-in table)
pub struct FileFuelProfileRepository {
    toml_path: PathBuf,
}

impl FileFuelProfileRepository {
    pub fn new(toml_path: PathBuf) -> Self {
        Self { toml_path }
    }

    pub fn toml_path(&self) -> &PathBuf {
        &self.toml_path
    }
}

impl FuelProfileRepository for FileFuelProfileRepository {
    fn load(&self) -> Result<FuelProfiles, Error> {
        load_fuel_profiles(&self.toml_path)
    }
}

/// The built-in table, for when no profile file is configured
#[derive(Debug, Default)]
pub struct BuiltinFuelProfileRepository;

impl FuelProfileRepository for BuiltinFuelProfileRepository {
    fn load(&self) -> Result<FuelProfiles, Error> {
        Ok(FuelProfiles::default())
    }
}
