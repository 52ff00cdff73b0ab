//! File-based implementation of FleetRepository

use std::path::{Path, PathBuf};

use tco_domain::model::VehicleSpec;
use tco_domain::repository::FleetRepository;
use tco_types::Error;

use crate::fleet_loader::{load_fleet, FleetFormat};

/// Fleet read from a TOML, CSV or JSON file on every call
pub struct FileFleetRepository {
    path: PathBuf,
    format: FleetFormat,
}

impl FileFleetRepository {
    /// Fails early when the extension is not a supported fleet format
    pub fn new(path: PathBuf) -> Result<Self, Error> {
        let format = FleetFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FleetFormat {
        self.format
    }
}

impl FleetRepository for FileFleetRepository {
    fn find_all(&self) -> Result<Vec<VehicleSpec>, Error> {
        load_fleet(&self.path)
    }
}
