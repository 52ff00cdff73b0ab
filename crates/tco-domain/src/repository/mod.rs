//! Repository trait definitions for loading input data

use crate::model::{FuelProfiles, VehicleSpec};
use tco_types::Error;

/// Source of the vehicles to compare
pub trait FleetRepository {
    /// Load all vehicles in their stored order
    fn find_all(&self) -> Result<Vec<VehicleSpec>, Error>;

    /// Find the first vehicle with the given name
    fn find_by_name(&self, name: &str) -> Result<Option<VehicleSpec>, Error> {
        Ok(self.find_all()?.into_iter().find(|v| v.name == name))
    }
}

/// Source of the fuel profile table
pub trait FuelProfileRepository {
    fn load(&self) -> Result<FuelProfiles, Error>;
}
