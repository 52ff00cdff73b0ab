//! Repository implementations
//!
//! File-based implementations of the domain repository traits. Nothing here
//! writes user data; files are read on demand.

mod file_fleet_repo;
mod file_fuel_profile_repo;

pub use file_fleet_repo::FileFleetRepository;
pub use file_fuel_profile_repo::{BuiltinFuelProfileRepository, FileFuelProfileRepository};
