//! Infrastructure layer - file loaders and repository implementations

pub mod fleet_loader;
pub mod fuel_profile_loader;
pub mod persistence;
