//! Domain model types

pub mod breakdown;
pub mod fleet;
pub mod fuel;
pub mod vehicle;

pub use breakdown::{CostBreakdown, FleetResult, Recommendation, RoiEntry};
pub use fleet::Fleet;
pub use fuel::{FuelProfile, FuelProfiles, FuelType, FALLBACK_PROFILE};
pub use vehicle::{ResolvedVehicleSpec, VehicleSpec};
