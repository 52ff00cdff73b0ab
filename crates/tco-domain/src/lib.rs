//! Vehicle cost-of-ownership projection engine
//!
//! Pure calculations only: fuel profile resolution, per-vehicle cost
//! projection with a ten-year ROI table, and fleet ranking. File access lives
//! in `tco-infra`.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{
    CostBreakdown, Fleet, FleetResult, FuelProfile, FuelProfiles, FuelType, Recommendation,
    ResolvedVehicleSpec, RoiEntry, VehicleSpec,
};
pub use service::{project, rank_fleet, resolve, FuelProfileResolver, MissingValuePolicy};
