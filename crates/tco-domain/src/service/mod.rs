//! Domain services

pub mod cost_projector;
pub mod fleet_ranker;
pub mod fuel_profile_resolver;
pub mod roi;

pub use cost_projector::{project, round_cents};
pub use fleet_ranker::{find_most_economical, rank_fleet};
pub use fuel_profile_resolver::{resolve, FuelProfileResolver, MissingValuePolicy};
pub use roi::{project_roi, residual_value};
