//! Use cases

pub mod comparison_service;

pub use comparison_service::{
    build_fleet, build_resolver, compare, project_vehicle, select_vehicle, ComparisonOptions,
    FleetReport,
};
