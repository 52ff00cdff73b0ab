//! Fills in missing efficiency and maintenance values from fuel profiles

use serde::{Deserialize, Serialize};

use crate::model::{FuelProfiles, FuelType, ResolvedVehicleSpec, VehicleSpec};

/// Which user-supplied values count as "not given"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// Unset, zero, and NaN all fall back to the profile.
    /// A real zero maintenance cost can therefore never be recorded.
    #[default]
    ZeroIsMissing,
    /// Only unset values fall back; an explicit zero is kept
    NoneIsMissing,
}

impl MissingValuePolicy {
    fn provided(&self, value: Option<f64>) -> Option<f64> {
        match self {
            MissingValuePolicy::ZeroIsMissing => value.filter(|v| *v != 0.0 && !v.is_nan()),
            MissingValuePolicy::NoneIsMissing => value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuelProfileResolver {
    profiles: FuelProfiles,
    policy: MissingValuePolicy,
}

impl FuelProfileResolver {
    pub fn new(profiles: FuelProfiles) -> Self {
        Self {
            profiles,
            policy: MissingValuePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MissingValuePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn profiles(&self) -> &FuelProfiles {
        &self.profiles
    }

    pub fn policy(&self) -> MissingValuePolicy {
        self.policy
    }

    pub fn resolve_efficiency(&self, fuel_type: &FuelType) -> f64 {
        self.profiles.profile_for(fuel_type).efficiency
    }

    pub fn resolve_maintenance(&self, fuel_type: &FuelType) -> f64 {
        self.profiles.profile_for(fuel_type).maintenance_cost_per_km
    }

    pub fn resolve(&self, spec: &VehicleSpec) -> ResolvedVehicleSpec {
        let fuel_efficiency = self
            .policy
            .provided(spec.fuel_efficiency)
            .unwrap_or_else(|| self.resolve_efficiency(&spec.fuel_type));
        let maintenance_cost_per_km = self
            .policy
            .provided(spec.maintenance_cost_per_km)
            .unwrap_or_else(|| self.resolve_maintenance(&spec.fuel_type));

        ResolvedVehicleSpec {
            name: spec.name.clone(),
            purchase_price: spec.purchase_price,
            daily_kilometers: spec.daily_kilometers,
            fuel_type: spec.fuel_type.clone(),
            fuel_cost: spec.fuel_cost,
            fuel_efficiency,
            maintenance_cost_per_km,
        }
    }
}

/// Resolve against the built-in profile table
pub fn resolve(spec: &VehicleSpec) -> ResolvedVehicleSpec {
    FuelProfileResolver::default().resolve(spec)
}
