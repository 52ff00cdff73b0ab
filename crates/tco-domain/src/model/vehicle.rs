//! Vehicle specification as entered by the user

use serde::{Deserialize, Serialize};

use super::fuel::FuelType;

/// User-supplied cost parameters of one vehicle.
///
/// Values are taken as given. Range checks belong to whoever collects the
/// input; the projection propagates whatever arithmetic results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    /// Display name, not required to be unique
    pub name: String,
    pub purchase_price: f64,
    pub daily_kilometers: f64,
    #[serde(default)]
    pub fuel_type: FuelType,
    /// Cost per fuel unit
    pub fuel_cost: f64,
    /// km per fuel unit, resolved from the fuel type when unset
    #[serde(default)]
    pub fuel_efficiency: Option<f64>,
    /// Resolved from the fuel type when unset
    #[serde(default)]
    pub maintenance_cost_per_km: Option<f64>,
}

impl VehicleSpec {
    pub fn new(
        name: impl Into<String>,
        purchase_price: f64,
        daily_kilometers: f64,
        fuel_type: FuelType,
        fuel_cost: f64,
    ) -> Self {
        Self {
            name: name.into(),
            purchase_price,
            daily_kilometers,
            fuel_type,
            fuel_cost,
            fuel_efficiency: None,
            maintenance_cost_per_km: None,
        }
    }

    pub fn with_fuel_efficiency(mut self, efficiency: f64) -> Self {
        self.fuel_efficiency = Some(efficiency);
        self
    }

    pub fn with_maintenance_cost_per_km(mut self, cost: f64) -> Self {
        self.maintenance_cost_per_km = Some(cost);
        self
    }
}

/// Vehicle specification with every default filled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedVehicleSpec {
    pub name: String,
    pub purchase_price: f64,
    pub daily_kilometers: f64,
    pub fuel_type: FuelType,
    pub fuel_cost: f64,
    pub fuel_efficiency: f64,
    pub maintenance_cost_per_km: f64,
}
