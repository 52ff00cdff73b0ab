//! Caller-owned collection of vehicles with an always-current ranking

use crate::service::{rank_fleet, FuelProfileResolver};

use super::breakdown::{CostBreakdown, FleetResult};
use super::vehicle::VehicleSpec;

/// Ordered vehicles plus their cost comparison.
///
/// Every mutating method re-projects the whole fleet before it returns, so
/// `result()` never reflects a stale vehicle list.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    vehicles: Vec<VehicleSpec>,
    resolver: FuelProfileResolver,
    result: FleetResult,
}

impl Fleet {
    pub fn new(resolver: FuelProfileResolver) -> Self {
        Self {
            vehicles: Vec::new(),
            resolver,
            result: FleetResult::default(),
        }
    }

    pub fn with_vehicles(resolver: FuelProfileResolver, vehicles: Vec<VehicleSpec>) -> Self {
        let mut fleet = Self::new(resolver);
        fleet.replace_all(vehicles);
        fleet
    }

    pub fn add(&mut self, vehicle: VehicleSpec) {
        self.vehicles.push(vehicle);
        self.recompute();
    }

    /// Out-of-range indices leave the fleet untouched
    pub fn remove(&mut self, index: usize) -> Option<VehicleSpec> {
        if index >= self.vehicles.len() {
            return None;
        }
        let removed = self.vehicles.remove(index);
        self.recompute();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.vehicles.clear();
        self.recompute();
    }

    pub fn replace_all(&mut self, vehicles: Vec<VehicleSpec>) {
        self.vehicles = vehicles;
        self.recompute();
    }

    pub fn vehicles(&self) -> &[VehicleSpec] {
        &self.vehicles
    }

    pub fn resolver(&self) -> &FuelProfileResolver {
        &self.resolver
    }

    pub fn result(&self) -> &FleetResult {
        &self.result
    }

    pub fn into_result(self) -> FleetResult {
        self.result
    }

    pub fn most_economical(&self) -> Option<&CostBreakdown> {
        self.result.most_economical()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    fn recompute(&mut self) {
        self.result = rank_fleet(&self.vehicles, &self.resolver);
    }
}
