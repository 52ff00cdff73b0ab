//! Vehicles shown before the user enters any of their own

use tco_domain::model::{FuelType, VehicleSpec};

pub const APP_TITLE: &str = "Car Economics Calculator";
pub const BRAND_NAME: &str = "Engage Technologies";

pub fn example_fleet() -> Vec<VehicleSpec> {
    vec![
        VehicleSpec::new("Honda City", 1_000_000.0, 50.0, FuelType::Petrol, 100.0)
            .with_fuel_efficiency(16.0)
            .with_maintenance_cost_per_km(0.5),
        VehicleSpec::new("Maruti Swift", 800_000.0, 50.0, FuelType::Petrol, 100.0)
            .with_fuel_efficiency(18.0)
            .with_maintenance_cost_per_km(0.4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tco_domain::{rank_fleet, FuelProfileResolver};

    #[test]
    fn test_examples_rank_swift_first() {
        let result = rank_fleet(&example_fleet(), &FuelProfileResolver::default());
        assert_eq!(result.breakdowns.len(), 2);
        assert_eq!(result.most_economical().unwrap().name, "Maruti Swift");
    }
}
