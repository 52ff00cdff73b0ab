//! Fleet-wide projection and cheapest-vehicle selection

use crate::model::{CostBreakdown, FleetResult, VehicleSpec};

use super::cost_projector::project;
use super::fuel_profile_resolver::FuelProfileResolver;

/// Project every vehicle in input order and pick the lowest daily cost
pub fn rank_fleet(specs: &[VehicleSpec], resolver: &FuelProfileResolver) -> FleetResult {
    let breakdowns: Vec<CostBreakdown> = specs
        .iter()
        .map(|spec| project(&resolver.resolve(spec)))
        .collect();
    let most_economical = find_most_economical(&breakdowns);

    FleetResult {
        breakdowns,
        most_economical,
    }
}

/// Left-to-right scan with strict less-than.
///
/// The earliest vehicle wins ties. A NaN daily cost never compares less, so a
/// NaN in front is never displaced and later NaNs are never chosen.
pub fn find_most_economical(breakdowns: &[CostBreakdown]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, candidate) in breakdowns.iter().enumerate() {
        match best {
            None => best = Some(index),
            Some(current) if candidate.daily_cost < breakdowns[current].daily_cost => {
                best = Some(index)
            }
            Some(_) => {}
        }
    }
    best
}
