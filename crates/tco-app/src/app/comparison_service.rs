//! Comparison Service - core use case for ranking a fleet by running cost
//!
//! Workflow:
//! 1. Build the fuel profile resolver (built-in table, optional TOML overlay)
//! 2. Load the fleet (file, or the example fleet)
//! 3. Append vehicles given on the command line and validate everything
//! 4. Apply removals and recompute
//! 5. Return a timestamped report

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tco_domain::repository::{FleetRepository, FuelProfileRepository};
use tco_domain::{
    project, CostBreakdown, Fleet, FleetResult, FuelProfileResolver, MissingValuePolicy,
    VehicleSpec,
};
use tco_types::{Error, Result};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::{example_fleet, APP_TITLE};
use crate::repository::{open_fleet_repo, open_fuel_profile_repo};
use crate::validation::{validate_fleet, validate_spec};

/// Options for building a fleet
#[derive(Debug, Clone, Default)]
pub struct ComparisonOptions {
    /// Fleet file (TOML, CSV or JSON)
    pub fleet_path: Option<PathBuf>,

    /// TOML overlay for the fuel profile table
    pub profiles_path: Option<PathBuf>,

    /// Start from the example fleet when no fleet file is given
    pub load_examples: bool,

    /// Vehicles appended after the loaded ones
    pub extra_vehicles: Vec<VehicleSpec>,

    /// Zero-based positions to drop after loading
    pub remove: Vec<usize>,

    pub policy: MissingValuePolicy,
}

impl ComparisonOptions {
    pub fn new() -> Self {
        Self {
            load_examples: true,
            ..Default::default()
        }
    }

    /// Options seeded from the stored configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            fleet_path: config.fleet_path.clone(),
            profiles_path: config.fuel_profiles_path.clone(),
            load_examples: config.load_examples,
            policy: config.missing_value_policy,
            ..Default::default()
        }
    }

    pub fn with_fleet_path(mut self, path: PathBuf) -> Self {
        self.fleet_path = Some(path);
        self
    }

    pub fn with_profiles_path(mut self, path: PathBuf) -> Self {
        self.profiles_path = Some(path);
        self
    }

    pub fn with_examples(mut self, enabled: bool) -> Self {
        self.load_examples = enabled;
        self
    }

    pub fn with_vehicle(mut self, vehicle: VehicleSpec) -> Self {
        self.extra_vehicles.push(vehicle);
        self
    }

    pub fn with_removed(mut self, index: usize) -> Self {
        self.remove.push(index);
        self
    }

    pub fn with_policy(mut self, policy: MissingValuePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Ranked fleet ready for display or export
#[derive(Debug, Clone, Serialize)]
pub struct FleetReport {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub breakdowns: Vec<CostBreakdown>,
    /// Position of the cheapest vehicle by daily cost
    pub most_economical: Option<usize>,
    pub most_economical_name: Option<String>,
}

impl FleetReport {
    pub fn from_result(result: FleetResult) -> Self {
        let most_economical_name = result.most_economical().map(|b| b.name.clone());
        Self {
            title: APP_TITLE.to_string(),
            generated_at: Utc::now(),
            breakdowns: result.breakdowns,
            most_economical: result.most_economical,
            most_economical_name,
        }
    }

    pub fn most_economical(&self) -> Option<&CostBreakdown> {
        self.most_economical.and_then(|i| self.breakdowns.get(i))
    }

    pub fn is_empty(&self) -> bool {
        self.breakdowns.is_empty()
    }
}

/// Build the resolver for the given profile overlay and policy
pub fn build_resolver(options: &ComparisonOptions) -> Result<FuelProfileResolver> {
    if let Some(path) = &options.profiles_path {
        debug!(path = %path.display(), "loading fuel profiles");
    }
    let profiles = open_fuel_profile_repo(options.profiles_path.clone()).load()?;
    Ok(FuelProfileResolver::new(profiles).with_policy(options.policy))
}

fn load_vehicles(options: &ComparisonOptions) -> Result<Vec<VehicleSpec>> {
    if let Some(path) = &options.fleet_path {
        let repo = open_fleet_repo(path.clone())?;
        let vehicles = repo.find_all()?;
        info!(path = %path.display(), count = vehicles.len(), "fleet loaded");
        return Ok(vehicles);
    }
    if options.load_examples {
        debug!("starting from the example fleet");
        return Ok(example_fleet());
    }
    Ok(Vec::new())
}

/// Load, validate and rank the fleet described by `options`
pub fn build_fleet(options: &ComparisonOptions) -> Result<Fleet> {
    let resolver = build_resolver(options)?;

    let mut vehicles = load_vehicles(options)?;
    vehicles.extend(options.extra_vehicles.iter().cloned());
    validate_fleet(&vehicles)?;

    let mut fleet = Fleet::with_vehicles(resolver, vehicles);

    let mut removals = options.remove.clone();
    removals.sort_unstable_by(|a, b| b.cmp(a));
    removals.dedup();
    for index in removals {
        match fleet.remove(index) {
            Some(removed) => debug!(index, name = %removed.name, "vehicle removed"),
            None => warn!(index, len = fleet.len(), "remove index out of range, ignored"),
        }
    }

    info!(
        vehicles = fleet.len(),
        most_economical = ?fleet.most_economical().map(|b| b.name.as_str()),
        "fleet ranked"
    );
    Ok(fleet)
}

/// Build the fleet and wrap its ranking in a report
pub fn compare(options: &ComparisonOptions) -> Result<FleetReport> {
    let fleet = build_fleet(options)?;
    Ok(FleetReport::from_result(fleet.into_result()))
}

/// Project a single vehicle outside of any fleet
pub fn project_vehicle(spec: &VehicleSpec, options: &ComparisonOptions) -> Result<CostBreakdown> {
    validate_spec(spec)?;
    let resolver = build_resolver(options)?;
    let resolved = resolver.resolve(spec);
    debug!(
        name = %resolved.name,
        efficiency = resolved.fuel_efficiency,
        maintenance = resolved.maintenance_cost_per_km,
        "vehicle resolved"
    );
    Ok(project(&resolved))
}

/// Pick a breakdown by 1-based position or by name; the most economical when
/// no selector is given
pub fn select_vehicle<'a>(
    report: &'a FleetReport,
    selector: Option<&str>,
) -> Result<&'a CostBreakdown> {
    let Some(selector) = selector.map(str::trim) else {
        return report
            .most_economical()
            .ok_or_else(|| Error::VehicleNotFound("fleet is empty".to_string()));
    };

    if let Ok(position) = selector.parse::<usize>() {
        if let Some(breakdown) = position
            .checked_sub(1)
            .and_then(|i| report.breakdowns.get(i))
        {
            return Ok(breakdown);
        }
    }

    report
        .breakdowns
        .iter()
        .find(|b| b.name.eq_ignore_ascii_case(selector))
        .ok_or_else(|| Error::VehicleNotFound(selector.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tco_domain::FuelType;

    fn tata_nexon_ev() -> VehicleSpec {
        VehicleSpec::new("Nexon EV", 1_500_000.0, 40.0, FuelType::Electric, 8.0)
            .with_fuel_efficiency(7.0)
    }

    #[test]
    fn test_examples_by_default() {
        let report = compare(&ComparisonOptions::new()).unwrap();
        assert_eq!(report.breakdowns.len(), 2);
        assert_eq!(report.title, "Car Economics Calculator");
        assert_eq!(report.most_economical, Some(1));
        assert_eq!(report.most_economical_name.as_deref(), Some("Maruti Swift"));
    }

    #[test]
    fn test_no_examples_is_empty() {
        let report = compare(&ComparisonOptions::new().with_examples(false)).unwrap();
        assert!(report.is_empty());
        assert!(report.most_economical.is_none());
        assert!(matches!(
            select_vehicle(&report, None),
            Err(Error::VehicleNotFound(_))
        ));
    }

    #[test]
    fn test_extra_vehicle_appended() {
        let options = ComparisonOptions::new().with_vehicle(tata_nexon_ev());
        let fleet = build_fleet(&options).unwrap();
        assert_eq!(fleet.len(), 3);
        assert_eq!(fleet.result().breakdowns[2].name, "Nexon EV");
    }

    #[test]
    fn test_invalid_extra_vehicle_rejected() {
        let mut bad = tata_nexon_ev();
        bad.purchase_price = -1.0;
        let result = build_fleet(&ComparisonOptions::new().with_vehicle(bad));
        assert!(matches!(result, Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn test_removals_apply_highest_first() {
        let options = ComparisonOptions::new()
            .with_vehicle(tata_nexon_ev())
            .with_removed(0)
            .with_removed(1)
            .with_removed(9);
        let fleet = build_fleet(&options).unwrap();
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.vehicles()[0].name, "Nexon EV");
        assert_eq!(fleet.result().most_economical, Some(0));
    }

    #[test]
    fn test_select_vehicle() {
        let report = compare(&ComparisonOptions::new()).unwrap();
        assert_eq!(select_vehicle(&report, None).unwrap().name, "Maruti Swift");
        assert_eq!(select_vehicle(&report, Some("1")).unwrap().name, "Honda City");
        assert_eq!(
            select_vehicle(&report, Some("honda city")).unwrap().name,
            "Honda City"
        );
        assert!(select_vehicle(&report, Some("Alto")).is_err());
        assert!(select_vehicle(&report, Some("0")).is_err());
    }

    #[test]
    fn test_project_vehicle_uses_profile_defaults() {
        let spec = VehicleSpec::new("Diesel SUV", 1_200_000.0, 60.0, FuelType::Diesel, 90.0);
        let breakdown = project_vehicle(&spec, &ComparisonOptions::new()).unwrap();
        // 60 / 18 * 90 = 300, maintenance 60 * 0.6 = 36
        assert_eq!(breakdown.fuel_cost_daily, 300.0);
        assert_eq!(breakdown.maintenance_cost_daily, 36.0);
    }

    #[test]
    fn test_policy_flows_into_resolver() {
        let spec = VehicleSpec::new("Free Fuel", 100_000.0, 10.0, FuelType::Petrol, 100.0)
            .with_maintenance_cost_per_km(0.0);
        let options = ComparisonOptions::new().with_policy(MissingValuePolicy::NoneIsMissing);
        let breakdown = project_vehicle(&spec, &options).unwrap();
        assert_eq!(breakdown.maintenance_cost_daily, 0.0);

        let breakdown = project_vehicle(&spec, &ComparisonOptions::new()).unwrap();
        assert_eq!(breakdown.maintenance_cost_daily, 5.0);
    }
}
