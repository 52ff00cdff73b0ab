//! Input checks applied before a vehicle enters the fleet
//!
//! The domain crate takes whatever it is given; these checks mirror the
//! entry form: every field required, nothing negative.

use tco_domain::VehicleSpec;
use tco_types::{Error, Result};

fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_input(field, "must be a number"));
    }
    if value < 0.0 {
        return Err(Error::invalid_input(field, "must not be negative"));
    }
    Ok(())
}

/// Validate one vehicle, reporting the first offending field
pub fn validate_spec(spec: &VehicleSpec) -> Result<()> {
    if spec.name.trim().is_empty() {
        return Err(Error::invalid_input("name", "is required"));
    }

    check_amount("purchase_price", spec.purchase_price)?;
    check_amount("daily_kilometers", spec.daily_kilometers)?;
    check_amount("fuel_cost", spec.fuel_cost)?;

    if let Some(efficiency) = spec.fuel_efficiency {
        check_amount("fuel_efficiency", efficiency)?;
    }
    if let Some(maintenance) = spec.maintenance_cost_per_km {
        check_amount("maintenance_cost_per_km", maintenance)?;
    }

    Ok(())
}

/// Validate every vehicle; the error names the vehicle's position
pub fn validate_fleet(specs: &[VehicleSpec]) -> Result<()> {
    for (index, spec) in specs.iter().enumerate() {
        validate_spec(spec).map_err(|e| match e {
            Error::InvalidInput { field, reason } => Error::InvalidInput {
                field: format!("vehicle {} {}", index + 1, field),
                reason,
            },
            other => other,
        })?;
    }
    Ok(())
}
