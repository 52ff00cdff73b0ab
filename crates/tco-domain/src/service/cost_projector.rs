//! Daily, monthly and yearly operating cost of a single vehicle

use crate::model::{CostBreakdown, ResolvedVehicleSpec};

use super::roi::project_roi;

/// Straight-line depreciation window in years
pub const DEPRECIATION_HORIZON_YEARS: f64 = 5.0;
/// Share of the purchase price lost over the horizon (20% residual assumed)
pub const DEPRECIABLE_SHARE: f64 = 0.8;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Round half up at the cent (ties go toward positive infinity).
///
/// Non-finite values pass through unchanged.
pub fn round_cents(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

// Compares the fraction instead of adding 0.5, which can itself round
fn round_half_up(y: f64) -> f64 {
    let floor = y.floor();
    if y - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Project the cost breakdown of a resolved vehicle.
///
/// Zero distance or zero efficiency is not guarded: the affected figures come
/// out as infinity or NaN.
///
/// # Formula
/// fuel = daily_km / efficiency * fuel_cost
/// maintenance = daily_km * maintenance_per_km
/// depreciation = price * 0.8 / (daily_km * 365 * 5)
pub fn project(spec: &ResolvedVehicleSpec) -> CostBreakdown {
    let daily_km = spec.daily_kilometers;

    let fuel_cost_daily = (daily_km / spec.fuel_efficiency) * spec.fuel_cost;
    let maintenance_cost_daily = daily_km * spec.maintenance_cost_per_km;

    // Usage based, unrelated to the compounding residual model of the ROI table
    let total_km_over_horizon = daily_km * DAYS_PER_YEAR * DEPRECIATION_HORIZON_YEARS;
    let depreciation_daily = (spec.purchase_price * DEPRECIABLE_SHARE) / total_km_over_horizon;

    let daily_cost = fuel_cost_daily + maintenance_cost_daily + depreciation_daily;
    let monthly_cost = daily_cost * DAYS_PER_MONTH;
    let yearly_cost = daily_cost * DAYS_PER_YEAR;
    let cost_per_km = daily_cost / daily_km;

    let roi_guidance = project_roi(spec.purchase_price, fuel_cost_daily, maintenance_cost_daily);

    CostBreakdown {
        name: spec.name.clone(),
        daily_cost: round_cents(daily_cost),
        monthly_cost: round_cents(monthly_cost),
        yearly_cost: round_cents(yearly_cost),
        cost_per_km: round_cents(cost_per_km),
        fuel_cost_daily: round_cents(fuel_cost_daily),
        maintenance_cost_daily: round_cents(maintenance_cost_daily),
        depreciation_daily: round_cents(depreciation_daily),
        roi_guidance,
    }
}
