//! Ten-year residual value and ownership cost projection

use crate::model::{Recommendation, RoiEntry};

use super::cost_projector::{round_cents, DAYS_PER_YEAR};

pub const ROI_YEARS: u32 = 10;
/// Value retained after the first year
pub const FIRST_YEAR_RETENTION: f64 = 0.85;
/// Value retained in each following year
pub const ANNUAL_RETENTION: f64 = 0.90;

/// Residual value after `year` years of ownership.
///
/// Applied by repeated multiplication so the float result matches a
/// year-by-year recurrence exactly.
pub fn residual_value(purchase_price: f64, year: u32) -> f64 {
    let mut value = purchase_price * FIRST_YEAR_RETENTION;
    for _ in 2..=year {
        value *= ANNUAL_RETENTION;
    }
    value
}

/// Build the ROI table for years 1 through 10.
///
/// Operating cost is the year-one daily rate extrapolated linearly.
pub fn project_roi(
    purchase_price: f64,
    fuel_cost_daily: f64,
    maintenance_cost_daily: f64,
) -> Vec<RoiEntry> {
    (1..=ROI_YEARS)
        .map(|year| {
            let years = year as f64;
            let operating_cost = (fuel_cost_daily + maintenance_cost_daily) * DAYS_PER_YEAR * years;
            let residual = residual_value(purchase_price, year);

            let total_cost = purchase_price + operating_cost - residual;
            let cost_per_year = total_cost / years;

            RoiEntry {
                year,
                total_cost: round_cents(total_cost),
                cost_per_year: round_cents(cost_per_year),
                residual_value: round_cents(residual),
                net_cost: round_cents(total_cost),
                recommendation: Recommendation::for_year(year),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residual_value_recurrence() {
        assert_eq!(residual_value(1_000_000.0, 1), 850_000.0);
        assert!((residual_value(1_000_000.0, 2) - 765_000.0).abs() < 1e-6);
        assert!((residual_value(1_000_000.0, 3) - 688_500.0).abs() < 1e-6);
    }

    #[test]
    fn test_first_year_entry() {
        let table = project_roi(1_000_000.0, 312.5, 25.0);
        let first = &table[0];
        assert_eq!(first.year, 1);
        assert!((first.residual_value - 850_000.0).abs() < 1e-6);
        assert!((first.total_cost - 273_187.5).abs() < 1e-6);
        assert!((first.cost_per_year - 273_187.5).abs() < 1e-6);
        assert_eq!(first.net_cost, first.total_cost);
        assert_eq!(first.recommendation, Recommendation::EarlyOwnership);
    }

    #[test]
    fn test_second_year_entry() {
        let table = project_roi(1_000_000.0, 312.5, 25.0);
        let second = &table[1];
        assert!((second.residual_value - 765_000.0).abs() < 1e-6);
        assert!((second.total_cost - 481_375.0).abs() < 1e-6);
        assert!((second.cost_per_year - 240_687.5).abs() < 1e-6);
    }

    #[test]
    fn test_table_covers_ten_years() {
        let table = project_roi(800_000.0, 277.78, 20.0);
        let years: Vec<u32> = table.iter().map(|e| e.year).collect();
        assert_eq!(years, (1..=10).collect::<Vec<_>>());
        assert_eq!(table[9].recommendation, Recommendation::LongTermOwnership);
    }

    #[test]
    fn test_residual_strictly_decreasing() {
        let table = project_roi(450_000.0, 100.0, 10.0);
        for pair in table.windows(2) {
            assert!(pair[1].residual_value < pair[0].residual_value);
        }
    }

    #[test]
    fn test_infinite_fuel_cost_propagates() {
        let table = project_roi(1_000_000.0, f64::INFINITY, 10.0);
        assert!(table.iter().all(|e| e.total_cost.is_infinite()));
        assert!(table.iter().all(|e| e.residual_value.is_finite()));
    }
}
