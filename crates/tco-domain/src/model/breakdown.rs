//! Derived cost figures for a vehicle and a fleet

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ownership advice attached to each ROI year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Early ownership - Focus on mileage benefits")]
    EarlyOwnership,
    #[serde(rename = "Optimal ownership period for most vehicles")]
    OptimalPeriod,
    #[serde(rename = "Extended ownership - Depreciation benefits plateau")]
    ExtendedOwnership,
    #[serde(rename = "Long-term ownership - Maximize usage before resale")]
    LongTermOwnership,
}

impl Recommendation {
    /// Bands depend on the year only, never on the computed cost
    pub fn for_year(year: u32) -> Self {
        match year {
            0..=3 => Recommendation::EarlyOwnership,
            4..=5 => Recommendation::OptimalPeriod,
            6..=7 => Recommendation::ExtendedOwnership,
            _ => Recommendation::LongTermOwnership,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::EarlyOwnership => "Early ownership - Focus on mileage benefits",
            Recommendation::OptimalPeriod => "Optimal ownership period for most vehicles",
            Recommendation::ExtendedOwnership => {
                "Extended ownership - Depreciation benefits plateau"
            }
            Recommendation::LongTermOwnership => {
                "Long-term ownership - Maximize usage before resale"
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One year of the ownership projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiEntry {
    pub year: u32,
    pub total_cost: f64,
    pub cost_per_year: f64,
    pub residual_value: f64,
    /// Always equal to `total_cost`
    pub net_cost: f64,
    pub recommendation: Recommendation,
}

/// Daily/monthly/yearly cost figures of one vehicle plus its ROI table.
///
/// Every monetary field is rounded to cents on its own, so `monthly_cost`
/// is not necessarily `daily_cost * 30`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub name: String,
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub yearly_cost: f64,
    pub cost_per_km: f64,
    pub fuel_cost_daily: f64,
    pub maintenance_cost_daily: f64,
    pub depreciation_daily: f64,
    pub roi_guidance: Vec<RoiEntry>,
}

impl CostBreakdown {
    pub fn roi_for_year(&self, year: u32) -> Option<&RoiEntry> {
        self.roi_guidance.iter().find(|entry| entry.year == year)
    }

    /// False when a zero distance or zero efficiency leaked inf/NaN into the figures
    pub fn is_finite(&self) -> bool {
        [
            self.daily_cost,
            self.monthly_cost,
            self.yearly_cost,
            self.cost_per_km,
            self.fuel_cost_daily,
            self.maintenance_cost_daily,
            self.depreciation_daily,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Cost comparison across a fleet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetResult {
    /// Same order as the input vehicles
    pub breakdowns: Vec<CostBreakdown>,
    /// Index of the lowest daily cost, first one wins on ties
    pub most_economical: Option<usize>,
}

impl FleetResult {
    pub fn most_economical(&self) -> Option<&CostBreakdown> {
        self.most_economical
            .and_then(|index| self.breakdowns.get(index))
    }

    pub fn is_empty(&self) -> bool {
        self.breakdowns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.breakdowns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_bands() {
        assert_eq!(Recommendation::for_year(1), Recommendation::EarlyOwnership);
        assert_eq!(Recommendation::for_year(3), Recommendation::EarlyOwnership);
        assert_eq!(Recommendation::for_year(4), Recommendation::OptimalPeriod);
        assert_eq!(Recommendation::for_year(5), Recommendation::OptimalPeriod);
        assert_eq!(Recommendation::for_year(6), Recommendation::ExtendedOwnership);
        assert_eq!(Recommendation::for_year(7), Recommendation::ExtendedOwnership);
        assert_eq!(Recommendation::for_year(8), Recommendation::LongTermOwnership);
        assert_eq!(Recommendation::for_year(10), Recommendation::LongTermOwnership);
    }

    #[test]
    fn test_recommendation_serializes_as_text() {
        let json = serde_json::to_string(&Recommendation::OptimalPeriod).unwrap();
        assert_eq!(json, "\"Optimal ownership period for most vehicles\"");
    }

    #[test]
    fn test_empty_fleet_result() {
        let result = FleetResult::default();
        assert!(result.is_empty());
        assert!(result.most_economical().is_none());
    }
}
