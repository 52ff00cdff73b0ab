//! Fuel types and their default cost profiles

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fuel type tag of a vehicle.
///
/// Tags are matched case-insensitively. Anything outside the known set is kept
/// as `Other` and resolves through the fallback profile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    Cng,
    Electric,
    Hybrid,
    Other(String),
}

impl FuelType {
    pub fn parse(tag: &str) -> Self {
        let normalized = tag.trim().to_lowercase();
        match normalized.as_str() {
            // Blank input gets the form default
            "" | "petrol" => FuelType::Petrol,
            "diesel" => FuelType::Diesel,
            "cng" => FuelType::Cng,
            "electric" => FuelType::Electric,
            "hybrid" => FuelType::Hybrid,
            _ => FuelType::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Cng => "cng",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
            FuelType::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, FuelType::Other(_))
    }
}

impl From<String> for FuelType {
    fn from(tag: String) -> Self {
        FuelType::parse(&tag)
    }
}

impl From<&str> for FuelType {
    fn from(tag: &str) -> Self {
        FuelType::parse(tag)
    }
}

impl From<FuelType> for String {
    fn from(fuel_type: FuelType) -> Self {
        fuel_type.as_str().to_string()
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default efficiency and maintenance cost for one fuel type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelProfile {
    /// km per fuel unit (liter, kg, kWh)
    pub efficiency: f64,
    /// Maintenance cost per km
    pub maintenance_cost_per_km: f64,
}

impl FuelProfile {
    pub const fn new(efficiency: f64, maintenance_cost_per_km: f64) -> Self {
        Self {
            efficiency,
            maintenance_cost_per_km,
        }
    }
}

/// Same values as petrol
pub const FALLBACK_PROFILE: FuelProfile = FuelProfile::new(15.0, 0.5);

/// Lookup table from fuel type to default profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelProfiles {
    #[serde(default)]
    pub profiles: BTreeMap<FuelType, FuelProfile>,
    #[serde(default = "default_fallback")]
    pub fallback: FuelProfile,
}

fn default_fallback() -> FuelProfile {
    FALLBACK_PROFILE
}

impl Default for FuelProfiles {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(FuelType::Petrol, FuelProfile::new(15.0, 0.5));
        profiles.insert(FuelType::Diesel, FuelProfile::new(18.0, 0.6));
        profiles.insert(FuelType::Cng, FuelProfile::new(22.0, 0.4));
        // Electric needs a user-supplied efficiency
        profiles.insert(FuelType::Electric, FuelProfile::new(0.0, 0.2));
        profiles.insert(FuelType::Hybrid, FuelProfile::new(20.0, 0.4));

        Self {
            profiles,
            fallback: FALLBACK_PROFILE,
        }
    }
}

impl FuelProfiles {
    /// Empty table where every fuel type resolves to `fallback`
    pub fn with_fallback(fallback: FuelProfile) -> Self {
        Self {
            profiles: BTreeMap::new(),
            fallback,
        }
    }

    pub fn profile_for(&self, fuel_type: &FuelType) -> FuelProfile {
        self.profiles
            .get(fuel_type)
            .copied()
            .unwrap_or(self.fallback)
    }

    pub fn insert(&mut self, fuel_type: FuelType, profile: FuelProfile) -> Option<FuelProfile> {
        self.profiles.insert(fuel_type, profile)
    }

    /// Overlay another table on top of this one. Entries in `other` win.
    pub fn merge(&mut self, other: FuelProfiles) {
        self.profiles.extend(other.profiles);
        self.fallback = other.fallback;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FuelType, &FuelProfile)> {
        self.profiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(FuelType::parse("petrol"), FuelType::Petrol);
        assert_eq!(FuelType::parse("Diesel"), FuelType::Diesel);
        assert_eq!(FuelType::parse(" CNG "), FuelType::Cng);
        assert_eq!(FuelType::parse("electric"), FuelType::Electric);
        assert_eq!(FuelType::parse("hybrid"), FuelType::Hybrid);
    }

    #[test]
    fn test_parse_blank_is_petrol() {
        assert_eq!(FuelType::parse(""), FuelType::Petrol);
        assert_eq!(FuelType::parse("   "), FuelType::Petrol);
    }

    #[test]
    fn test_parse_unknown_tag() {
        let fuel = FuelType::parse("LPG");
        assert_eq!(fuel, FuelType::Other("lpg".to_string()));
        assert!(!fuel.is_known());
        assert_eq!(fuel.to_string(), "lpg");
    }

    #[test]
    fn test_default_table() {
        let profiles = FuelProfiles::default();
        assert_eq!(profiles.profile_for(&FuelType::Diesel), FuelProfile::new(18.0, 0.6));
        assert_eq!(profiles.profile_for(&FuelType::Electric).efficiency, 0.0);
        assert_eq!(
            profiles.profile_for(&FuelType::Other("hydrogen".to_string())),
            FALLBACK_PROFILE
        );
    }

    #[test]
    fn test_merge_overrides_entries() {
        let mut profiles = FuelProfiles::default();
        let mut custom = FuelProfiles::with_fallback(FuelProfile::new(12.0, 0.7));
        custom.insert(FuelType::Electric, FuelProfile::new(6.5, 0.15));

        profiles.merge(custom);

        assert_eq!(profiles.profile_for(&FuelType::Electric), FuelProfile::new(6.5, 0.15));
        assert_eq!(profiles.profile_for(&FuelType::Petrol), FuelProfile::new(15.0, 0.5));
        assert_eq!(profiles.profile_for(&FuelType::Other("lpg".into())).efficiency, 12.0);
    }

    #[test]
    fn test_fuel_type_serializes_as_tag() {
        let json = serde_json::to_string(&FuelType::Cng).unwrap();
        assert_eq!(json, "\"cng\"");
        let parsed: FuelType = serde_json::from_str("\"Hybrid\"").unwrap();
        assert_eq!(parsed, FuelType::Hybrid);
    }
}
