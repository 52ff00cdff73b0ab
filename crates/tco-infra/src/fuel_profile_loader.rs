//! Fuel profile table loader from TOML
//!
//! Entries in the file overlay the built-in table, so a file only needs the
//! fuel types it changes:
//!
//! ```toml
//! [profiles.electric]
//! efficiency = 6.5
//! maintenance_cost_per_km = 0.15
//!
//! [fallback]
//! efficiency = 14.0
//! maintenance_cost_per_km = 0.55
//! ```

use std::fs;
use std::path::Path;

use tco_domain::model::FuelProfiles;
use tco_types::{ConfigError, Error, Result};
use tracing::debug;

/// Load a profile file and merge it over the defaults
pub fn load_fuel_profiles(path: &Path) -> Result<FuelProfiles> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read fuel profile file {}: {}",
            path.display(),
            e
        )))
    })?;

    let profiles = load_fuel_profiles_from_str(&content)?;
    debug!(path = %path.display(), entries = profiles.profiles.len(), "loaded fuel profiles");
    Ok(profiles)
}

pub fn load_fuel_profiles_from_str(toml_content: &str) -> Result<FuelProfiles> {
    let overrides: FuelProfiles = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse fuel profile TOML: {}",
            e
        )))
    })?;

    let mut profiles = FuelProfiles::default();
    profiles.merge(overrides);
    Ok(profiles)
}
