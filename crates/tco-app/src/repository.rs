//! Repository adapters for the file-backed inputs

use std::path::PathBuf;

use tco_domain::repository::FuelProfileRepository;
use tco_infra::persistence::{
    BuiltinFuelProfileRepository, FileFleetRepository, FileFuelProfileRepository,
};
use tco_types::Result;

/// Open a fleet file; the format follows the extension
pub fn open_fleet_repo(path: PathBuf) -> Result<FileFleetRepository> {
    FileFleetRepository::new(path)
}

/// Profile source: the TOML overlay if given, else the built-in table
pub fn open_fuel_profile_repo(toml_path: Option<PathBuf>) -> Box<dyn FuelProfileRepository> {
    match toml_path {
        Some(path) => Box::new(FileFuelProfileRepository::new(path)),
        None => Box::new(BuiltinFuelProfileRepository),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tco_domain::FuelType;
    use tco_types::Error;

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            open_fleet_repo(PathBuf::from("fleet.xlsx")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_profile_overlay_or_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.toml");
        std::fs::write(
            &path,
            "[profiles.diesel]\nefficiency = 21.0\nmaintenance_cost_per_km = 0.7\n",
        )
        .unwrap();

        let profiles = open_fuel_profile_repo(Some(path)).load().unwrap();
        assert_eq!(profiles.profile_for(&FuelType::Diesel).efficiency, 21.0);
        // untouched entries keep the built-in values
        assert_eq!(profiles.profile_for(&FuelType::Petrol).efficiency, 15.0);

        let builtin = open_fuel_profile_repo(None).load().unwrap();
        assert_eq!(builtin.profile_for(&FuelType::Diesel).efficiency, 18.0);
    }

    #[test]
    fn test_missing_profile_file_is_config_error() {
        let result = open_fuel_profile_repo(Some(PathBuf::from("/nonexistent/profiles.toml"))).load();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
