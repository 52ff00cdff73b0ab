//! Fleet file loader (TOML, CSV, JSON)
//!
//! TOML and JSON files hold a `vehicles` list. CSV files need a header row:
//! name,purchase_price,daily_kilometers,fuel_type,fuel_cost,fuel_efficiency,maintenance_cost_per_km
//! Empty optional cells are read as "not given".

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tco_domain::model::VehicleSpec;
use tco_types::{Error, Result};
use tracing::debug;

/// Supported fleet file formats, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetFormat {
    Toml,
    Csv,
    Json,
}

impl FleetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(FleetFormat::Toml),
            "csv" => Ok(FleetFormat::Csv),
            "json" => Ok(FleetFormat::Json),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Container for parsing fleet.toml / fleet.json
#[derive(Debug, Default, Serialize, Deserialize)]
struct FleetFile {
    #[serde(default)]
    vehicles: Vec<VehicleSpec>,
}

/// Load a fleet file, choosing the parser from the file extension
pub fn load_fleet(path: &Path) -> Result<Vec<VehicleSpec>> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Fleet file not found: {}",
            path.display()
        )));
    }

    let format = FleetFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let vehicles = parse_fleet(&content, format)?;
    debug!(path = %path.display(), count = vehicles.len(), "loaded fleet file");
    Ok(vehicles)
}

pub fn parse_fleet(content: &str, format: FleetFormat) -> Result<Vec<VehicleSpec>> {
    match format {
        FleetFormat::Toml => {
            let file: FleetFile = toml::from_str(content)?;
            Ok(file.vehicles)
        }
        FleetFormat::Json => {
            let file: FleetFile = serde_json::from_str(content)?;
            Ok(file.vehicles)
        }
        FleetFormat::Csv => parse_fleet_csv(content),
    }
}

fn parse_fleet_csv(content: &str) -> Result<Vec<VehicleSpec>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut vehicles = Vec::new();
    for record in reader.deserialize() {
        let vehicle: VehicleSpec = record?;
        vehicles.push(vehicle);
    }
    Ok(vehicles)
}

/// Serialize a fleet in the TOML layout `load_fleet` reads
pub fn fleet_to_toml(vehicles: &[VehicleSpec]) -> Result<String> {
    let file = FleetFile {
        vehicles: vehicles.to_vec(),
    };
    Ok(toml::to_string_pretty(&file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tco_domain::model::FuelType;

    const TEST_TOML: &str = r#"
[[vehicles]]
name = "Honda City"
purchase_price = 1000000.0
daily_kilometers = 50.0
fuel_type = "petrol"
fuel_cost = 100.0
fuel_efficiency = 16.0
maintenance_cost_per_km = 0.5

[[vehicles]]
name = "Nexon EV"
purchase_price = 1500000.0
daily_kilometers = 40.0
fuel_type = "Electric"
fuel_cost = 8.0
"#;

    const TEST_CSV: &str = "\
name,purchase_price,daily_kilometers,fuel_type,fuel_cost,fuel_efficiency,maintenance_cost_per_km
Maruti Swift,800000,50,petrol,100,18,0.4
Innova, 1900000 ,60,diesel,92,,
";

    const TEST_JSON: &str = r#"{
  "vehicles": [
    { "name": "WagonR CNG", "purchase_price": 600000, "daily_kilometers": 45,
      "fuel_type": "cng", "fuel_cost": 76, "fuel_efficiency": null }
  ]
}"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(FleetFormat::from_path(&PathBuf::from("a.toml")).unwrap(), FleetFormat::Toml);
        assert_eq!(FleetFormat::from_path(&PathBuf::from("a.CSV")).unwrap(), FleetFormat::Csv);
        assert_eq!(FleetFormat::from_path(&PathBuf::from("a.json")).unwrap(), FleetFormat::Json);
        assert!(matches!(
            FleetFormat::from_path(&PathBuf::from("a.xlsx")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_toml() {
        let vehicles = parse_fleet(TEST_TOML, FleetFormat::Toml).unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].fuel_efficiency, Some(16.0));
        assert_eq!(vehicles[1].fuel_type, FuelType::Electric);
        assert_eq!(vehicles[1].fuel_efficiency, None);
        assert_eq!(vehicles[1].maintenance_cost_per_km, None);
    }

    #[test]
    fn test_parse_csv_with_empty_optionals() {
        let vehicles = parse_fleet(TEST_CSV, FleetFormat::Csv).unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].name, "Maruti Swift");
        assert_eq!(vehicles[0].maintenance_cost_per_km, Some(0.4));
        assert_eq!(vehicles[1].purchase_price, 1_900_000.0);
        assert_eq!(vehicles[1].fuel_type, FuelType::Diesel);
        assert_eq!(vehicles[1].fuel_efficiency, None);
    }

    #[test]
    fn test_parse_csv_rejects_bad_number() {
        let bad = "name,purchase_price,daily_kilometers,fuel_type,fuel_cost\nX,lots,50,petrol,100\n";
        assert!(matches!(parse_fleet(bad, FleetFormat::Csv), Err(Error::Csv(_))));
    }

    #[test]
    fn test_parse_json() {
        let vehicles = parse_fleet(TEST_JSON, FleetFormat::Json).unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].fuel_type, FuelType::Cng);
        assert_eq!(vehicles[0].fuel_efficiency, None);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_fleet(&PathBuf::from("/nonexistent/fleet.toml"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.csv");
        fs::write(&path, TEST_CSV).unwrap();

        let vehicles = load_fleet(&path).unwrap();
        assert_eq!(vehicles.len(), 2);
    }

    #[test]
    fn test_toml_output_parses_back() {
        let vehicles = parse_fleet(TEST_TOML, FleetFormat::Toml).unwrap();
        let text = fleet_to_toml(&vehicles).unwrap();
        assert!(text.contains("Honda City"));
        assert_eq!(parse_fleet(&text, FleetFormat::Toml).unwrap(), vehicles);
    }
}
