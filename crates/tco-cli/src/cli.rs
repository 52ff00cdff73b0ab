//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tco_domain::{FuelType, VehicleSpec};
use tco_types::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "car-economics")]
#[command(author = "engage-technologies")]
#[command(version)]
#[command(about = "Car Economics Calculator - compare the running cost of vehicles")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Fuel profile TOML overlaid on the built-in table. Uses config value if not specified.
    #[arg(long, global = true)]
    pub profiles: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank a fleet by daily cost
    Compare {
        /// Fleet file (.toml, .csv, .json)
        #[arg(long)]
        fleet: Option<PathBuf>,

        /// Do not start from the example vehicles
        #[arg(long)]
        no_examples: bool,

        /// Add a vehicle: "name,price,daily_km,fuel_type,fuel_cost[,efficiency[,maintenance]]"
        #[arg(long, value_name = "VEHICLE", value_parser = parse_vehicle)]
        add: Vec<VehicleSpec>,

        /// Drop the vehicle at this position (1-based, as listed)
        #[arg(long, value_name = "POSITION", value_parser = parse_position)]
        remove: Vec<usize>,
    },

    /// Project cost for a single vehicle
    Project {
        #[arg(long)]
        name: String,

        /// Purchase price
        #[arg(long)]
        price: f64,

        /// Kilometers driven per day
        #[arg(long)]
        daily_km: f64,

        /// petrol, diesel, cng, electric, hybrid
        #[arg(long, default_value = "petrol")]
        fuel_type: FuelType,

        /// Cost per fuel unit (liter, kg, kWh)
        #[arg(long)]
        fuel_cost: f64,

        /// km per fuel unit; fuel type default if omitted
        #[arg(long)]
        efficiency: Option<f64>,

        /// Maintenance cost per km; fuel type default if omitted
        #[arg(long)]
        maintenance: Option<f64>,
    },

    /// Show the ten-year ROI table for one vehicle
    Roi {
        /// Fleet file (.toml, .csv, .json)
        #[arg(long)]
        fleet: Option<PathBuf>,

        /// Do not start from the example vehicles
        #[arg(long)]
        no_examples: bool,

        /// Vehicle name or 1-based position. Defaults to the most economical.
        #[arg(long)]
        vehicle: Option<String>,
    },

    /// Show the active fuel profile table
    Profiles,

    /// Print the example fleet as a TOML fleet file
    Template,

    /// Export the comparison to Excel
    Export {
        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Fleet file (.toml, .csv, .json)
        #[arg(long)]
        fleet: Option<PathBuf>,

        /// Do not start from the example vehicles
        #[arg(long)]
        no_examples: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default fuel profile file
        #[arg(long)]
        set_profiles: Option<PathBuf>,

        /// Set default fleet file
        #[arg(long)]
        set_fleet: Option<PathBuf>,

        /// Start from the example vehicles when no fleet file is given
        #[arg(long)]
        set_examples: Option<bool>,

        /// Keep an explicit zero efficiency/maintenance instead of using the fuel default
        #[arg(long)]
        set_keep_zero: Option<bool>,

        /// Set log level used without --verbose
        #[arg(long)]
        set_log_level: Option<String>,

        /// Forget the default fleet file
        #[arg(long)]
        clear_fleet: bool,

        /// Forget the default fuel profile file
        #[arg(long)]
        clear_profiles: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

fn parse_number(field: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("{} is not a number: '{}'", field, raw.trim()))
}

/// 1-based position as shown in the comparison table
pub fn parse_position(arg: &str) -> Result<usize, String> {
    match arg.trim().parse::<usize>() {
        Ok(0) => Err("positions start at 1".to_string()),
        Ok(position) => Ok(position),
        Err(_) => Err(format!("not a position: '{}'", arg.trim())),
    }
}

/// Parse "name,price,daily_km,fuel_type,fuel_cost[,efficiency[,maintenance]]"
pub fn parse_vehicle(arg: &str) -> Result<VehicleSpec, String> {
    let parts: Vec<&str> = arg.split(',').collect();
    if !(5..=7).contains(&parts.len()) {
        return Err(format!(
            "expected 5 to 7 comma-separated fields, got {}",
            parts.len()
        ));
    }

    let mut spec = VehicleSpec::new(
        parts[0].trim(),
        parse_number("price", parts[1])?,
        parse_number("daily_km", parts[2])?,
        FuelType::parse(parts[3]),
        parse_number("fuel_cost", parts[4])?,
    );

    if let Some(raw) = parts.get(5).filter(|s| !s.trim().is_empty()) {
        spec = spec.with_fuel_efficiency(parse_number("efficiency", raw)?);
    }
    if let Some(raw) = parts.get(6).filter(|s| !s.trim().is_empty()) {
        spec = spec.with_maintenance_cost_per_km(parse_number("maintenance", raw)?);
    }

    Ok(spec)
}
