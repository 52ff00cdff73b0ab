//! Command handlers

use std::path::PathBuf;

use tco_app::app::{self, ComparisonOptions};
use tco_app::config::Config;
use tco_app::constants::example_fleet;
use tco_app::export::export_to_excel;
use tco_domain::{FuelType, MissingValuePolicy, VehicleSpec};
use tco_infra::fleet_loader::fleet_to_toml;
use tco_types::{OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::output::{output_breakdown, output_profiles, output_report, output_roi};
use crate::telemetry::init_tracing;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    init_tracing(cli.verbose, &config.log_level);

    let output_format = cli.format.unwrap_or(config.output_format);

    let mut options = ComparisonOptions::from_config(&config);
    if let Some(ref profiles) = cli.profiles {
        options.profiles_path = Some(profiles.clone());
    }

    match cli.command {
        Commands::Compare {
            fleet,
            no_examples,
            add,
            remove,
        } => {
            let mut options = with_fleet_args(options, fleet, no_examples);
            options.extra_vehicles = add;
            // positions are 1-based on the command line, 0 is rejected by clap
            options.remove = remove.iter().map(|p| p.saturating_sub(1)).collect();
            cmd_compare(&options, output_format)
        }

        Commands::Project {
            name,
            price,
            daily_km,
            fuel_type,
            fuel_cost,
            efficiency,
            maintenance,
        } => {
            let spec = build_spec(
                name,
                price,
                daily_km,
                fuel_type,
                fuel_cost,
                efficiency,
                maintenance,
            );
            cmd_project(&spec, &options, output_format)
        }

        Commands::Roi {
            fleet,
            no_examples,
            vehicle,
        } => {
            let options = with_fleet_args(options, fleet, no_examples);
            cmd_roi(&options, vehicle.as_deref(), output_format)
        }

        Commands::Profiles => cmd_profiles(&options, output_format),

        Commands::Template => cmd_template(),

        Commands::Export {
            output,
            fleet,
            no_examples,
        } => {
            let options = with_fleet_args(options, fleet, no_examples);
            cmd_export(&options, output)
        }

        Commands::Config {
            show,
            set_output,
            set_profiles,
            set_fleet,
            set_examples,
            set_keep_zero,
            set_log_level,
            clear_fleet,
            clear_profiles,
            reset,
        } => cmd_config(
            config,
            show,
            ConfigChanges {
                set_output,
                set_profiles,
                set_fleet,
                set_examples,
                set_keep_zero,
                set_log_level,
                clear_fleet,
                clear_profiles,
            },
            reset,
        ),
    }
}

fn with_fleet_args(
    mut options: ComparisonOptions,
    fleet: Option<PathBuf>,
    no_examples: bool,
) -> ComparisonOptions {
    if let Some(path) = fleet {
        options.fleet_path = Some(path);
    }
    if no_examples {
        options.load_examples = false;
    }
    options
}

fn build_spec(
    name: String,
    price: f64,
    daily_km: f64,
    fuel_type: FuelType,
    fuel_cost: f64,
    efficiency: Option<f64>,
    maintenance: Option<f64>,
) -> VehicleSpec {
    let mut spec = VehicleSpec::new(name, price, daily_km, fuel_type, fuel_cost);
    spec.fuel_efficiency = efficiency;
    spec.maintenance_cost_per_km = maintenance;
    spec
}

fn cmd_compare(options: &ComparisonOptions, output_format: OutputFormat) -> Result<()> {
    let report = app::compare(options)?;
    output_report(output_format, &report)
}

fn cmd_project(
    spec: &VehicleSpec,
    options: &ComparisonOptions,
    output_format: OutputFormat,
) -> Result<()> {
    let breakdown = app::project_vehicle(spec, options)?;
    output_breakdown(output_format, &breakdown)
}

fn cmd_roi(
    options: &ComparisonOptions,
    vehicle: Option<&str>,
    output_format: OutputFormat,
) -> Result<()> {
    let report = app::compare(options)?;
    let breakdown = app::select_vehicle(&report, vehicle)?;
    output_roi(output_format, breakdown)
}

fn cmd_profiles(options: &ComparisonOptions, output_format: OutputFormat) -> Result<()> {
    let resolver = app::build_resolver(options)?;
    output_profiles(output_format, resolver.profiles())
}

fn cmd_template() -> Result<()> {
    print!("{}", fleet_to_toml(&example_fleet())?);
    Ok(())
}

fn cmd_export(options: &ComparisonOptions, output: PathBuf) -> Result<()> {
    let report = app::compare(options)?;
    export_to_excel(&report, &output)?;
    println!("Exported {} vehicles to {}", report.breakdowns.len(), output.display());
    Ok(())
}

/// Requested config edits; `None`/`false` leaves a field alone
struct ConfigChanges {
    set_output: Option<OutputFormat>,
    set_profiles: Option<PathBuf>,
    set_fleet: Option<PathBuf>,
    set_examples: Option<bool>,
    set_keep_zero: Option<bool>,
    set_log_level: Option<String>,
    clear_fleet: bool,
    clear_profiles: bool,
}

impl ConfigChanges {
    /// Apply to `config`; true if anything changed
    fn apply(self, config: &mut Config) -> bool {
        let mut modified = false;

        if let Some(output_format) = self.set_output {
            config.output_format = output_format;
            modified = true;
        }

        if let Some(path) = self.set_profiles {
            config.fuel_profiles_path = Some(path);
            modified = true;
        }

        if let Some(path) = self.set_fleet {
            config.fleet_path = Some(path);
            modified = true;
        }

        if let Some(enabled) = self.set_examples {
            config.load_examples = enabled;
            modified = true;
        }

        if let Some(keep_zero) = self.set_keep_zero {
            config.missing_value_policy = if keep_zero {
                MissingValuePolicy::NoneIsMissing
            } else {
                MissingValuePolicy::ZeroIsMissing
            };
            modified = true;
        }

        if let Some(level) = self.set_log_level {
            config.log_level = level;
            modified = true;
        }

        if self.clear_fleet {
            config.fleet_path = None;
            modified = true;
        }

        if self.clear_profiles {
            config.fuel_profiles_path = None;
            modified = true;
        }

        modified
    }
}

fn cmd_config(mut config: Config, show: bool, changes: ConfigChanges, reset: bool) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let modified = changes.apply(&mut config);

    if modified {
        config.save()?;
        debug!("configuration saved");
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
