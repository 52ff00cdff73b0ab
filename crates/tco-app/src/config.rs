//! Configuration management for car-economics
//!
//! Config stored at: ~/.config/car-economics/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tco_domain::MissingValuePolicy;
use tco_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Fleet file used when no --fleet is given
    #[serde(default)]
    pub fleet_path: Option<PathBuf>,

    /// TOML file overlaying the built-in fuel profiles
    #[serde(default)]
    pub fuel_profiles_path: Option<PathBuf>,

    /// Start from the example fleet when no fleet file is set
    #[serde(default = "default_true")]
    pub load_examples: bool,

    /// Whether an explicit zero efficiency/maintenance counts as "not given"
    #[serde(default)]
    pub missing_value_policy: MissingValuePolicy,

    /// Log filter used when --verbose is not given (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            fleet_path: None,
            fuel_profiles_path: None,
            load_examples: true,
            missing_value_policy: MissingValuePolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("car-economics");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Car Economics Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(
            f,
            "Fleet file:      {}",
            self.fleet_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(
            f,
            "Fuel profiles:   {}",
            self.fuel_profiles_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f, "Load examples:   {}", self.load_examples)?;
        writeln!(
            f,
            "Zero values:     {}",
            match self.missing_value_policy {
                MissingValuePolicy::ZeroIsMissing => "treated as missing",
                MissingValuePolicy::NoneIsMissing => "kept as given",
            }
        )?;
        writeln!(f, "Log level:       {}", self.log_level)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
