//! Configuration for the `transit-lookup` binary.
//!
//! Settings come from an optional JSON file named by `TRANSIT_LOOKUP_CONFIG`,
//! then individual environment variables override single fields:
//!
//! | Variable                 | Field                   |
//! |--------------------------|-------------------------|
//! | `TRANSIT_SNAPSHOT_DIR`   | `snapshot_dir`          |
//! | `TRANSIT_BUS_RADIUS_M`   | `lookup.bus_radius_m`   |
//! | `TRANSIT_METRO_RADIUS_M` | `lookup.metro_radius_m` |
//! | `TRANSIT_MAX_STATIONS`   | `lookup.max_stations`   |

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::lookup::LookupConfig;

pub const CONFIG_FILE_VAR: &str = "TRANSIT_LOOKUP_CONFIG";
pub const SNAPSHOT_DIR_VAR: &str = "TRANSIT_SNAPSHOT_DIR";
pub const BUS_RADIUS_VAR: &str = "TRANSIT_BUS_RADIUS_M";
pub const METRO_RADIUS_VAR: &str = "TRANSIT_METRO_RADIUS_M";
pub const MAX_STATIONS_VAR: &str = "TRANSIT_MAX_STATIONS";

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Binary configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory of recorded API responses.
    pub snapshot_dir: PathBuf,

    pub lookup: LookupConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from("snapshot"),
            lookup: LookupConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration using `var` to look up environment variables.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match var(CONFIG_FILE_VAR) {
            Some(path) if !path.is_empty() => Self::load(path)?,
            _ => Self::default(),
        };
        config.apply_overrides(var)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config file");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = var(SNAPSHOT_DIR_VAR).filter(|d| !d.is_empty()) {
            self.snapshot_dir = PathBuf::from(dir);
        }
        if let Some(radius) = parse_var(&var, BUS_RADIUS_VAR)? {
            self.lookup.bus_radius_m = radius;
        }
        if let Some(radius) = parse_var(&var, METRO_RADIUS_VAR)? {
            self.lookup.metro_radius_m = radius;
        }
        if let Some(max) = parse_var(&var, MAX_STATIONS_VAR)? {
            self.lookup.max_stations = max;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let radii = [
            ("lookup.bus_radius_m", self.lookup.bus_radius_m),
            ("lookup.metro_radius_m", self.lookup.metro_radius_m),
        ];
        for (name, radius) in radii {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    name,
                    value: radius.to_string(),
                    reason: "radius must be a positive number of metres",
                });
            }
        }

        if self.lookup.max_stations == 0 {
            return Err(ConfigError::InvalidValue {
                name: "lookup.max_stations",
                value: "0".to_string(),
                reason: "at least one station must be looked up",
            });
        }

        Ok(())
    }
}

fn parse_var<F, T>(var: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match var(name) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                name,
                value,
                reason: "not a number",
            }),
    }
}
