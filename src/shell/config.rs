// Runtime configuration, read from the environment after loading an optional .env file.

use std::collections::HashMap;
use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: u16,
    pub database_url: Option<String>,
    pub vehicle_verification_url: Option<String>,
    pub restricted_plates: Vec<String>,
    pub parking_floors: i32,
    pub spots_per_floor: i32,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| vars.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Config {
            server_port: parse_or("SERVER_PORT", non_empty("SERVER_PORT"), 8080, "port number")?,
            database_url: non_empty("DATABASE_URL"),
            vehicle_verification_url: non_empty("VEHICLE_VERIFICATION_URL"),
            restricted_plates: non_empty("RESTRICTED_PLATES")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            parking_floors: parse_or("PARKING_FLOORS", non_empty("PARKING_FLOORS"), 3, "number of floors")?,
            spots_per_floor: parse_or("SPOTS_PER_FLOOR", non_empty("SPOTS_PER_FLOOR"), 20, "number of spots")?,
            log_level: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value: raw,
        }),
    }
}
