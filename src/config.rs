// src/config.rs

use crate::domain::estimator::DEFAULT_REFERENCE_YEAR;
use crate::domain::history::{DEFAULT_POINT_COUNT, MAX_POINT_COUNT};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not valid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Base URL of the pricing service, e.g. `http://localhost:8000`.
    pub api_base: String,
    /// Ask the pricing service instead of the local estimator.
    pub use_remote: bool,
    pub remote_timeout: Duration,
    /// Year that property age is measured against.
    pub reference_year: i32,
    pub history_points: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            api_base: "http://localhost:8000".to_string(),
            use_remote: false,
            remote_timeout: Duration::from_secs(10),
            reference_year: DEFAULT_REFERENCE_YEAR,
            history_points: DEFAULT_POINT_COUNT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; unset variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        Ok(Self {
            bind_addr: parsed(&get, "VALUATION_ADDR")?.unwrap_or(defaults.bind_addr),
            max_workers: parsed::<usize, _>(&get, "VALUATION_MAX_WORKERS")?
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_workers),
            api_base: get("VALUATION_API_BASE").unwrap_or(defaults.api_base),
            use_remote: match get("VALUATION_USE_REMOTE") {
                Some(v) => parse_bool("VALUATION_USE_REMOTE", &v)?,
                None => defaults.use_remote,
            },
            remote_timeout: parsed(&get, "VALUATION_REMOTE_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.remote_timeout),
            reference_year: parsed(&get, "VALUATION_REFERENCE_YEAR")?
                .unwrap_or(defaults.reference_year),
            history_points: parsed::<usize, _>(&get, "VALUATION_HISTORY_POINTS")?
                .map(|n| n.min(MAX_POINT_COUNT))
                .unwrap_or(defaults.history_points),
        })
    }
}

fn parsed<T, G>(get: &G, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(var)
        .map(|value| {
            value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
