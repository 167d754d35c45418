//! Runtime configuration for the station finder binary.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::engine::DEFAULT_LIMIT;

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Value could not be parsed
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// Value parsed but is out of range
    #[error("{var} out of range: {reason}")]
    OutOfRange {
        var: &'static str,
        reason: &'static str,
    },
}

/// Configuration parameters for a station finder run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Latitude of the user, in decimal degrees.
    pub user_lat: f64,

    /// Longitude of the user, in decimal degrees.
    pub user_lng: f64,

    /// Number of recommendations to print.
    pub limit: usize,

    /// Seed file to load instead of the bundled data set.
    pub seed_path: Option<PathBuf>,

    /// Seconds between simulated status updates.
    pub tick_secs: u64,

    /// Number of simulated updates to run before exiting.
    pub ticks: u32,
}

impl AppConfig {
    /// Environment variable names read by [`AppConfig::from_env`].
    pub const LAT_VAR: &'static str = "STATION_FINDER_LAT";
    pub const LNG_VAR: &'static str = "STATION_FINDER_LNG";
    pub const LIMIT_VAR: &'static str = "STATION_FINDER_LIMIT";
    pub const SEED_VAR: &'static str = "STATION_FINDER_SEED";
    pub const TICK_SECS_VAR: &'static str = "STATION_FINDER_TICK_SECS";
    pub const TICKS_VAR: &'static str = "STATION_FINDER_TICKS";

    /// Create a new configuration with the given parameters.
    pub fn new(
        user_lat: f64,
        user_lng: f64,
        limit: usize,
        seed_path: Option<PathBuf>,
        tick_secs: u64,
        ticks: u32,
    ) -> Self {
        Self {
            user_lat,
            user_lng,
            limit,
            seed_path,
            tick_secs,
            ticks,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let user_lat = parse_var(&lookup, Self::LAT_VAR)?.unwrap_or(defaults.user_lat);
        if !user_lat.is_finite() || !(-90.0..=90.0).contains(&user_lat) {
            return Err(ConfigError::OutOfRange {
                var: Self::LAT_VAR,
                reason: "latitude must be within -90..=90",
            });
        }

        let user_lng = parse_var(&lookup, Self::LNG_VAR)?.unwrap_or(defaults.user_lng);
        if !user_lng.is_finite() || !(-180.0..=180.0).contains(&user_lng) {
            return Err(ConfigError::OutOfRange {
                var: Self::LNG_VAR,
                reason: "longitude must be within -180..=180",
            });
        }

        let tick_secs = parse_var(&lookup, Self::TICK_SECS_VAR)?.unwrap_or(defaults.tick_secs);
        if tick_secs == 0 {
            return Err(ConfigError::OutOfRange {
                var: Self::TICK_SECS_VAR,
                reason: "tick interval must be at least one second",
            });
        }

        Ok(Self {
            user_lat,
            user_lng,
            limit: parse_var(&lookup, Self::LIMIT_VAR)?.unwrap_or(defaults.limit),
            seed_path: lookup(Self::SEED_VAR)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            tick_secs,
            ticks: parse_var(&lookup, Self::TICKS_VAR)?.unwrap_or(defaults.ticks),
        })
    }

    /// Returns the tick interval as a Duration.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // Downtown Los Angeles, where the bundled stations are
            user_lat: 34.0522,
            user_lng: -118.2437,
            limit: DEFAULT_LIMIT,
            seed_path: None,
            tick_secs: 30,
            ticks: 0,
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
