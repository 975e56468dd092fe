//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV file with `movie`, `location`, `year` columns.
    pub dataset: PathBuf,
    /// Directory the map file is written to.
    pub output_dir: PathBuf,
    /// Nominatim base URL.
    pub nominatim_url: String,
    /// User-Agent sent to Nominatim (required by its usage policy).
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Minimum spacing between geocoding requests.
    pub min_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("locations.csv"),
            output_dir: PathBuf::from("."),
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            user_agent: format!("filmmap/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(10),
            min_interval: Duration::from_millis(1000),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `FILMMAP_DATASET` | Locations CSV | `locations.csv` |
    /// | `FILMMAP_OUTPUT_DIR` | Output directory | `.` |
    /// | `FILMMAP_NOMINATIM_URL` | Geocoder base URL | `https://nominatim.openstreetmap.org` |
    /// | `FILMMAP_USER_AGENT` | HTTP User-Agent | `filmmap/<version>` |
    /// | `FILMMAP_TIMEOUT_SECS` | Request timeout | `10` |
    /// | `FILMMAP_MIN_INTERVAL_MS` | Delay between requests | `1000` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let timeout = match get("FILMMAP_TIMEOUT_SECS") {
            Some(v) => match parse_number("FILMMAP_TIMEOUT_SECS", &v)? {
                0 => {
                    return Err(ConfigError::InvalidNumber {
                        key: "FILMMAP_TIMEOUT_SECS",
                        value: v,
                    })
                }
                secs => Duration::from_secs(secs),
            },
            None => defaults.timeout,
        };
        let min_interval = match get("FILMMAP_MIN_INTERVAL_MS") {
            Some(v) => Duration::from_millis(parse_number("FILMMAP_MIN_INTERVAL_MS", &v)?),
            None => defaults.min_interval,
        };

        Ok(Self {
            dataset: get("FILMMAP_DATASET").map(PathBuf::from).unwrap_or(defaults.dataset),
            output_dir: get("FILMMAP_OUTPUT_DIR").map(PathBuf::from).unwrap_or(defaults.output_dir),
            nominatim_url: get("FILMMAP_NOMINATIM_URL").unwrap_or(defaults.nominatim_url),
            user_agent: get("FILMMAP_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout,
            min_interval,
        })
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

/// Configuration errors.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}
