//! Core types for the geocoding subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Parses "49.84 24.03", "49.84, 24.03" or "49.84,24.03".
impl FromStr for Coordinates {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(CoordinateError::Malformed(s.trim().to_string()));
        }

        let lat: f64 = parts[0]
            .parse()
            .map_err(|_| CoordinateError::NotANumber(parts[0].to_string()))?;
        let lon: f64 = parts[1]
            .parse()
            .map_err(|_| CoordinateError::NotANumber(parts[1].to_string()))?;

        Self::new(lat, lon)
    }
}

/// A point to be placed on the map, optionally labeled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl MapPoint {
    pub fn new(label: Option<String>, coords: Coordinates) -> Self {
        Self {
            label,
            lat: coords.lat,
            lon: coords.lon,
        }
    }
}

/// Errors from parsing user-entered coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("expected two numbers \"<lat> <lon>\", got '{0}'")]
    Malformed(String),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("latitude {0} is outside -90..90")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside -180..180")]
    LongitudeOutOfRange(f64),
}

/// Geocoding provider errors.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}
