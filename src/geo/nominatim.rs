//! Geocoding provider: OpenStreetMap Nominatim.

use super::types::{Coordinates, GeoError};
use serde::Deserialize;
use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Forward and reverse geocoding.
///
/// `Ok(None)` means the provider answered but knows no such place; `Err` is
/// reserved for transport and protocol failures. Callers in this crate treat
/// both as "drop this point".
pub trait Geocoder {
    /// Coordinates → human-readable address (English).
    fn reverse(&self, coords: Coordinates) -> Result<Option<String>, GeoError>;

    /// Place name → coordinates of the best match.
    fn forward(&self, query: &str) -> Result<Option<Coordinates>, GeoError>;
}

#[derive(Deserialize, Debug, Clone)]
struct SearchResult {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
struct ReverseResult {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Blocking Nominatim client.
///
/// Requests are paced so that at least `min_interval` separates two calls,
/// as required by the public instance's usage policy.
pub struct NominatimClient {
    agent: ureq::Agent,
    base_url: String,
    min_interval: Duration,
    last_request: Cell<Option<Instant>>,
}

impl NominatimClient {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration, min_interval: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(user_agent)
            .timeout(timeout)
            .build();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            min_interval,
            last_request: Cell::new(None),
        }
    }

    fn pace(&self) {
        if let Some(last) = self.last_request.get() {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                thread::sleep(self.min_interval - elapsed);
            }
        }
        self.last_request.set(Some(Instant::now()));
    }

    fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<ureq::Response, GeoError> {
        self.pace();

        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.agent.get(&url);
        for (key, value) in params {
            request = request.query(key, value);
        }

        request.call().map_err(|e| GeoError::Network(e.to_string()))
    }
}

impl Geocoder for NominatimClient {
    fn reverse(&self, coords: Coordinates) -> Result<Option<String>, GeoError> {
        let lat = coords.lat.to_string();
        let lon = coords.lon.to_string();

        let response = self.get(
            "reverse",
            &[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("format", "json"),
                ("accept-language", "en"),
            ],
        )?;

        let result: ReverseResult = response
            .into_json()
            .map_err(|e| GeoError::InvalidResponse(e.to_string()))?;

        if let Some(err) = result.error {
            debug!(%coords, error = %err, "reverse geocode returned no address");
            return Ok(None);
        }

        Ok(result.display_name)
    }

    fn forward(&self, query: &str) -> Result<Option<Coordinates>, GeoError> {
        let response = self.get("search", &[("q", query), ("format", "json"), ("limit", "1")])?;

        let results: Vec<SearchResult> = response
            .into_json()
            .map_err(|e| GeoError::InvalidResponse(e.to_string()))?;

        let Some(top) = results.into_iter().next() else {
            return Ok(None);
        };

        debug!(query, matched = top.display_name.as_deref().unwrap_or("?"), "forward geocode");
        parse_search_coords(&top).map(Some)
    }
}

fn parse_search_coords(result: &SearchResult) -> Result<Coordinates, GeoError> {
    let lat: f64 = result
        .lat
        .parse()
        .map_err(|_| GeoError::InvalidResponse(format!("bad latitude '{}'", result.lat)))?;
    let lon: f64 = result
        .lon
        .parse()
        .map_err(|_| GeoError::InvalidResponse(format!("bad longitude '{}'", result.lon)))?;

    Coordinates::new(lat, lon).map_err(|e| GeoError::InvalidResponse(e.to_string()))
}
