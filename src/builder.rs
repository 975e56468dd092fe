//! Map building pipeline.
//!
//! Flow: dataset → reverse geocode → rank → forward geocode films
//!       → bordering countries → forward geocode countries → render.
//!
//! Only an unreadable dataset or an unwritable output aborts the build. Every
//! per-point failure just drops that point.

use crate::countries::CountryNeighborResolver;
use crate::dataset::{DatasetError, LocationDataset};
use crate::geo::{Coordinates, Geocoder, MapPoint};
use crate::matcher::{self, MatchCandidate};
use crate::render::{self, MapRenderer, MarkerLayer, RenderError, COUNTRY_STYLE, FILM_STYLE};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const FILMS_LAYER: &str = "Films locations";
pub const COUNTRIES_LAYER: &str = "Countries";

/// What to map.
#[derive(Debug, Clone)]
pub struct MapRequest {
    pub year: i32,
    pub coordinates: Coordinates,
    pub country: String,
}

/// The written map and what went into it.
#[derive(Debug, Clone, Serialize)]
pub struct MapArtifact {
    pub path: PathBuf,
    pub year: i32,
    /// Reverse-geocoded address of the request coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_location: Option<String>,
    pub films: Vec<MapPoint>,
    pub countries: Vec<MapPoint>,
    pub dropped_films: usize,
    pub dropped_countries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("Cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Builds film/country maps using an injected geocoder.
pub struct MapBuilder<G: Geocoder> {
    geocoder: G,
    countries: CountryNeighborResolver,
    dataset_path: PathBuf,
    output_dir: PathBuf,
}

impl<G: Geocoder> MapBuilder<G> {
    pub fn new(geocoder: G, dataset_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            geocoder,
            countries: CountryNeighborResolver::new(),
            dataset_path: dataset_path.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn with_country_resolver(mut self, resolver: CountryNeighborResolver) -> Self {
        self.countries = resolver;
        self
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Run the whole pipeline and write `map<year>.html`.
    pub fn build(&self, request: &MapRequest) -> Result<MapArtifact, BuildError> {
        let dataset = LocationDataset::load(&self.dataset_path, request.year)?;

        let query_location = self.current_location(request.coordinates);
        let candidates = match &query_location {
            Some(address) => matcher::rank(&dataset, address),
            None => Vec::new(),
        };
        info!(year = dataset.year(), candidates = candidates.len(), "matched filming locations");

        let (films, dropped_films) = self.film_points(&candidates);
        let (countries, dropped_countries, country_error) = self.country_points(&request.country);

        fs::create_dir_all(&self.output_dir).map_err(|source| BuildError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;
        let year = dataset.year();
        let path = self.output_dir.join(render::map_file_name(year));

        let layers = [
            MarkerLayer::new(FILMS_LAYER, FILM_STYLE, films.clone()),
            MarkerLayer::new(COUNTRIES_LAYER, COUNTRY_STYLE, countries.clone()),
        ];
        MapRenderer::new(&format!("Films of {}", year)).save(&path, request.coordinates, &layers)?;
        info!(path = %path.display(), films = films.len(), countries = countries.len(), "map written");

        Ok(MapArtifact {
            path,
            year,
            query_location,
            films,
            countries,
            dropped_films,
            dropped_countries,
            country_error,
            generated_at: Utc::now(),
        })
    }

    fn current_location(&self, coords: Coordinates) -> Option<String> {
        match self.geocoder.reverse(coords) {
            Ok(Some(address)) => {
                info!(%coords, %address, "current location");
                Some(address)
            }
            Ok(None) => {
                warn!(%coords, "no address for coordinates; no films will be matched");
                None
            }
            Err(e) => {
                warn!(%coords, error = %e, "reverse geocoding failed; no films will be matched");
                None
            }
        }
    }

    /// Forward-geocode `name`, treating any failure as "not found".
    fn locate(&self, name: &str) -> Option<Coordinates> {
        match self.geocoder.forward(name) {
            Ok(Some(coords)) => Some(coords),
            Ok(None) => {
                debug!(name, "not found by geocoder; dropped");
                None
            }
            Err(e) => {
                debug!(name, error = %e, "geocoding failed; dropped");
                None
            }
        }
    }

    fn film_points(&self, candidates: &[MatchCandidate]) -> (Vec<MapPoint>, usize) {
        let mut points = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if let Some(coords) = self.locate(&candidate.location) {
                points.push(MapPoint::new(Some(candidate.sample_film.clone()), coords));
            }
        }
        let dropped = candidates.len() - points.len();
        (points, dropped)
    }

    fn country_points(&self, country: &str) -> (Vec<MapPoint>, usize, Option<String>) {
        let names = match self.countries.resolve(country) {
            Ok(names) => names,
            Err(e) => {
                warn!(country, error = %e, "Invalid country; skipping country markers");
                return (Vec::new(), 0, Some(e.to_string()));
            }
        };

        let points: Vec<MapPoint> = names
            .iter()
            .filter_map(|name| self.locate(name))
            .map(|coords| MapPoint::new(None, coords))
            .collect();
        let dropped = names.len() - points.len();
        (points, dropped, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use tempfile::TempDir;

    const CSV: &str = "\
movie,year,location,add_info
A,2000,\"Paris, France\",
B,2000,\"Paris, France\",
C,2000,\"Berlin, Germany\",
D,2000,\"Lyon, France\",
E,2000,\"Atlantis, France\",
";

    struct FakeGeocoder {
        address: Option<String>,
        places: HashMap<String, Coordinates>,
        failing: Vec<String>,
        forward_calls: RefCell<Vec<String>>,
    }

    impl FakeGeocoder {
        fn new(address: Option<&str>) -> Self {
            let mut places = HashMap::new();
            for (name, lat, lon) in [
                ("Paris, France", 48.85, 2.35),
                ("Berlin, Germany", 52.52, 13.40),
                ("Lyon, France", 45.76, 4.84),
                ("France", 46.6, 1.9),
                ("Germany", 51.1, 10.4),
                ("Spain", 40.4, -3.7),
                ("Belgium", 50.6, 4.6),
                ("Switzerland", 46.8, 8.2),
                ("Italy", 42.8, 12.8),
                ("Luxembourg", 49.8, 6.1),
            ] {
                places.insert(name.to_string(), Coordinates::new(lat, lon).unwrap());
            }
            Self {
                address: address.map(str::to_string),
                places,
                failing: vec!["Monaco".into()],
                forward_calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Geocoder for FakeGeocoder {
        fn reverse(&self, _coords: Coordinates) -> Result<Option<String>, GeoError> {
            Ok(self.address.clone())
        }

        fn forward(&self, query: &str) -> Result<Option<Coordinates>, GeoError> {
            self.forward_calls.borrow_mut().push(query.to_string());
            if self.failing.iter().any(|f| f == query) {
                return Err(GeoError::Network("connection reset".into()));
            }
            Ok(self.places.get(query).copied())
        }
    }

    fn setup(address: Option<&str>) -> (MapBuilder<FakeGeocoder>, TempDir) {
        let dir = TempDir::new().unwrap();
        let dataset = dir.path().join("locations.csv");
        fs::write(&dataset, CSV).unwrap();
        let builder = MapBuilder::new(FakeGeocoder::new(address), dataset, dir.path().join("out"));
        (builder, dir)
    }

    fn request(country: &str) -> MapRequest {
        MapRequest {
            year: 2000,
            coordinates: Coordinates::new(48.86, 2.34).unwrap(),
            country: country.to_string(),
        }
    }

    #[test]
    fn test_build_writes_named_artifact() {
        let (builder, dir) = setup(Some("Louvre, Paris, Ile-de-France, France"));
        let artifact = builder.build(&request("France")).unwrap();

        assert_eq!(artifact.path, dir.path().join("out").join("map2000.html"));
        assert!(artifact.path.exists());
        let html = fs::read_to_string(&artifact.path).unwrap();
        assert!(html.contains(FILMS_LAYER));
        assert!(html.contains(COUNTRIES_LAYER));
    }

    #[test]
    fn test_unresolvable_film_locations_dropped() {
        let (builder, _dir) = setup(Some("Louvre, Paris, Ile-de-France, France"));
        let artifact = builder.build(&request("France")).unwrap();

        // Paris (2 tokens), Lyon, Atlantis (1 token each); Berlin has none.
        let labels: Vec<&str> = artifact.films.iter().filter_map(|p| p.label.as_deref()).collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0], "A");
        assert!(labels.contains(&"D"));
        assert_eq!(artifact.dropped_films, 1);
        assert_eq!(artifact.query_location.as_deref(), Some("Louvre, Paris, Ile-de-France, France"));
    }

    #[test]
    fn test_country_markers_drop_failed_geocodes() {
        let (builder, _dir) = setup(Some("Paris, France"));
        let artifact = builder.build(&request("France")).unwrap();

        // France + 8 neighbours; Andorra is unknown to the fake, Monaco errors.
        assert_eq!(artifact.countries.len(), 7);
        assert_eq!(artifact.dropped_countries, 2);
        assert!(artifact.countries.iter().all(|p| p.label.is_none()));
        assert!(artifact.country_error.is_none());
    }

    #[test]
    fn test_invalid_country_still_builds_map() {
        let (builder, _dir) = setup(Some("Paris, France"));
        let artifact = builder.build(&request("Nowhereland")).unwrap();

        assert!(artifact.countries.is_empty());
        assert_eq!(artifact.dropped_countries, 0);
        assert!(artifact.country_error.as_deref().unwrap().contains("Nowhereland"));
        assert!(!artifact.films.is_empty());
        assert!(artifact.path.exists());
    }

    #[test]
    fn test_failed_reverse_geocode_yields_no_films() {
        let (builder, _dir) = setup(None);
        let artifact = builder.build(&request("Germany")).unwrap();

        assert!(artifact.query_location.is_none());
        assert!(artifact.films.is_empty());
        assert_eq!(artifact.dropped_films, 0);
        assert!(!artifact.countries.is_empty());
        assert!(builder
            .geocoder()
            .forward_calls
            .borrow()
            .iter()
            .all(|q| !q.contains(',')));
    }

    #[test]
    fn test_missing_dataset_is_fatal() {
        let dir = TempDir::new().unwrap();
        let builder = MapBuilder::new(
            FakeGeocoder::new(Some("Paris")),
            dir.path().join("missing.csv"),
            dir.path(),
        );
        let err = builder.build(&request("France")).unwrap_err();
        assert!(matches!(err, BuildError::Dataset(DatasetError::Open { .. })));
        assert!(!dir.path().join("map2000.html").exists());
    }

    #[test]
    fn test_custom_country_resolver() {
        let (builder, _dir) = setup(Some("Paris, France"));
        let builder = builder.with_country_resolver(CountryNeighborResolver::new().with_rename("Spain", "España"));
        builder.build(&request("France")).unwrap();

        let calls = builder.geocoder().forward_calls.borrow();
        assert!(calls.iter().any(|q| q == "España"));
        assert!(!calls.iter().any(|q| q == "Spain"));
    }

    #[test]
    fn test_artifact_serializes_to_json() {
        let (builder, _dir) = setup(Some("Paris, France"));
        let artifact = builder.build(&request("Nowhereland")).unwrap();
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["year"], 2000);
        assert!(json["country_error"].is_string());
        assert!(json["generated_at"].is_string());
    }
}
