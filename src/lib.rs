//! Filmmap: find films shot near a place and map them alongside the
//! neighbours of a chosen country.

pub mod builder;
pub mod config;
pub mod countries;
pub mod dataset;
pub mod geo;
pub mod matcher;
pub mod render;

pub use builder::{BuildError, MapArtifact, MapBuilder, MapRequest};
pub use config::Config;
pub use countries::{CountryError, CountryNeighborResolver, CountrySet};
pub use dataset::LocationDataset;
pub use geo::{Coordinates, Geocoder, NominatimClient};
pub use matcher::{rank, MatchCandidate};
