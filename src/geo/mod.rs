//! Geocoding subsystem.
//!
//! Coordinate parsing, the `Geocoder` seam, and the Nominatim provider.

pub mod nominatim;
pub mod types;

pub use nominatim::{Geocoder, NominatimClient};
pub use types::{CoordinateError, Coordinates, GeoError, MapPoint};
