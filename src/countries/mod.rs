//! Country reference data and bordering-country resolution.

pub mod data;
pub mod resolver;

pub use resolver::{CountryError, CountryNeighborResolver, CountrySet};
