//! Bordering-country resolution.
//!
//! `resolve` turns a country name into the set of its land neighbours plus
//! itself, with display names reconciled through a rename table so the result
//! can be fed straight to a geocoder.

use super::data::{self, CountryRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Canonical country names, including the queried country itself.
pub type CountrySet = BTreeSet<String>;

/// Known naming mismatches between the reference table's short names and the
/// forms the map labels and geocoder expect.
const DEFAULT_RENAMES: &[(&str, &str)] = &[
    ("United States", "USA"),
    ("United Kingdom", "UK"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountryError {
    #[error("Invalid country: '{0}'")]
    Unknown(String),
    #[error("Invalid country: '{country}' has a border entry '{code}' missing from the reference data")]
    MissingBorder { country: String, code: String },
}

/// Resolves a country to its bordering countries.
pub struct CountryNeighborResolver {
    countries: &'static [CountryRecord],
    renames: BTreeMap<String, String>,
}

impl Default for CountryNeighborResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryNeighborResolver {
    pub fn new() -> Self {
        Self {
            countries: data::COUNTRIES,
            renames: DEFAULT_RENAMES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Add or replace a rename (alternate name → canonical name).
    pub fn with_rename(mut self, from: &str, to: &str) -> Self {
        self.renames.insert(from.to_string(), to.to_string());
        self
    }

    /// Bordering countries of `country_name`, plus the country itself.
    pub fn resolve(&self, country_name: &str) -> Result<CountrySet, CountryError> {
        let country = self
            .lookup(country_name)
            .ok_or_else(|| CountryError::Unknown(country_name.trim().to_string()))?;

        let mut names = CountrySet::new();
        for code in country.borders {
            let neighbour =
                data::by_code_in(self.countries, code).ok_or_else(|| CountryError::MissingBorder {
                    country: country.name.to_string(),
                    code: code.to_string(),
                })?;
            names.insert(self.canonical(neighbour.name));
        }
        names.insert(self.canonical(country.name));

        Ok(names)
    }

    fn lookup(&self, query: &str) -> Option<&'static CountryRecord> {
        data::lookup_in(self.countries, query)
    }

    fn canonical(&self, name: &str) -> String {
        self.renames
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROKEN: &[CountryRecord] = &[CountryRecord {
        code: "AAA",
        iso2: "AA",
        name: "Atlantis",
        aliases: &[],
        borders: &["ZZZ"],
    }];

    #[test]
    fn test_germany_includes_itself_and_neighbours() {
        let set = CountryNeighborResolver::new().resolve("Germany").unwrap();
        assert!(set.contains("Germany"));
        assert!(set.contains("France"));
        assert!(set.contains("Poland"));
        assert!(set.contains("Switzerland"));
        assert_eq!(set.len(), 10);
    }

    #[test]
    fn test_united_states_renamed() {
        let set = CountryNeighborResolver::new().resolve("United States").unwrap();
        assert!(set.contains("USA"));
        assert!(!set.contains("United States"));
        assert!(set.contains("Canada"));
        assert!(set.contains("Mexico"));
    }

    #[test]
    fn test_neighbour_renamed() {
        let set = CountryNeighborResolver::new().resolve("Ireland").unwrap();
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec!["Ireland".to_string(), "UK".to_string()]
        );

        let set = CountryNeighborResolver::new().resolve("Canada").unwrap();
        assert!(set.contains("USA"));
        assert!(!set.contains("United States"));
    }

    #[test]
    fn test_case_insensitive_query_uses_canonical_name() {
        let set = CountryNeighborResolver::new().resolve("  germany").unwrap();
        assert!(set.contains("Germany"));
        assert!(!set.contains("  germany"));
        assert!(!set.contains("germany"));
    }

    #[test]
    fn test_single_neighbour_still_includes_self() {
        let set = CountryNeighborResolver::new().resolve("Portugal").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("Portugal"));
        assert!(set.contains("Spain"));
    }

    #[test]
    fn test_island_country_is_singleton() {
        let set = CountryNeighborResolver::new().resolve("Japan").unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("Japan"));
    }

    #[test]
    fn test_unknown_country() {
        let err = CountryNeighborResolver::new().resolve("Nowhereland").unwrap_err();
        assert_eq!(err, CountryError::Unknown("Nowhereland".into()));
        assert!(err.to_string().starts_with("Invalid country"));
    }

    #[test]
    fn test_missing_border_reference_fails_without_partial_result() {
        let resolver = CountryNeighborResolver {
            countries: BROKEN,
            renames: BTreeMap::new(),
        };
        assert_eq!(
            resolver.resolve("atlantis"),
            Err(CountryError::MissingBorder {
                country: "Atlantis".into(),
                code: "ZZZ".into()
            })
        );
    }

    #[test]
    fn test_custom_rename() {
        let resolver = CountryNeighborResolver::new().with_rename("Czech Republic", "Czechia");
        let set = resolver.resolve("Germany").unwrap();
        assert!(set.contains("Czechia"));
        assert!(!set.contains("Czech Republic"));
        assert!(resolver.resolve("Canada").unwrap().contains("USA"));
    }
}
