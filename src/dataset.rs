//! Filming-location dataset loaded from CSV.
//!
//! Rows carry `movie`, `location` and `year` columns (anything else is ignored).
//! Only rows for one year are kept, grouped by location.

use serde::Deserialize;
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Location value used in the source data when no location was recorded.
pub const NO_DATA: &str = "NO DATA";

const REQUIRED_COLUMNS: &[&str] = &["movie", "location", "year"];

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Cannot open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot read dataset header: {0}")]
    Header(#[from] csv::Error),
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
}

#[derive(Debug, Deserialize)]
struct RawRow {
    movie: String,
    location: String,
    year: String,
}

/// Films grouped by location, for a single year.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationDataset {
    year: i32,
    locations: BTreeMap<String, BTreeSet<String>>,
}

impl LocationDataset {
    /// Load the dataset at `path`, keeping rows for `year`.
    pub fn load(path: impl AsRef<Path>, year: i32) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(file, year)?;
        info!(
            path = %path.display(),
            year,
            locations = dataset.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse CSV from any reader. Malformed rows are skipped.
    pub fn from_reader<R: io::Read>(reader: R, year: i32) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for &column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let wanted = year.to_string();
        let mut dataset = Self {
            year,
            locations: BTreeMap::new(),
        };
        let mut skipped = 0usize;

        for (line, result) in rdr.deserialize::<RawRow>().enumerate() {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    debug!(line = line + 2, error = %e, "skipping malformed row");
                    skipped += 1;
                    continue;
                }
            };

            if row.year != wanted || row.location == NO_DATA {
                continue;
            }

            dataset.insert(row.location, row.movie);
        }

        if skipped > 0 {
            info!(skipped, "malformed dataset rows ignored");
        }

        Ok(dataset)
    }

    /// Build a dataset directly from `(location, movie)` pairs.
    pub fn from_entries<I, L, M>(year: i32, entries: I) -> Self
    where
        I: IntoIterator<Item = (L, M)>,
        L: Into<String>,
        M: Into<String>,
    {
        let mut dataset = Self {
            year,
            locations: BTreeMap::new(),
        };
        for (location, movie) in entries {
            dataset.insert(location.into(), movie.into());
        }
        dataset
    }

    fn insert(&mut self, location: String, movie: String) {
        self.locations.entry(location).or_default().insert(movie);
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn films(&self, location: &str) -> Option<&BTreeSet<String>> {
        self.locations.get(location)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, BTreeSet<String>> {
        self.locations.iter()
    }
}
