//! Dataset loading and access
//!
//! The recommender draws from three CSV tables loaded once at startup.
//! Rows deserialize into the typed models at this boundary; everything
//! downstream works on the typed tables and never touches files.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::DatasetsConfig;
use crate::error::TripCraftError;
use crate::models::{Accommodation, Attraction, Restaurant};

/// The three immutable tables the recommender draws from
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    /// Tourism dataset rows
    pub attractions: Vec<Attraction>,
    /// Restaurant dataset rows
    pub restaurants: Vec<Restaurant>,
    /// Accommodation dataset rows
    pub accommodations: Vec<Accommodation>,
}

/// Which dataset an options query refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Tourism,
    Restaurants,
    Accommodations,
}

impl FromStr for DatasetKind {
    type Err = TripCraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tourism" => Ok(Self::Tourism),
            "restaurants" => Ok(Self::Restaurants),
            "accommodations" => Ok(Self::Accommodations),
            other => Err(TripCraftError::validation(format!(
                "unknown dataset '{other}'"
            ))),
        }
    }
}

impl DatasetStore {
    /// Load all three tables from the configured directory
    pub fn load(config: &DatasetsConfig) -> Result<Self, TripCraftError> {
        let dir = Path::new(&config.dir);
        info!("Loading datasets from {}", dir.display());

        let attractions: Vec<Attraction> = read_csv_file(&dir.join(&config.attractions_file))?;
        let restaurants: Vec<Restaurant> = read_csv_file(&dir.join(&config.restaurants_file))?;
        let accommodations: Vec<Accommodation> =
            read_csv_file(&dir.join(&config.accommodations_file))?;

        info!(
            "Loaded {} attractions, {} restaurants, {} accommodations",
            attractions.len(),
            restaurants.len(),
            accommodations.len()
        );
        Ok(Self {
            attractions,
            restaurants,
            accommodations,
        })
    }

    /// Build a store from in-memory CSV text, headers included
    pub fn from_csv_text(
        attractions_csv: &str,
        restaurants_csv: &str,
        accommodations_csv: &str,
    ) -> Result<Self, TripCraftError> {
        Ok(Self {
            attractions: read_rows(attractions_csv.as_bytes(), "attractions")?,
            restaurants: read_rows(restaurants_csv.as_bytes(), "restaurants")?,
            accommodations: read_rows(accommodations_csv.as_bytes(), "accommodations")?,
        })
    }

    /// Distinct category values of a dataset, in first-appearance order.
    /// Tourism and accommodations report their `Type` column, restaurants
    /// their `Cuisine` column.
    #[must_use]
    pub fn options(&self, kind: DatasetKind) -> Vec<String> {
        match kind {
            DatasetKind::Tourism => distinct(self.attractions.iter().map(|a| &a.attraction_type)),
            DatasetKind::Restaurants => distinct(self.restaurants.iter().map(|r| &r.cuisine)),
            DatasetKind::Accommodations => {
                distinct(self.accommodations.iter().map(|a| &a.accommodation_type))
            }
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value.as_str()) {
            out.push(value.clone());
        }
    }
    out
}

fn read_csv_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, TripCraftError> {
    let file = File::open(path)
        .map_err(|e| TripCraftError::dataset(format!("cannot open {}: {e}", path.display())))?;
    read_rows(file, &path.display().to_string())
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R, label: &str) -> Result<Vec<T>, TripCraftError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        let row: T =
            record.map_err(|e| TripCraftError::dataset(format!("bad row in {label}: {e}")))?;
        rows.push(row);
    }
    Ok(rows)
}
