//! Loading and filtering of the per-city trip tables.
//!
//! A city name resolves to one CSV file under the data directory. Loading
//! reads every row, converts it to a [`Trip`] (deriving the calendar fields
//! from the start time), then narrows the set by the month and day filters.
//! Both filters are plain equality predicates, so applying them in either
//! order gives the same rows.

use crate::models::{City, Filters, RawTrip, Trip, TripConvertError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A trip table that could not be loaded. Both variants are configuration
/// errors: the session cannot continue and the process exits non-zero.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("no trip table for {city}: expected {}", .path.display())]
    Missing { city: City, path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed row {line} in {}: {source}", .path.display())]
    Row {
        path: PathBuf,
        line: u64,
        #[source]
        source: TripConvertError,
    },
}

/// Resolve the backing file for a city under `data_dir`.
pub fn data_path(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.csv_file())
}

/// Load a city's table and narrow it by the month/day filters.
///
/// The returned rows are final for the session iteration: every reporter and
/// the pager observe exactly this set.
pub fn load_trips(data_dir: &Path, filters: &Filters) -> Result<Vec<Trip>, DatasetError> {
    let path = data_path(data_dir, filters.city);
    if !path.is_file() {
        return Err(DatasetError::Missing {
            city: filters.city,
            path,
        });
    }

    let mut reader = csv::Reader::from_path(&path).map_err(|source| DatasetError::Csv {
        path: path.clone(),
        source,
    })?;

    let mut trips = Vec::new();
    for (idx, result) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(|source| DatasetError::Csv {
            path: path.clone(),
            source,
        })?;
        // 1-based data line; the header occupies line 1.
        let line = idx as u64 + 2;
        let trip = Trip::try_from(raw).map_err(|source| DatasetError::Row {
            path: path.clone(),
            line,
            source,
        })?;
        trips.push(trip);
    }
    let total = trips.len();
    log::debug!("loaded {total} rows from {}", path.display());

    trips.retain(|t| filters.month.matches(t.month));
    trips.retain(|t| filters.day.matches(t.day_of_week));
    log::debug!("{} of {total} rows match the selected filters", trips.len());

    Ok(trips)
}
