use chrono::Weekday;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::error::{BikeshareError, Result};
use crate::filter::{City, FilterSpec, Month};
use crate::trip::{Columns, Trip, TripRecord};

/// Trips of one city after filtering, plus the optional columns its file has.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub trips: Vec<Trip>,
    pub columns: Columns,
}

impl Dataset {
    /// Keep only trips matching the given month and weekday. Row order is kept.
    pub fn apply_filters(mut self, month: Option<Month>, day: Option<Weekday>) -> Self {
        if let Some(month) = month {
            self.trips.retain(|trip| trip.month == month.number());
        }
        if let Some(day) = day {
            self.trips.retain(|trip| trip.weekday == day);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

pub fn city_data_path(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.file_name())
}

/// Header names are trimmed so serde field names and `Columns` see the same text.
pub(crate) fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|source| BikeshareError::DataRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Read every trip in `path` and derive month, weekday and hour.
pub fn read_trips(path: &Path) -> Result<Dataset> {
    let data_err = |source: csv::Error| BikeshareError::DataRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = open_reader(path)?;
    let columns = Columns::from_headers(reader.headers().map_err(data_err)?);

    let mut trips = Vec::new();
    for (idx, result) in reader.deserialize::<TripRecord>().enumerate() {
        let record = result.map_err(data_err)?;
        let value = record.start_time.clone();
        let trip = Trip::from_record(record)
            .ok_or(BikeshareError::Timestamp { row: idx + 1, value })?;
        trips.push(trip);
    }

    Ok(Dataset { trips, columns })
}

/// Load the city's trips and apply the month and day filters.
pub fn load_data(data_dir: &Path, spec: &FilterSpec) -> Result<Dataset> {
    let start_time = Instant::now();
    let path = city_data_path(data_dir, spec.city);
    info!(action = "start", component = "dataset_loader", path = ?path, filters = %spec, "Loading trip data");

    let dataset = read_trips(&path)?;
    let total = dataset.len();
    let dataset = dataset.apply_filters(spec.month, spec.day);

    info!(
        action = "complete",
        component = "dataset_loader",
        total_rows = total,
        retained_rows = dataset.len(),
        has_gender = dataset.columns.has_gender,
        has_birth_year = dataset.columns.has_birth_year,
        duration_ms = start_time.elapsed().as_millis(),
        "Trip data loaded"
    );
    Ok(dataset)
}
