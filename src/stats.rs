//! The four trip analyses. Each returns plain values plus the time it took;
//! rendering lives in `report`.
//!
//! Mode and frequency tables share one tie-break: the higher count wins, and
//! among equal counts the value seen first in row order comes first.

use chrono::Weekday;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::loader::Dataset;
use crate::trip::Trip;

/// A computed value and the wall-clock time spent computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

fn timed<T>(compute: impl FnOnce() -> T) -> Timed<T> {
    let start_time = Instant::now();
    let value = compute();
    Timed {
        value,
        elapsed: start_time.elapsed(),
    }
}

/// Occurrence counts in descending order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value, `None` for no values.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    /// Calendar month number, 1 for January.
    pub month: Option<u32>,
    pub day: Option<Weekday>,
    pub hour: Option<u32>,
}

pub fn time_stats(trips: &[Trip]) -> Timed<TimeStats> {
    timed(|| TimeStats {
        month: mode(trips.iter().map(|t| t.month)),
        day: mode(trips.iter().map(|t| t.weekday)),
        hour: mode(trips.iter().map(|t| t.hour)),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub trip: Option<String>,
}

pub fn station_stats(trips: &[Trip]) -> Timed<StationStats> {
    timed(|| {
        let starts = || trips.iter().map(|t| t.record.start_station.as_str());
        let ends = || trips.iter().map(|t| t.record.end_station.as_str());

        // a pair only exists when both of its own row's stations do
        let pairs: Vec<String> = starts()
            .zip(ends())
            .filter(|(start, end)| is_present(start) && is_present(end))
            .map(|(start, end)| format!("{} to {}", start, end))
            .collect();

        StationStats {
            start_station: mode(starts().filter(|s| is_present(s))).map(str::to_string),
            end_station: mode(ends().filter(|s| is_present(s))).map(str::to_string),
            trip: mode(pairs),
        }
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    /// Seconds; zero for no trips.
    pub total: f64,
    /// Seconds; undefined for no trips.
    pub mean: Option<f64>,
}

pub fn duration_stats(trips: &[Trip]) -> Timed<DurationStats> {
    timed(|| {
        let total: f64 = trips.iter().map(|t| t.record.trip_duration).sum();
        let mean = (!trips.is_empty()).then(|| total / trips.len() as f64);
        DurationStats { total, mean }
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// Present only when the dataset has a gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// Present only when the dataset has a birth year column.
    pub birth_years: Option<BirthYearStats>,
}

pub fn user_stats(dataset: &Dataset) -> Timed<UserStats> {
    let trips = &dataset.trips;
    timed(|| {
        let user_types = counts_of(trips.iter().filter_map(|t| t.record.user_type.as_deref()));

        let genders = dataset
            .columns
            .has_gender
            .then(|| counts_of(trips.iter().filter_map(|t| t.record.gender.as_deref())));

        let birth_years = dataset.columns.has_birth_year.then(|| {
            let years = || trips.iter().filter_map(Trip::birth_year);
            BirthYearStats {
                earliest: years().min(),
                most_recent: years().max(),
                most_common: mode(years()),
            }
        });

        UserStats {
            user_types,
            genders,
            birth_years,
        }
    })
}

/// Blank cells are missing values.
fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn counts_of<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    value_counts(values.filter(|v| is_present(v)))
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}
