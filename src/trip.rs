use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Columns every city file carries, in file order.
pub const TRIP_COLUMNS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];
pub const GENDER_COLUMN: &str = "Gender";
pub const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// One CSV row. `Gender` and `Birth Year` only exist for some cities;
/// empty cells decode to `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A record together with the fields derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub record: TripRecord,
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

impl Trip {
    /// Returns `None` when the start time does not parse.
    pub fn from_record(record: TripRecord) -> Option<Trip> {
        let start = NaiveDateTime::parse_from_str(record.start_time.trim(), TIMESTAMP_FORMAT).ok()?;
        Some(Trip {
            month: start.month(),
            weekday: start.weekday(),
            hour: start.hour(),
            record,
        })
    }

    /// Birth year as a whole year; the source writes it as a float.
    pub fn birth_year(&self) -> Option<i32> {
        self.record.birth_year.map(|year| year as i32)
    }
}

/// Which optional columns a dataset carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Columns {
    /// Header names must already be trimmed, as `loader::open_reader` does,
    /// so the flags agree with what serde can decode.
    pub fn from_headers(headers: &csv::StringRecord) -> Self {
        Self {
            has_gender: headers.iter().any(|h| h == GENDER_COLUMN),
            has_birth_year: headers.iter().any(|h| h == BIRTH_YEAR_COLUMN),
        }
    }
}
