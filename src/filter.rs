use chrono::Weekday;
use std::fmt;

pub const MONTH_NAMES: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Name of the CSV file backing this city.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn parse(input: &str) -> Option<City> {
        let input = normalize(input);
        City::ALL.into_iter().find(|city| city.name() == input)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the six months covered by the datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month(u32);

impl Month {
    /// `number` is the calendar month, 1 for January.
    pub fn from_number(number: u32) -> Option<Month> {
        (1..=MONTH_NAMES.len() as u32)
            .contains(&number)
            .then_some(Month(number))
    }

    pub fn parse(input: &str) -> Option<Month> {
        let input = normalize(input);
        MONTH_NAMES
            .iter()
            .position(|name| *name == input)
            .map(|idx| Month(idx as u32 + 1))
    }

    pub fn number(self) -> u32 {
        self.0
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize - 1]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn parse_day(input: &str) -> Option<Weekday> {
    let input = normalize(input);
    DAY_NAMES
        .iter()
        .position(|name| *name == input)
        .map(|idx| WEEKDAYS[idx])
}

pub fn day_name(day: Weekday) -> &'static str {
    DAY_NAMES[day.num_days_from_monday() as usize]
}

/// Which filter dimensions the user wants to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    pub fn parse(input: &str) -> Option<FilterMode> {
        match normalize(input).as_str() {
            "month" => Some(FilterMode::Month),
            "day" => Some(FilterMode::Day),
            "both" => Some(FilterMode::Both),
            "none" => Some(FilterMode::None),
            _ => None,
        }
    }

    pub fn wants_month(self) -> bool {
        matches!(self, FilterMode::Month | FilterMode::Both)
    }

    pub fn wants_day(self) -> bool {
        matches!(self, FilterMode::Day | FilterMode::Both)
    }
}

/// A validated selection. `None` for month or day means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSpec {
    pub fn unfiltered(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city={} month={} day={}",
            self.city,
            self.month.map_or("all", Month::name),
            self.day.map_or("all", day_name)
        )
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
