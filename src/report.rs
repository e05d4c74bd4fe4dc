use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;
use tracing::info;

use crate::console::SEPARATOR;
use crate::filter::{day_name, Month};
use crate::loader::Dataset;
use crate::stats::{self, DurationStats, StationStats, Timed, TimeStats, UserStats};
use crate::utils::{format_number, format_seconds};

const NO_DATA: &str = "no data";

fn or_no_data<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| v.to_string())
}

/// Month name, or the bare number for months outside the supported range.
fn month_label(number: u32) -> String {
    Month::from_number(number).map_or_else(|| number.to_string(), |m| m.name().to_string())
}

fn footer(out: &mut impl Write, component: &str, elapsed: Duration) -> io::Result<()> {
    info!(action = "complete", component, duration_ms = elapsed.as_millis(), "Statistics computed");
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", SEPARATOR)
}

fn write_counts(out: &mut impl Write, title: &str, counts: &[(String, usize)]) -> io::Result<()> {
    writeln!(out, "{}:", title)?;
    if counts.is_empty() {
        writeln!(out, "  {}", NO_DATA)?;
    }
    for (value, count) in counts {
        writeln!(out, "  {}: {}", value, format_number(*count))?;
    }
    Ok(())
}

pub fn write_time_stats(out: &mut impl Write, stats: &Timed<TimeStats>) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let TimeStats { month, day, hour } = &stats.value;
    writeln!(out, "Most Common Month: {}", or_no_data(month.map(month_label)))?;
    writeln!(out, "Most Common Day of Week: {}", or_no_data(day.map(day_name)))?;
    writeln!(out, "Most Common Start Hour: {}", or_no_data(*hour))?;
    footer(out, "time_stats", stats.elapsed)
}

pub fn write_station_stats(out: &mut impl Write, stats: &Timed<StationStats>) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let StationStats {
        start_station,
        end_station,
        trip,
    } = &stats.value;
    writeln!(out, "Most Common Start Station: {}", or_no_data(start_station.as_deref()))?;
    writeln!(out, "Most Common End Station: {}", or_no_data(end_station.as_deref()))?;
    writeln!(
        out,
        "Most Common Start and End Station Combination: {}",
        or_no_data(trip.as_deref())
    )?;
    footer(out, "station_stats", stats.elapsed)
}

pub fn write_duration_stats(out: &mut impl Write, stats: &Timed<DurationStats>) -> io::Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let DurationStats { total, mean } = &stats.value;
    writeln!(out, "Total Travel Time: {} ({})", total, format_seconds(*total))?;
    match mean {
        Some(mean) => writeln!(out, "Mean Travel Time: {}", mean)?,
        None => writeln!(out, "Mean Travel Time: undefined")?,
    }
    footer(out, "duration_stats", stats.elapsed)
}

pub fn write_user_stats(out: &mut impl Write, stats: &Timed<UserStats>) -> io::Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let UserStats {
        user_types,
        genders,
        birth_years,
    } = &stats.value;

    write_counts(out, "User Types", user_types)?;
    writeln!(out)?;

    if let Some(genders) = genders {
        write_counts(out, "Gender Counts", genders)?;
        writeln!(out)?;
    }

    if let Some(years) = birth_years {
        writeln!(out, "Earliest Birth Year: {}", or_no_data(years.earliest))?;
        writeln!(out, "Most Recent Birth Year: {}", or_no_data(years.most_recent))?;
        writeln!(out, "Most Common Birth Year: {}", or_no_data(years.most_common))?;
    }
    footer(out, "user_stats", stats.elapsed)
}

/// Run all four analyses over `dataset` and print them in order.
pub fn report_all(out: &mut impl Write, dataset: &Dataset) -> io::Result<()> {
    if dataset.is_empty() {
        writeln!(out, "\nNo trips match the selected filters.")?;
    }
    write_time_stats(out, &stats::time_stats(&dataset.trips))?;
    write_station_stats(out, &stats::station_stats(&dataset.trips))?;
    write_duration_stats(out, &stats::duration_stats(&dataset.trips))?;
    write_user_stats(out, &stats::user_stats(dataset))
}
