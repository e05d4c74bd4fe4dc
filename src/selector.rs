use std::io::{BufRead, Write};
use tracing::info;

use crate::console::{Console, SEPARATOR};
use crate::error::Result;
use crate::filter::{parse_day, City, FilterMode, FilterSpec, Month};

const CITY_PROMPT: &str = "Would you like to see data for Chicago, New York City, or Washington? ";
const MODE_PROMPT: &str =
    "Would you like to filter the data by month, day, both, or not at all? Enter 'none' for no filter. ";
const MONTH_PROMPT: &str = "Which month - January, February, March, April, May, or June? ";
const DAY_PROMPT: &str =
    "Which day - Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, or Sunday? ";

/// Ask `question` until `parse` accepts the answer. A `None` from `parse`
/// is the retry signal; `field` names the value in the complaint.
pub fn prompt_until_valid<R, W, T>(
    console: &mut Console<R, W>,
    question: &str,
    field: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask(question)?;
        match parse(&answer) {
            Some(value) => return Ok(value),
            None => {
                info!(action = "reject", component = "filter_selector", field, answer = %answer, "Invalid input");
                writeln!(
                    console.out(),
                    "Invalid {}. Please enter a valid {}.",
                    field,
                    field
                )?;
            }
        }
    }
}

/// Collect the city, month and day to analyze.
pub fn get_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<FilterSpec> {
    writeln!(console.out(), "Hello! Let's explore some US bikeshare data!")?;

    let city = prompt_until_valid(console, CITY_PROMPT, "city", City::parse)?;
    let mode = prompt_until_valid(console, MODE_PROMPT, "filter", FilterMode::parse)?;

    let month = if mode.wants_month() {
        Some(prompt_until_valid(console, MONTH_PROMPT, "month", Month::parse)?)
    } else {
        None
    };

    let day = if mode.wants_day() {
        Some(prompt_until_valid(console, DAY_PROMPT, "day", parse_day)?)
    } else {
        None
    };

    writeln!(console.out(), "{}", SEPARATOR)?;

    let spec = FilterSpec { city, month, day };
    info!(action = "select", component = "filter_selector", filters = %spec, "Filters selected");
    Ok(spec)
}
