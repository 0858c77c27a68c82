//! Filter vocabularies, [`FilterCriteria`], and the interactive filter collector.

use std::fmt;
use std::io::{BufRead, Write};

use chrono::{Month, Weekday};

use crate::console::Console;
use crate::error::SessionResult;
use crate::registry::City;

/// Months that appear in the published datasets, in calendar order.
pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Weekdays with their title-cased names, Monday first.
pub const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

const DEFAULT_CITY: City = City::Chicago;
const ALL: &str = "all";

/// Either every value or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

/// Title-cased English name of `weekday`, as stored in the `day_of_week` column.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize].1
}

/// Which rows of which city to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: Selection<Month>,
    pub day: Selection<Weekday>,
}

impl FilterCriteria {
    /// Criteria selecting every trip of `city`.
    pub fn all(city: City) -> Self {
        Self {
            city,
            month: Selection::All,
            day: Selection::All,
        }
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = match self.month {
            Selection::All => ALL,
            Selection::Only(m) => m.name(),
        };
        let day = match self.day {
            Selection::All => ALL,
            Selection::Only(d) => weekday_name(d),
        };
        write!(f, "city={} month={} day={}", self.city, month, day)
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Parse a city answer. Empty input selects Chicago.
pub fn parse_city(input: &str) -> Option<City> {
    match normalize(input).as_str() {
        "" => Some(DEFAULT_CITY),
        key => City::from_key(key),
    }
}

/// Parse a month answer (`all` or january…june). Empty input selects `all`.
pub fn parse_month(input: &str) -> Option<Selection<Month>> {
    match normalize(input).as_str() {
        "" | ALL => Some(Selection::All),
        name => MONTHS
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .map(|m| Selection::Only(*m)),
    }
}

/// Parse a weekday answer (`all` or monday…sunday). Empty input selects `all`.
pub fn parse_day(input: &str) -> Option<Selection<Weekday>> {
    match normalize(input).as_str() {
        "" | ALL => Some(Selection::All),
        name => WEEKDAYS
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(d, _)| Selection::Only(*d)),
    }
}

/// Ask for city, month and day until each answer is valid.
pub fn collect<R: BufRead, W: Write>(console: &mut Console<R, W>) -> SessionResult<FilterCriteria> {
    console.say("Hello! Let's explore some US bikeshare data!")?;

    let city = console.ask_until(
        "Which city would you like to investigate (chicago, new york city, washington) - default chicago? ",
        parse_city,
    )?;
    let month = console.ask_until(
        "Which month (all, january, february, ... , june) - default all? ",
        parse_month,
    )?;
    let day = console.ask_until(
        "Which day of the week (all, monday, tuesday, ... sunday) - default all? ",
        parse_day,
    )?;

    console.separator()?;
    let criteria = FilterCriteria { city, month, day };
    tracing::debug!(%criteria, "filters collected");
    Ok(criteria)
}
