//! Descriptive statistics over a filtered [`TripTable`].
//!
//! Each report is a pure reduction: it reads the table and returns a serializable summary whose
//! `Display` impl is the text shown to users. Empty tables never panic; aggregates over zero
//! values render as `no data`.

mod duration;
mod station;
mod time;
mod user;

use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;

use crate::console::SEPARATOR_WIDTH;
use crate::trips::TripTable;

pub use duration::DurationStats;
pub use station::{StationStats, TripPair};
pub use time::TimeStats;
pub use user::{BirthYearStats, CategoryCount, UserStats};

/// Text shown where an aggregate has nothing to aggregate.
pub const NO_DATA: &str = "no data";

/// Outcome of a statistic over a column that only some datasets carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ColumnStat<T> {
    /// The dataset has no such column.
    NotAvailable,
    /// The column exists but the filtered rows hold no values for it.
    NoData,
    Available(T),
}

/// All four reports for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReports {
    pub rows: usize,
    pub time: TimeStats,
    pub stations: StationStats,
    pub duration: DurationStats,
    pub users: UserStats,
}

impl TripReports {
    pub fn compute(table: &TripTable) -> Self {
        Self {
            rows: table.row_count(),
            time: TimeStats::compute(table),
            stations: StationStats::compute(table),
            duration: DurationStats::compute(table),
            users: UserStats::compute(table),
        }
    }
}

/// Compute and print every report, each with a heading, its timing, and a separator.
pub fn render<W: Write>(out: &mut W, table: &TripTable) -> io::Result<TripReports> {
    let time = timed(out, "Calculating The Most Frequent Times of Travel...", || {
        TimeStats::compute(table)
    })?;
    let stations = timed(out, "Calculating The Most Popular Stations and Trip...", || {
        StationStats::compute(table)
    })?;
    let duration = timed(out, "Calculating Trip Duration...", || DurationStats::compute(table))?;
    let users = timed(out, "Calculating User Stats...", || UserStats::compute(table))?;

    Ok(TripReports {
        rows: table.row_count(),
        time,
        stations,
        duration,
        users,
    })
}

fn timed<W, T, F>(out: &mut W, heading: &str, compute: F) -> io::Result<T>
where
    W: Write,
    T: fmt::Display,
    F: FnOnce() -> T,
{
    writeln!(out, "\n{heading}\n")?;
    let started = Instant::now();
    let report = compute();
    let elapsed = started.elapsed();
    write!(out, "{report}")?;
    writeln!(out, "\nThis took {:.6} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    tracing::debug!(heading, ?elapsed, "report computed");
    Ok(report)
}

/// `value` or [`NO_DATA`].
fn or_no_data<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NO_DATA.to_string(),
    }
}
