use std::fmt;

use serde::Serialize;

use crate::processing::{mode, most_common};
use crate::trips::{TripTable, END_STATION, START_STATION};
use crate::types::Value;

use super::{or_no_data, NO_DATA};

/// A start/end station combination and how many trips made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripPair {
    pub start: String,
    pub end: String,
    pub trips: usize,
}

/// Most popular stations and station pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    pub most_common_trip: Option<TripPair>,
}

impl StationStats {
    pub fn compute(table: &TripTable) -> Self {
        let ds = table.dataset();
        let trip = most_common(ds, &[START_STATION, END_STATION])
            .flatten()
            .and_then(|group| match group.key.as_slice() {
                [Value::Utf8(start), Value::Utf8(end)] => Some(TripPair {
                    start: start.clone(),
                    end: end.clone(),
                    trips: group.count,
                }),
                _ => None,
            });

        Self {
            most_common_start: text_mode(table, START_STATION),
            most_common_end: text_mode(table, END_STATION),
            most_common_trip: trip,
        }
    }
}

fn text_mode(table: &TripTable, column: &str) -> Option<String> {
    match mode(table.dataset(), column) {
        Some(Value::Utf8(s)) => Some(s),
        _ => None,
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The most common start station: {}.", or_no_data(&self.most_common_start))?;
        writeln!(f, "The most common end station: {}.", or_no_data(&self.most_common_end))?;
        match &self.most_common_trip {
            Some(pair) => writeln!(
                f,
                "The most common trip: {} -> {} ({} trips).",
                pair.start, pair.end, pair.trips
            ),
            None => writeln!(f, "The most common trip: {NO_DATA}."),
        }
    }
}
