use std::fmt;

use serde::Serialize;

use crate::processing::{reduce, ReduceOp};
use crate::trips::{TripTable, TRIP_DURATION};
use crate::types::Value;

use super::NO_DATA;

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_seconds: Option<f64>,
    pub mean_seconds: Option<f64>,
}

impl DurationStats {
    pub fn compute(table: &TripTable) -> Self {
        let ds = table.dataset();
        let numeric = |op| reduce(ds, TRIP_DURATION, op).as_ref().and_then(Value::as_f64);
        Self {
            total_seconds: numeric(ReduceOp::Sum),
            mean_seconds: numeric(ReduceOp::Mean),
        }
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total_seconds {
            Some(total) => writeln!(f, "Total travel time: {total:.1} seconds")?,
            None => writeln!(f, "Total travel time: {NO_DATA}")?,
        }
        match self.mean_seconds {
            Some(mean) => writeln!(f, "Mean travel time: {mean:.1} seconds"),
            None => writeln!(f, "Mean travel time: {NO_DATA}"),
        }
    }
}
