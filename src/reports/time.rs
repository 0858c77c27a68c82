use std::fmt;

use serde::Serialize;

use crate::processing::mode;
use crate::trips::{TripTable, DAY_OF_WEEK, HOUR, MONTH};
use crate::types::Value;

use super::or_no_data;

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    /// Month name, e.g. `"June"`.
    pub most_common_month: Option<String>,
    pub most_common_day: Option<String>,
    pub most_common_hour: Option<u32>,
}

impl TimeStats {
    pub fn compute(table: &TripTable) -> Self {
        let ds = table.dataset();
        let month = match mode(ds, MONTH) {
            Some(Value::Int64(n)) => u8::try_from(n)
                .ok()
                .and_then(|n| chrono::Month::try_from(n).ok())
                .map(|m| m.name().to_string()),
            _ => None,
        };
        let day = match mode(ds, DAY_OF_WEEK) {
            Some(Value::Utf8(day)) => Some(day),
            _ => None,
        };
        let hour = match mode(ds, HOUR) {
            Some(Value::Int64(h)) => u32::try_from(h).ok(),
            _ => None,
        };

        Self {
            most_common_month: month,
            most_common_day: day,
            most_common_hour: hour,
        }
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The most common month: {}.", or_no_data(&self.most_common_month))?;
        writeln!(f, "The most common day of week: {}.", or_no_data(&self.most_common_day))?;
        writeln!(f, "The most common hour: {}.", or_no_data(&self.most_common_hour))
    }
}
