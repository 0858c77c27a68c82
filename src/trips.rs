//! Trip tables: load a city's dataset, derive time columns, and apply month/day filters.

use chrono::{Datelike, Timelike};

use crate::error::{IngestionError, IngestionResult};
use crate::filters::{weekday_name, FilterCriteria, Selection};
use crate::ingestion::{ingest_from_path, IngestionOptions};
use crate::processing::filter_eq;
use crate::registry::{City, DatasetRegistry};
use crate::types::{DataSet, DataType, Field, Schema, Value};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Derived from [`START_TIME`]: month number, 1–12.
pub const MONTH: &str = "month";
/// Derived from [`START_TIME`]: title-cased weekday name.
pub const DAY_OF_WEEK: &str = "day_of_week";
/// Derived from [`START_TIME`]: hour of day, 0–23.
pub const HOUR: &str = "hour";

/// Columns read from every city's dataset. Gender and birth year are only published by some
/// cities.
pub fn trip_schema() -> Schema {
    Schema::new(vec![
        Field::new(START_TIME, DataType::Timestamp),
        Field::new(END_TIME, DataType::Utf8),
        Field::new(TRIP_DURATION, DataType::Float64),
        Field::new(START_STATION, DataType::Utf8),
        Field::new(END_STATION, DataType::Utf8),
        Field::new(USER_TYPE, DataType::Utf8),
        Field::optional(GENDER, DataType::Utf8),
        Field::optional(BIRTH_YEAR, DataType::Float64),
    ])
}

/// One city's trips with the derived [`MONTH`], [`DAY_OF_WEEK`] and [`HOUR`] columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    data: DataSet,
}

impl TripTable {
    /// Wrap an ingested dataset, deriving time columns from its start timestamps.
    ///
    /// Fails if the dataset has no [`START_TIME`] column or any row lacks a start timestamp.
    pub fn from_dataset(city: City, mut data: DataSet) -> IngestionResult<Self> {
        derive_time_columns(&mut data)?;
        Ok(Self { city, data })
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn dataset(&self) -> &DataSet {
        &self.data
    }

    pub fn row_count(&self) -> usize {
        self.data.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether this city's dataset carries `column` at all.
    pub fn has_column(&self, column: &str) -> bool {
        self.data.schema.contains(column)
    }

    /// Keep only rows in the selected month and on the selected weekday, preserving order.
    pub fn filter(&self, month: Selection<chrono::Month>, day: Selection<chrono::Weekday>) -> Self {
        let mut data = self.data.clone();
        if let Selection::Only(m) = month {
            data = filter_eq(&data, MONTH, &Value::Int64(i64::from(m.number_from_month())));
        }
        if let Selection::Only(d) = day {
            data = filter_eq(&data, DAY_OF_WEEK, &Value::Utf8(weekday_name(d).to_string()));
        }
        Self {
            city: self.city,
            data,
        }
    }
}

/// Recompute [`MONTH`], [`DAY_OF_WEEK`] and [`HOUR`] from [`START_TIME`].
///
/// Existing derived columns are overwritten, so this can be applied repeatedly.
pub fn derive_time_columns(data: &mut DataSet) -> IngestionResult<()> {
    let idx = data
        .schema
        .index_of(START_TIME)
        .ok_or_else(|| IngestionError::SchemaMismatch {
            message: format!("dataset has no '{START_TIME}' column"),
        })?;

    for (row_idx0, row) in data.rows.iter().enumerate() {
        // Header is row 1.
        let row_num = row_idx0 + 2;
        match row.get(idx) {
            Some(Value::Timestamp(_)) => {}
            Some(Value::Null) | None => {
                return Err(IngestionError::MissingValue {
                    row: row_num,
                    column: START_TIME.to_string(),
                });
            }
            Some(other) => {
                return Err(IngestionError::ParseError {
                    row: row_num,
                    column: START_TIME.to_string(),
                    raw: other.to_string(),
                    message: "expected a timestamp".to_string(),
                });
            }
        }
    }

    let start = |row: &[Value]| match row.get(idx) {
        Some(Value::Timestamp(ts)) => Some(*ts),
        _ => None,
    };
    data.upsert_column(Field::new(MONTH, DataType::Int64), |row| {
        start(row).map_or(Value::Null, |ts| Value::Int64(i64::from(ts.month())))
    });
    data.upsert_column(Field::new(DAY_OF_WEEK, DataType::Utf8), |row| {
        start(row).map_or(Value::Null, |ts| {
            Value::Utf8(weekday_name(ts.weekday()).to_string())
        })
    });
    data.upsert_column(Field::new(HOUR, DataType::Int64), |row| {
        start(row).map_or(Value::Null, |ts| Value::Int64(i64::from(ts.hour())))
    });
    Ok(())
}

/// Load the trips selected by `criteria`.
///
/// The dataset is read through [`ingest_from_path`], so any observer in `options` sees the
/// outcome. A missing file, a malformed row, or an unparsable start time aborts the load.
pub fn load(
    registry: &DatasetRegistry,
    criteria: &FilterCriteria,
    options: &IngestionOptions,
) -> IngestionResult<TripTable> {
    let path = registry.path_for(criteria.city);
    tracing::info!(%criteria, path = %path.display(), "loading trips");

    let data = ingest_from_path(&path, &trip_schema(), options)?;
    let table = TripTable::from_dataset(criteria.city, data)?;
    let filtered = table.filter(criteria.month, criteria.day);

    tracing::info!(
        total_rows = table.row_count(),
        filtered_rows = filtered.row_count(),
        "trips loaded"
    );
    Ok(filtered)
}
