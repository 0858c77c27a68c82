use std::fmt;

use serde::Serialize;

use crate::processing::{mode, reduce, value_counts, ReduceOp};
use crate::trips::{TripTable, BIRTH_YEAR, GENDER, USER_TYPE};
use crate::types::Value;

use super::{ColumnStat, NO_DATA};

/// A category value and its trip count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Earliest, most recent and most common birth year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// User type, gender and birth-year breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    /// Descending by count.
    pub user_types: Vec<CategoryCount>,
    pub genders: ColumnStat<Vec<CategoryCount>>,
    pub birth_years: ColumnStat<BirthYearStats>,
}

impl UserStats {
    pub fn compute(table: &TripTable) -> Self {
        let genders = if table.has_column(GENDER) {
            match category_counts(table, GENDER) {
                counts if counts.is_empty() => ColumnStat::NoData,
                counts => ColumnStat::Available(counts),
            }
        } else {
            ColumnStat::NotAvailable
        };

        let birth_years = if table.has_column(BIRTH_YEAR) {
            birth_year_stats(table).map_or(ColumnStat::NoData, ColumnStat::Available)
        } else {
            ColumnStat::NotAvailable
        };

        Self {
            user_types: category_counts(table, USER_TYPE),
            genders,
            birth_years,
        }
    }
}

fn category_counts(table: &TripTable, column: &str) -> Vec<CategoryCount> {
    value_counts(table.dataset(), column)
        .unwrap_or_default()
        .into_iter()
        .map(|(value, count)| CategoryCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

fn birth_year_stats(table: &TripTable) -> Option<BirthYearStats> {
    let ds = table.dataset();
    // Birth years are published as floats (e.g. 1989.0).
    let year = |v: Option<Value>| v.as_ref().and_then(Value::as_f64).map(|y| y.round() as i64);
    Some(BirthYearStats {
        earliest: year(reduce(ds, BIRTH_YEAR, ReduceOp::Min))?,
        most_recent: year(reduce(ds, BIRTH_YEAR, ReduceOp::Max))?,
        most_common: year(mode(ds, BIRTH_YEAR))?,
    })
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[CategoryCount]) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "  {NO_DATA}");
    }
    for c in counts {
        writeln!(f, "  {}: {}", c.value, c.count)?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User type counts:")?;
        write_counts(f, &self.user_types)?;

        match &self.genders {
            ColumnStat::Available(counts) => {
                writeln!(f, "User gender counts:")?;
                write_counts(f, counts)?;
            }
            ColumnStat::NoData => writeln!(f, "User gender counts: {NO_DATA}")?,
            ColumnStat::NotAvailable => writeln!(f, "User gender data not available")?,
        }

        writeln!(f)?;
        match &self.birth_years {
            ColumnStat::Available(years) => {
                writeln!(f, "Earliest year of birth: {}", years.earliest)?;
                writeln!(f, "Most recent year of birth: {}", years.most_recent)?;
                writeln!(f, "Most common year of birth: {}", years.most_common)
            }
            ColumnStat::NoData => writeln!(f, "Year of birth: {NO_DATA}"),
            ColumnStat::NotAvailable => writeln!(f, "User birth year data not available"),
        }
    }
}
