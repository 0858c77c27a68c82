//! Grouping, mode, and value counts.
//!
//! Groups are reported in the order their key first appears in the dataset. Every tie-break in
//! this module falls back to that order, so results are reproducible for a given row order.
//! Rows where any grouping column is null are skipped.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::types::{DataSet, Value};

/// One group produced by [`group_counts`].
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCount {
    /// Grouping column values, in the order the columns were requested.
    pub key: Vec<Value>,
    /// Number of rows in the group.
    pub count: usize,
}

/// Hashable projection of a non-null [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyPart {
    Int64(i64),
    Float64(u64),
    Utf8(String),
    Timestamp(NaiveDateTime),
}

impl KeyPart {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Int64(v) => Some(Self::Int64(*v)),
            // -0.0 and 0.0 share a group.
            Value::Float64(v) => Some(Self::Float64((v + 0.0).to_bits())),
            Value::Utf8(s) => Some(Self::Utf8(s.clone())),
            Value::Timestamp(ts) => Some(Self::Timestamp(*ts)),
        }
    }
}

/// Count rows per distinct combination of `columns`, in first-appearance order.
///
/// Returns `None` if any column does not exist in the schema.
pub fn group_counts(dataset: &DataSet, columns: &[&str]) -> Option<Vec<GroupCount>> {
    let idxs = columns
        .iter()
        .map(|c| dataset.schema.index_of(c))
        .collect::<Option<Vec<_>>>()?;

    let mut slots: HashMap<Vec<KeyPart>, usize> = HashMap::new();
    let mut groups: Vec<GroupCount> = Vec::new();

    for row in &dataset.rows {
        let parts = idxs
            .iter()
            .map(|&i| row.get(i).and_then(KeyPart::from_value))
            .collect::<Option<Vec<_>>>();
        let Some(parts) = parts else {
            continue;
        };

        match slots.get(&parts) {
            Some(&slot) => groups[slot].count += 1,
            None => {
                slots.insert(parts, groups.len());
                groups.push(GroupCount {
                    key: idxs.iter().map(|&i| row[i].clone()).collect(),
                    count: 1,
                });
            }
        }
    }

    Some(groups)
}

/// The most frequent combination of `columns`, ties going to the first encountered.
///
/// Returns `None` if a column is missing, `Some(None)` if no row has non-null values for all of
/// them (e.g. the dataset is empty).
pub fn most_common(dataset: &DataSet, columns: &[&str]) -> Option<Option<GroupCount>> {
    let groups = group_counts(dataset, columns)?;
    let mut best: Option<GroupCount> = None;
    for group in groups {
        // Strictly greater keeps the earlier group on ties.
        if best.as_ref().is_none_or(|b| group.count > b.count) {
            best = Some(group);
        }
    }
    Some(best)
}

/// Mode of a single column.
///
/// - Returns `None` if `column` does not exist in the schema.
/// - Returns `Some(Value::Null)` if there are no non-null values.
pub fn mode(dataset: &DataSet, column: &str) -> Option<Value> {
    let best = most_common(dataset, &[column])?;
    Some(
        best.and_then(|g| g.key.into_iter().next())
            .unwrap_or(Value::Null),
    )
}

/// Non-null value counts of a column, sorted by descending count.
///
/// Equal counts keep first-appearance order. Returns `None` if `column` does not exist.
pub fn value_counts(dataset: &DataSet, column: &str) -> Option<Vec<(Value, usize)>> {
    let mut groups = group_counts(dataset, &[column])?;
    // `sort_by` is stable.
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    Some(
        groups
            .into_iter()
            .filter_map(|g| g.key.into_iter().next().map(|v| (v, g.count)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::{group_counts, mode, most_common, value_counts};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn utf8(s: &str) -> Value {
        Value::Utf8(s.to_string())
    }

    fn stations() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("Start Station", DataType::Utf8),
            Field::new("End Station", DataType::Utf8),
        ]);
        let rows = vec![
            vec![utf8("B"), utf8("X")],
            vec![utf8("A"), utf8("Y")],
            vec![utf8("A"), utf8("X")],
            vec![utf8("B"), utf8("Y")],
            vec![Value::Null, utf8("Y")],
        ];
        DataSet::new(schema, rows)
    }

    #[test]
    fn mode_breaks_ties_by_first_appearance() {
        let ds = stations();
        assert_eq!(mode(&ds, "Start Station"), Some(utf8("B")));
        // A null start station does not hide the row from the end-station count.
        assert_eq!(mode(&ds, "End Station"), Some(utf8("Y")));
    }

    #[test]
    fn mode_of_empty_is_null_and_missing_column_is_none() {
        let ds = stations().filter_rows(|_| false);
        assert_eq!(mode(&ds, "Start Station"), Some(Value::Null));
        assert_eq!(mode(&ds, "Gender"), None);
    }

    #[test]
    fn group_counts_skip_null_keys_and_keep_first_appearance_order() {
        let groups = group_counts(&stations(), &["Start Station", "End Station"]).unwrap();
        let keys: Vec<_> = groups.iter().map(|g| g.key.clone()).collect();
        assert_eq!(
            keys,
            vec![
                vec![utf8("B"), utf8("X")],
                vec![utf8("A"), utf8("Y")],
                vec![utf8("A"), utf8("X")],
                vec![utf8("B"), utf8("Y")],
            ]
        );
    }

    #[test]
    fn most_common_pair_prefers_first_on_tie() {
        let best = most_common(&stations(), &["Start Station", "End Station"])
            .unwrap()
            .unwrap();
        assert_eq!(best.key, vec![utf8("B"), utf8("X")]);
        assert_eq!(best.count, 1);
    }

    #[test]
    fn value_counts_sorted_descending_stable() {
        let schema = Schema::new(vec![Field::new("User Type", DataType::Utf8)]);
        let rows = ["Customer", "Subscriber", "Dependent", "Subscriber", "Dependent", "Subscriber"]
            .into_iter()
            .map(|s| vec![utf8(s)])
            .collect();
        let ds = DataSet::new(schema, rows);
        assert_eq!(
            value_counts(&ds, "User Type").unwrap(),
            vec![
                (utf8("Subscriber"), 3),
                (utf8("Dependent"), 2),
                (utf8("Customer"), 1),
            ]
        );
    }

    #[test]
    fn float_keys_group_by_value() {
        let schema = Schema::new(vec![Field::new("Birth Year", DataType::Float64)]);
        let rows = vec![
            vec![Value::Float64(1990.0)],
            vec![Value::Float64(1985.0)],
            vec![Value::Float64(1985.0)],
            vec![Value::Null],
        ];
        let ds = DataSet::new(schema, rows);
        assert_eq!(mode(&ds, "Birth Year"), Some(Value::Float64(1985.0)));
    }
}
