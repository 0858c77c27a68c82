//! Row filtering for [`crate::types::DataSet`].

use crate::types::{DataSet, Value};

/// Returns a new [`DataSet`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_rows`].
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&[Value]) -> bool,
{
    dataset.filter_rows(predicate)
}

/// Keep rows whose `column` equals `expected`.
///
/// If the column does not exist, no row matches.
pub fn filter_eq(dataset: &DataSet, column: &str, expected: &Value) -> DataSet {
    match dataset.schema.index_of(column) {
        Some(idx) => dataset.filter_rows(|row| row.get(idx) == Some(expected)),
        None => dataset.filter_rows(|_| false),
    }
}

#[cfg(test)]
mod tests {
    use super::{filter, filter_eq};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("month", DataType::Int64),
            Field::new("day_of_week", DataType::Utf8),
            Field::new("Start Station", DataType::Utf8),
        ]);

        let rows = vec![
            vec![Value::Int64(1), Value::Utf8("Monday".to_string()), Value::Utf8("a".to_string())],
            vec![Value::Int64(2), Value::Utf8("Sunday".to_string()), Value::Utf8("b".to_string())],
            vec![Value::Int64(1), Value::Utf8("Sunday".to_string()), Value::Utf8("c".to_string())],
        ];

        DataSet::new(schema, rows)
    }

    #[test]
    fn filter_rows_by_numeric_predicate() {
        let ds = sample_dataset();
        let month_idx = ds.schema.index_of("month").unwrap();

        let out = ds.filter_rows(|row| matches!(row.get(month_idx), Some(Value::Int64(v)) if *v > 1));

        assert_eq!(out.schema, ds.schema);
        assert_eq!(out.row_count(), 1);
        assert_eq!(out.rows[0][2], Value::Utf8("b".to_string()));
        // Original unchanged
        assert_eq!(ds.row_count(), 3);
    }

    #[test]
    fn filter_eq_preserves_row_order() {
        let ds = sample_dataset();
        let out = filter_eq(&ds, "day_of_week", &Value::Utf8("Sunday".to_string()));
        let stations: Vec<_> = out.column("Start Station").unwrap().cloned().collect();
        assert_eq!(
            stations,
            vec![Value::Utf8("b".to_string()), Value::Utf8("c".to_string())]
        );
    }

    #[test]
    fn filter_eq_on_missing_column_is_empty() {
        let ds = sample_dataset();
        let out = filter_eq(&ds, "Gender", &Value::Utf8("Male".to_string()));
        assert_eq!(out.schema, ds.schema);
        assert!(out.is_empty());
    }

    #[test]
    fn filter_rows_can_return_empty_dataset() {
        let ds = sample_dataset();
        let out = filter(&ds, |_| false);
        assert_eq!(out.schema, ds.schema);
        assert!(out.rows.is_empty());
    }
}
