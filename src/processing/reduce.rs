//! Reduction operations for [`crate::types::DataSet`].

use crate::types::{DataSet, DataType, Value};

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all rows (including nulls).
    Count,
    /// Sum numeric values, ignoring nulls.
    Sum,
    /// Minimum numeric value, ignoring nulls.
    Min,
    /// Maximum numeric value, ignoring nulls.
    Max,
    /// Arithmetic mean of numeric values, ignoring nulls. Always `Float64`.
    Mean,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// - Returns `None` if `column` does not exist in the schema.
/// - For `Sum`/`Min`/`Max`/`Mean`, returns `Some(Value::Null)` if there are no non-null values.
/// - For `Count`, always returns `Some(Value::Int64(row_count))`.
pub fn reduce(dataset: &DataSet, column: &str, op: ReduceOp) -> Option<Value> {
    let idx = dataset.schema.index_of(column)?;

    match op {
        ReduceOp::Count => Some(Value::Int64(dataset.row_count() as i64)),
        ReduceOp::Mean => Some(mean(dataset, idx)),
        ReduceOp::Sum | ReduceOp::Min | ReduceOp::Max => match dataset.schema.fields.get(idx) {
            Some(field) => reduce_numeric_typed(dataset, idx, field.data_type.clone(), op),
            None => None,
        },
    }
}

fn mean(dataset: &DataSet, idx: usize) -> Value {
    let (sum, n) = dataset.reduce_rows((0.0_f64, 0usize), |(sum, n), row| {
        match row.get(idx).and_then(Value::as_f64) {
            Some(v) => (sum + v, n + 1),
            None => (sum, n),
        }
    });
    if n == 0 {
        Value::Null
    } else {
        Value::Float64(sum / n as f64)
    }
}

fn reduce_numeric_typed(
    dataset: &DataSet,
    idx: usize,
    data_type: DataType,
    op: ReduceOp,
) -> Option<Value> {
    match data_type {
        DataType::Int64 => {
            let mut acc: Option<i64> = None;
            for row in &dataset.rows {
                if let Some(Value::Int64(v)) = row.get(idx) {
                    acc = Some(match acc {
                        Some(a) => combine(op, a, *v),
                        None => *v,
                    });
                }
            }
            Some(acc.map(Value::Int64).unwrap_or(Value::Null))
        }
        DataType::Float64 => {
            let mut acc: Option<f64> = None;
            for row in &dataset.rows {
                if let Some(Value::Float64(v)) = row.get(idx) {
                    acc = Some(match acc {
                        Some(a) => combine_f64(op, a, *v),
                        None => *v,
                    });
                }
            }
            Some(acc.map(Value::Float64).unwrap_or(Value::Null))
        }
        _ => Some(Value::Null),
    }
}

fn combine(op: ReduceOp, a: i64, v: i64) -> i64 {
    match op {
        ReduceOp::Sum => a + v,
        ReduceOp::Min => a.min(v),
        ReduceOp::Max => a.max(v),
        _ => unreachable!("non-numeric op handled earlier"),
    }
}

fn combine_f64(op: ReduceOp, a: f64, v: f64) -> f64 {
    match op {
        ReduceOp::Sum => a + v,
        ReduceOp::Min => a.min(v),
        ReduceOp::Max => a.max(v),
        _ => unreachable!("non-numeric op handled earlier"),
    }
}
