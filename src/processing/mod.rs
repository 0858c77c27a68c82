//! In-memory data transformations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by ingestion.
//! It is purely in-memory and single-threaded.
//!
//! Currently implemented:
//!
//! - [`filter()`] / [`filter_eq()`]: row filtering by predicate or column equality
//! - [`reduce()`]: common reductions (count/sum/min/max/mean)
//! - [`group_counts()`], [`most_common()`], [`mode()`], [`value_counts()`]: grouping with
//!   first-appearance tie-breaks
//!
//! ## Example: filter → reduce → mode
//!
//! ```rust
//! use bikeshare_explorer::processing::{filter_eq, mode, reduce, ReduceOp};
//! use bikeshare_explorer::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("day_of_week", DataType::Utf8),
//!     Field::new("Start Station", DataType::Utf8),
//!     Field::new("Trip Duration", DataType::Float64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Utf8("Monday".into()), Value::Utf8("Canal St".into()), Value::Float64(300.0)],
//!         vec![Value::Utf8("Sunday".into()), Value::Utf8("Lake Shore".into()), Value::Float64(900.0)],
//!         vec![Value::Utf8("Monday".into()), Value::Utf8("Canal St".into()), Value::Null],
//!     ],
//! );
//!
//! let mondays = filter_eq(&ds, "day_of_week", &Value::Utf8("Monday".into()));
//! assert_eq!(mondays.row_count(), 2);
//!
//! // Nulls are ignored.
//! let total = reduce(&mondays, "Trip Duration", ReduceOp::Sum).unwrap();
//! assert_eq!(total, Value::Float64(300.0));
//!
//! assert_eq!(mode(&mondays, "Start Station"), Some(Value::Utf8("Canal St".into())));
//! ```

pub mod filter;
pub mod group;
pub mod reduce;

pub use filter::{filter, filter_eq};
pub use group::{group_counts, mode, most_common, value_counts, GroupCount};
pub use reduce::{reduce, ReduceOp};
