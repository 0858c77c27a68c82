//! `bikeshare-explorer` loads bike-share trip logs into an in-memory [`types::DataSet`],
//! filters them by month and weekday, and reports descriptive statistics.
//!
//! The interactive entrypoint is [`session::Session::run`]; the building blocks are public so
//! they can be driven directly (and are, by the batch mode of the binary).
//!
//! ## Pipeline
//!
//! 1. [`filters::collect`] prompts for a city, month and weekday ([`filters::FilterCriteria`]).
//! 2. [`trips::load`] resolves the city through a [`registry::DatasetRegistry`], ingests it with
//!    [`ingestion::ingest_from_path`], derives `month`/`day_of_week`/`hour` from `Start Time`,
//!    and applies the filters.
//! 3. [`reports`] computes the time-of-travel, station, duration and user statistics.
//! 4. [`pager::display`] pages through the raw rows, five at a time.
//!
//! ## Datasets
//!
//! Each city is one CSV file with headers (`chicago.csv`, `new_york_city.csv`,
//! `washington.csv`). Required columns: `Start Time`, `End Time`, `Trip Duration`,
//! `Start Station`, `End Station`, `User Type`. `Gender` and `Birth Year` are read when present.
//! Empty cells become [`types::Value::Null`] and are skipped by every statistic. A JSON array or
//! NDJSON file with the same keys can stand in for any city via
//! [`registry::DatasetRegistry::with_source`].
//!
//! ## Example
//!
//! ```no_run
//! use bikeshare_explorer::filters::{FilterCriteria, Selection};
//! use bikeshare_explorer::ingestion::IngestionOptions;
//! use bikeshare_explorer::registry::{City, DatasetRegistry};
//! use bikeshare_explorer::reports::TripReports;
//! use bikeshare_explorer::trips;
//!
//! # fn main() -> Result<(), bikeshare_explorer::IngestionError> {
//! let registry = DatasetRegistry::new("data");
//! let criteria = FilterCriteria {
//!     city: City::Chicago,
//!     month: Selection::Only(chrono::Month::June),
//!     day: Selection::All,
//! };
//! let table = trips::load(&registry, &criteria, &IngestionOptions::default())?;
//! let reports = TripReports::compute(&table);
//! print!("{}", reports.stations);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: city → dataset file mapping
//! - [`types`]: schema + in-memory dataset types
//! - [`ingestion`]: CSV/JSON ingestion with observer hooks
//! - [`processing`]: filter, reduce, grouping and mode
//! - [`trips`]: trip schema, derived time columns, load + filter
//! - [`reports`]: the four statistics reports
//! - [`console`], [`filters`], [`pager`], [`session`]: the interactive layer
//! - [`error`]: error types

pub mod console;
pub mod error;
pub mod filters;
pub mod ingestion;
pub mod pager;
pub mod processing;
pub mod registry;
pub mod reports;
pub mod session;
pub mod trips;
pub mod types;

pub use error::{IngestionError, IngestionResult, SessionError, SessionResult};
