use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Convenience result type for the interactive session.
pub type SessionResult<T> = Result<T, SessionError>;

/// Error type returned by ingestion and trip-loading functions.
///
/// A single error enum shared across CSV and JSON ingestion and the derived-column step.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not conform to the provided schema (missing required fields/columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A column that every row must carry was empty.
    #[error("missing value at row {row} column '{column}'")]
    MissingValue { row: usize, column: String },
}

/// Error type returned by the interactive session and batch runs.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The selected dataset could not be loaded; statistics are not produced.
    #[error("data unavailable: {0}")]
    DataUnavailable(#[from] IngestionError),

    /// Reading from or writing to the console failed.
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),

    /// The input stream ended while a prompt was waiting for an answer.
    #[error("input closed before a valid answer was given")]
    InputClosed,

    /// Report serialization failed.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
