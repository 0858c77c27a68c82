use bikeshare_explorer::ingestion::csv::ingest_csv_from_path;
use bikeshare_explorer::ingestion::timestamp::parse_timestamp;
use bikeshare_explorer::trips::{trip_schema, BIRTH_YEAR, GENDER};
use bikeshare_explorer::types::Value;
use bikeshare_explorer::IngestionError;

#[test]
fn ingest_chicago_fixture_happy_path() {
    let ds = ingest_csv_from_path("tests/fixtures/chicago.csv", &trip_schema()).unwrap();

    assert_eq!(ds.row_count(), 8);
    assert_eq!(
        ds.rows[0],
        vec![
            Value::Timestamp(parse_timestamp("2017-01-01 09:07:57").unwrap()),
            Value::Utf8("2017-01-01 09:20:53".to_string()),
            Value::Float64(776.0),
            Value::Utf8("Canal St & Adams St".to_string()),
            Value::Utf8("Clinton St & Madison St".to_string()),
            Value::Utf8("Subscriber".to_string()),
            Value::Utf8("Male".to_string()),
            Value::Float64(1989.0),
        ]
    );
}

#[test]
fn leading_index_column_is_ignored() {
    let ds = ingest_csv_from_path("tests/fixtures/chicago.csv", &trip_schema()).unwrap();
    assert_eq!(ds.schema.fields.len(), trip_schema().fields.len());
    assert!(!ds.schema.contains(""));
}

#[test]
fn empty_optional_cells_are_null() {
    let ds = ingest_csv_from_path("tests/fixtures/chicago.csv", &trip_schema()).unwrap();
    let gender = ds.schema.index_of(GENDER).unwrap();
    let birth_year = ds.schema.index_of(BIRTH_YEAR).unwrap();
    assert_eq!(ds.rows[2][gender], Value::Null);
    assert_eq!(ds.rows[2][birth_year], Value::Null);
}

#[test]
fn washington_fixture_has_no_gender_or_birth_year() {
    let ds = ingest_csv_from_path("tests/fixtures/washington.csv", &trip_schema()).unwrap();
    assert_eq!(ds.row_count(), 4);
    assert!(!ds.schema.contains(GENDER));
    assert!(!ds.schema.contains(BIRTH_YEAR));
    assert_eq!(ds.rows[0][2], Value::Float64(489.066));
}

#[test]
fn missing_required_column_is_a_schema_mismatch() {
    let err = ingest_csv_from_path("tests/fixtures/missing_column.csv", &trip_schema()).unwrap_err();
    match err {
        IngestionError::SchemaMismatch { message } => {
            assert!(message.contains("missing required column 'Trip Duration'"));
        }
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
}

#[test]
fn unparsable_start_time_reports_row_and_column() {
    let err = ingest_csv_from_path("tests/fixtures/bad_timestamp.csv", &trip_schema()).unwrap_err();
    match err {
        IngestionError::ParseError { row, column, raw, .. } => {
            assert_eq!(row, 3);
            assert_eq!(column, "Start Time");
            assert_eq!(raw, "yesterday morning");
        }
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ingest_csv_from_path("tests/fixtures/does_not_exist.csv", &trip_schema()).unwrap_err();
    // csv wraps the open failure in its own error type.
    let is_io = match &err {
        IngestionError::Io(_) => true,
        IngestionError::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(_)),
        _ => false,
    };
    assert!(is_io, "unexpected error: {err:?}");
}
