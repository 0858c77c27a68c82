use bikeshare_explorer::filters::{FilterCriteria, Selection};
use bikeshare_explorer::ingestion::timestamp::parse_timestamp;
use bikeshare_explorer::ingestion::IngestionOptions;
use bikeshare_explorer::registry::{City, DatasetRegistry};
use bikeshare_explorer::reports::{
    self, BirthYearStats, CategoryCount, ColumnStat, DurationStats, StationStats, TimeStats, TripReports,
    UserStats,
};
use bikeshare_explorer::trips::{self, TripTable, END_STATION, START_STATION, START_TIME};
use bikeshare_explorer::types::{DataSet, DataType, Field, Schema, Value};

fn load(city: City, month: Selection<chrono::Month>) -> TripTable {
    let criteria = FilterCriteria {
        month,
        ..FilterCriteria::all(city)
    };
    trips::load(&DatasetRegistry::new("tests/fixtures"), &criteria, &IngestionOptions::default()).unwrap()
}

fn counts(pairs: &[(&str, usize)]) -> Vec<CategoryCount> {
    pairs
        .iter()
        .map(|(value, count)| CategoryCount {
            value: value.to_string(),
            count: *count,
        })
        .collect()
}

fn station_table(pairs: &[(&str, &str)]) -> TripTable {
    let schema = Schema::new(vec![
        Field::new(START_TIME, DataType::Timestamp),
        Field::new(START_STATION, DataType::Utf8),
        Field::new(END_STATION, DataType::Utf8),
    ]);
    let start = parse_timestamp("2017-01-02 08:00:00").unwrap();
    let rows = pairs
        .iter()
        .map(|(s, e)| {
            vec![
                Value::Timestamp(start),
                Value::Utf8(s.to_string()),
                Value::Utf8(e.to_string()),
            ]
        })
        .collect();
    TripTable::from_dataset(City::Chicago, DataSet::new(schema, rows)).unwrap()
}

#[test]
fn time_stats_for_chicago() {
    let stats = TimeStats::compute(&load(City::Chicago, Selection::All));
    assert_eq!(stats.most_common_month.as_deref(), Some("June"));
    assert_eq!(stats.most_common_day.as_deref(), Some("Monday"));
    assert_eq!(stats.most_common_hour, Some(17));
    assert!(stats.to_string().contains("The most common month: June."));
}

#[test]
fn station_ties_go_to_first_appearance() {
    let table = station_table(&[("A", "X"), ("B", "Y"), ("B", "Y"), ("A", "X")]);
    let stats = StationStats::compute(&table);
    assert_eq!(stats.most_common_start.as_deref(), Some("A"));
    assert_eq!(stats.most_common_end.as_deref(), Some("X"));
    let trip = stats.most_common_trip.unwrap();
    assert_eq!((trip.start.as_str(), trip.end.as_str(), trip.trips), ("A", "X", 2));
}

#[test]
fn station_stats_for_chicago() {
    let stats = StationStats::compute(&load(City::Chicago, Selection::All));
    assert_eq!(stats.most_common_start.as_deref(), Some("Canal St & Adams St"));
    // Tied with Lake Shore Dr & Monroe St, which appears later.
    assert_eq!(stats.most_common_end.as_deref(), Some("Clinton St & Madison St"));
    assert!(stats
        .to_string()
        .contains("The most common trip: Canal St & Adams St -> Clinton St & Madison St (3 trips)."));
}

#[test]
fn duration_totals_and_mean() {
    let stats = DurationStats::compute(&load(City::Chicago, Selection::All));
    assert_eq!(stats.total_seconds, Some(5036.0));
    assert_eq!(stats.mean_seconds, Some(629.5));
    assert_eq!(
        stats.to_string(),
        "Total travel time: 5036.0 seconds\nMean travel time: 629.5 seconds\n"
    );
}

#[test]
fn empty_table_reports_no_data() {
    let table = load(City::Washington, Selection::Only(chrono::Month::February));
    assert!(table.is_empty());

    let duration = DurationStats::compute(&table);
    assert_eq!(duration.total_seconds, None);
    assert_eq!(duration.mean_seconds, None);
    assert_eq!(
        duration.to_string(),
        "Total travel time: no data\nMean travel time: no data\n"
    );

    let time = TimeStats::compute(&table);
    assert!(time.to_string().contains("The most common hour: no data."));
    let stations = StationStats::compute(&table);
    assert!(stations.most_common_trip.is_none());
}

#[test]
fn user_stats_for_chicago() {
    let stats = UserStats::compute(&load(City::Chicago, Selection::All));
    assert_eq!(
        stats.user_types,
        counts(&[("Subscriber", 5), ("Customer", 2), ("Dependent", 1)])
    );
    assert_eq!(stats.genders, ColumnStat::Available(counts(&[("Male", 4), ("Female", 2)])));
    assert_eq!(
        stats.birth_years,
        ColumnStat::Available(BirthYearStats {
            earliest: 1975,
            most_recent: 2001,
            most_common: 1989,
        })
    );
    let text = stats.to_string();
    assert!(text.contains("  Subscriber: 5\n"));
    assert!(text.contains("Most common year of birth: 1989"));
}

#[test]
fn user_stats_without_gender_column_say_not_available() {
    let stats = UserStats::compute(&load(City::Washington, Selection::All));
    assert_eq!(stats.genders, ColumnStat::NotAvailable);
    assert_eq!(stats.birth_years, ColumnStat::NotAvailable);

    let text = stats.to_string();
    assert!(text.contains("User gender data not available"));
    assert!(text.contains("User birth year data not available"));
    assert!(!text.contains("User gender counts"));
}

#[test]
fn present_but_empty_optional_columns_say_no_data() {
    // February holds one Chicago trip, with blank gender and birth year.
    let stats = UserStats::compute(&load(City::Chicago, Selection::Only(chrono::Month::February)));
    assert_eq!(stats.genders, ColumnStat::NoData);
    assert_eq!(stats.birth_years, ColumnStat::NoData);
    assert!(stats.to_string().contains("User gender counts: no data"));
}

#[test]
fn render_prints_every_report_with_timing() {
    let table = load(City::Chicago, Selection::Only(chrono::Month::June));
    let mut out = Vec::new();
    let rendered = reports::render(&mut out, &table).unwrap();
    let text = String::from_utf8(out).unwrap();

    for heading in [
        "Calculating The Most Frequent Times of Travel...",
        "Calculating The Most Popular Stations and Trip...",
        "Calculating Trip Duration...",
        "Calculating User Stats...",
    ] {
        assert!(text.contains(heading), "missing heading {heading}");
    }
    assert_eq!(text.matches("This took ").count(), 4);
    assert_eq!(rendered, TripReports::compute(&table));
    assert_eq!(rendered.rows, 3);
}

#[test]
fn reports_serialize_column_status() {
    let reports = TripReports::compute(&load(City::Washington, Selection::All));
    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json["users"]["genders"]["status"], "not_available");
    assert_eq!(json["rows"], 4);
    assert_eq!(json["stations"]["most_common_trip"]["trips"], 1);
}
