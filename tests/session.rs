use std::io::Cursor;

use bikeshare_explorer::console::Console;
use bikeshare_explorer::ingestion::IngestionOptions;
use bikeshare_explorer::registry::DatasetRegistry;
use bikeshare_explorer::session::Session;
use bikeshare_explorer::{IngestionError, SessionError, SessionResult};

fn run_script(data_dir: &str, input: &str) -> (SessionResult<()>, String) {
    let registry = DatasetRegistry::new(data_dir);
    let options = IngestionOptions::default();
    let session = Session::new(&registry, &options);

    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let result = session.run(&mut console);
    (result, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn one_iteration_with_raw_data() {
    // city, month, day, raw data, restart
    let (result, out) = run_script("tests/fixtures", "chicago\njune\nall\nyes\nno\n");
    result.unwrap();

    assert!(out.starts_with("Hello! Let's explore some US bikeshare data!\n"));
    assert!(out.contains("The most common month: June."));
    assert!(out.contains("Total travel time: 2580.0 seconds"));
    assert!(out.contains("Raw data [0, 3]:"));
    // Three June rows fit on one page, so there is no "more" prompt.
    assert!(!out.contains("see more 5 lines"));
    assert_eq!(out.matches("Would you like to restart?").count(), 1);
}

#[test]
fn invalid_answers_are_reprompted_and_defaults_apply() {
    let (result, out) = run_script("tests/fixtures", "boston\n\njuly\n\nsomeday\n\nno\nno\n");
    result.unwrap();

    assert_eq!(out.matches("Which city would you like to investigate").count(), 2);
    assert_eq!(out.matches("Which month").count(), 2);
    assert_eq!(out.matches("Which day of the week").count(), 2);
    // Defaults: chicago, all months, all days.
    assert!(out.contains("Subscriber: 5"));
}

#[test]
fn restart_runs_another_iteration() {
    let input = "washington\nall\nall\nno\nYES\nnew york city\nmay\nall\nno\nno\n";
    let (result, out) = run_script("tests/fixtures", input);
    result.unwrap();

    assert_eq!(out.matches("Hello! Let's explore some US bikeshare data!").count(), 2);
    assert!(out.contains("User gender data not available"));
    assert!(out.contains("User gender counts:"));
}

#[test]
fn closed_input_at_restart_ends_the_session() {
    let (result, out) = run_script("tests/fixtures", "washington\nall\nall\nno\n");
    result.unwrap();
    assert!(out.contains("Would you like to restart?"));
}

#[test]
fn closed_input_mid_prompt_is_reported() {
    let (result, _) = run_script("tests/fixtures", "chicago\n");
    assert!(matches!(result, Err(SessionError::InputClosed)));
}

#[test]
fn missing_dataset_halts_with_data_unavailable() {
    let (result, out) = run_script("tests/fixtures/nowhere", "chicago\nall\nall\n");
    match result {
        Err(SessionError::DataUnavailable(IngestionError::Io(_) | IngestionError::Csv(_))) => {}
        other => panic!("expected DataUnavailable, got {other:?}"),
    }
    assert!(!out.contains("Calculating"));
}
