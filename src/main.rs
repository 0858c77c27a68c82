//! CLI entry point for the bike-share explorer.
//!
//! Without `--city` the explorer runs interactively on stdin/stdout. With `--city` it loads
//! once, prints the reports, and exits.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use bikeshare_explorer::console::Console;
use bikeshare_explorer::filters::{parse_city, parse_day, parse_month, FilterCriteria, Selection};
use bikeshare_explorer::ingestion::{IngestionOptions, IngestionSeverity, TracingObserver};
use bikeshare_explorer::registry::{City, DatasetRegistry};
use bikeshare_explorer::session::Session;
use bikeshare_explorer::reports::{self, TripReports};
use bikeshare_explorer::SessionError;
use chrono::{Month, Weekday};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bikeshare-explorer")]
#[command(about = "Explore US bike-share trip data", long_about = None)]
struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Run once for this city instead of prompting (chicago, "new york city", washington)
    #[arg(long, value_parser = city_arg)]
    city: Option<City>,

    /// Month filter for --city (all, january ... june)
    #[arg(long, value_parser = month_arg, default_value = "all", requires = "city")]
    month: Selection<Month>,

    /// Weekday filter for --city (all, monday ... sunday)
    #[arg(long, value_parser = day_arg, default_value = "all", requires = "city")]
    day: Selection<Weekday>,

    /// Read the city's trips from this file (.csv, .json or .ndjson)
    #[arg(long, requires = "city")]
    source: Option<PathBuf>,

    /// Print the reports of a --city run as JSON
    #[arg(long, default_value_t = false, requires = "city")]
    json: bool,
}

fn city_arg(s: &str) -> Result<City, String> {
    parse_city(s).ok_or_else(|| format!("unknown city '{s}'"))
}

fn month_arg(s: &str) -> Result<Selection<Month>, String> {
    parse_month(s).ok_or_else(|| format!("unsupported month '{s}'"))
}

fn day_arg(s: &str) -> Result<Selection<Weekday>, String> {
    parse_day(s).ok_or_else(|| format!("unknown weekday '{s}'"))
}

fn main() -> ExitCode {
    // Logs go to stderr so prompts and reports on stdout stay readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SessionError> {
    let mut registry = DatasetRegistry::new(&cli.data_dir);
    if let (Some(city), Some(source)) = (cli.city, cli.source.as_ref()) {
        registry = registry.with_source(city, source);
    }

    let options = IngestionOptions {
        observer: Some(Arc::new(TracingObserver)),
        alert_at_or_above: IngestionSeverity::Critical,
        ..Default::default()
    };
    let session = Session::new(&registry, &options);

    let Some(city) = cli.city else {
        return session.run(&mut Console::stdio());
    };

    let criteria = FilterCriteria {
        city,
        month: cli.month,
        day: cli.day,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let table = session.load(&criteria)?;
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &TripReports::compute(&table))?;
        writeln!(out)?;
    } else {
        writeln!(out, "Trips for {criteria}: {}", table.row_count())?;
        reports::render(&mut out, &table)?;
    }
    Ok(())
}
