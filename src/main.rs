/// CLI entry point: evaluate one live reading.
///
/// Usage:
///   aquamon_service <ph> <tds> <turbidity> <temperature> [--config <path>]
///
/// Flow: parse the live reading (fail fast on non-numeric input), push it
/// to the remote store best-effort, fetch the historical snapshot with an
/// empty fallback, then build and print the report. Sync and fetch
/// problems are warnings; only unusable live input aborts.

use std::process::ExitCode;

use aquamon_service::config::Config;
use aquamon_service::ingest::sheet::{HistorySnapshot, SheetClient};
use aquamon_service::logging::{self, LogLevel, Subsystem};
use aquamon_service::model::{Reading, ReadingError};
use aquamon_service::report::build_report;
use aquamon_service::sync::SyncClient;

const DEFAULT_CONFIG_PATH: &str = "aquamon.toml";

fn main() -> ExitCode {
    // .env is optional; absence is not an error.
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (values, config_path) = match split_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("usage: aquamon_service <ph> <tds> <turbidity> <temperature> [--config <path>]");
            return ExitCode::from(2);
        }
    };

    // Invalid live input is the one fatal condition, raised before any
    // computation or I/O.
    let reading = match parse_reading(&values) {
        Ok(reading) => reading,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(1);
        }
    };

    logging::init_logger(
        LogLevel::from_config(&config.log_level),
        config.log_file.as_deref(),
    );
    logging::info(
        Subsystem::System,
        &format!(
            "evaluating reading ph={} tds={} turbidity={} temperature={}",
            reading.ph, reading.tds, reading.turbidity, reading.temperature
        ),
    );

    // Best-effort push; the report is computed regardless.
    let sync_client = SyncClient::new(config.script_url.clone(), config.sync_timeout());
    let outcome = sync_client.push_reading(&reading);
    logging::log_sync_outcome(Subsystem::Sync, &outcome);

    // History fetch degrades to zero history on any failure.
    let sheet_client = SheetClient::new(config.csv_url.clone(), config.fetch_timeout());
    let snapshot = match sheet_client.fetch_history() {
        Ok(snapshot) => {
            logging::info(
                Subsystem::Sheet,
                &format!("history snapshot loaded ({} rows)", snapshot.len()),
            );
            snapshot
        }
        Err(e) => {
            logging::log_sheet_failure("history fetch", &e);
            HistorySnapshot::empty()
        }
    };

    let report = build_report(&reading, &snapshot);
    println!("{}", report);

    ExitCode::SUCCESS
}

/// Separates positional values from the optional `--config <path>` flag.
fn split_args(args: &[String]) -> Result<(Vec<String>, String), String> {
    let mut values = Vec::new();
    let mut config_path = DEFAULT_CONFIG_PATH.to_string();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--config" {
            config_path = args
                .get(i + 1)
                .cloned()
                .ok_or_else(|| "--config requires a path".to_string())?;
            i += 2;
        } else {
            values.push(args[i].clone());
            i += 1;
        }
    }
    if values.len() != 4 {
        return Err(format!("expected 4 reading values, got {}", values.len()));
    }
    Ok((values, config_path))
}

/// Coerces the four positional arguments into a `Reading`.
fn parse_reading(values: &[String]) -> Result<Reading, ReadingError> {
    let mut parsed = [0.0_f64; 4];
    for (i, (name, raw)) in ["ph", "tds", "turbidity", "temperature"]
        .iter()
        .zip(values)
        .enumerate()
    {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ReadingError::Invalid(format!("{} value '{}' is not numeric", name, raw)))?;
        if !value.is_finite() {
            return Err(ReadingError::Invalid(format!(
                "{} value '{}' is not finite",
                name, raw
            )));
        }
        parsed[i] = value;
    }
    Ok(Reading {
        ph: parsed[0],
        tds: parsed[1],
        turbidity: parsed[2],
        temperature: parsed[3],
    })
}
