/// Synthetic telemetry generator.
///
/// Stands in for the field sensors: produces a random reading inside each
/// parameter's plausible range at a fixed interval and pushes it to the
/// remote store. Fire-and-forget — a failed push is logged and the loop
/// continues, because readings are periodic and redundant, not one-off
/// commands.
///
/// Usage:
///   simulator [--config <path>] [--interval-secs <n>]

use std::process::ExitCode;
use std::time::Duration;

use rand::Rng;

use aquamon_service::config::Config;
use aquamon_service::logging::{self, LogLevel, Subsystem};
use aquamon_service::model::Reading;
use aquamon_service::parameters::{spec_for, Parameter};
use aquamon_service::sync::SyncClient;

const DEFAULT_CONFIG_PATH: &str = "aquamon.toml";
const DEFAULT_INTERVAL_SECS: u64 = 10;

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("usage: simulator [--config <path>] [--interval-secs <n>]");
            return ExitCode::from(2);
        }
    };

    let config = match Config::load(&options.config_path) {
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
        Subsystem::Simulator,
        &format!("simulator started, interval {}s", options.interval.as_secs()),
    );

    let client = SyncClient::new(config.script_url.clone(), config.sync_timeout());
    let mut rng = rand::thread_rng();

    loop {
        let reading = generate_reading(&mut rng);
        logging::debug(
            Subsystem::Simulator,
            &format!(
                "generated ph={} tds={} turbidity={} temperature={}",
                reading.ph, reading.tds, reading.turbidity, reading.temperature
            ),
        );
        let outcome = client.push_reading(&reading);
        logging::log_sync_outcome(Subsystem::Simulator, &outcome);
        std::thread::sleep(options.interval);
    }
}

struct Options {
    config_path: String,
    interval: Duration,
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut config_path = DEFAULT_CONFIG_PATH.to_string();
    let mut interval = Duration::from_secs(DEFAULT_INTERVAL_SECS);
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                config_path = args
                    .get(i + 1)
                    .cloned()
                    .ok_or_else(|| "--config requires a path".to_string())?;
                i += 2;
            }
            "--interval-secs" => {
                let secs: u64 = args
                    .get(i + 1)
                    .ok_or_else(|| "--interval-secs requires a number".to_string())?
                    .parse()
                    .map_err(|_| "--interval-secs requires a number".to_string())?;
                interval = Duration::from_secs(secs);
                i += 2;
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(Options { config_path, interval })
}

/// One synthetic reading drawn from the registry's plausible ranges.
/// pH and turbidity carry 2 decimals, temperature 1, TDS is a whole ppm
/// count, matching the granularity real sensors report.
fn generate_reading<R: Rng>(rng: &mut R) -> Reading {
    let in_range = |rng: &mut R, parameter: Parameter| {
        let (lo, hi) = spec_for(parameter).plausible_range;
        rng.gen_range(lo..=hi)
    };
    Reading {
        ph: round_to(in_range(rng, Parameter::Ph), 2),
        tds: in_range(rng, Parameter::Tds).round(),
        turbidity: round_to(in_range(rng, Parameter::Turbidity), 2),
        temperature: round_to(in_range(rng, Parameter::Temperature), 1),
    }
}

fn round_to(v: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (v * factor).round() / factor
}
