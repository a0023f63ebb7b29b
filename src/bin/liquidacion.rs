//! Command-line entry point.
//!
//! ```text
//! liquidacion report <config-dir> <paystubs.csv> [--json] [--as-of YYYY-MM-DD]
//! liquidacion serve <config-dir> [addr]
//! ```

use std::env;
use std::net::SocketAddr;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use liquidacion_engine::api::{AppState, create_router};
use liquidacion_engine::config::ConfigLoader;
use liquidacion_engine::error::EngineError;
use liquidacion_engine::ingest::PaystubLoader;
use liquidacion_engine::report::{assemble_report, render_text};

const USAGE: &str = "usage:
  liquidacion report <config-dir> <paystubs.csv> [--json] [--as-of YYYY-MM-DD]
  liquidacion serve <config-dir> [addr]";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, PartialEq)]
enum Command {
    Report {
        config_dir: String,
        paystubs: String,
        json: bool,
        as_of: Option<NaiveDate>,
    },
    Serve {
        config_dir: String,
        addr: SocketAddr,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = parse_args(&args).and_then(run) {
        eprintln!("{err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!("{USAGE}");
        }
        std::process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let (subcommand, rest) = args
        .split_first()
        .ok_or_else(|| CliError::Usage("missing subcommand".to_string()))?;

    match subcommand.as_str() {
        "report" => {
            let mut positional = Vec::new();
            let mut json = false;
            let mut as_of = None;
            let mut iter = rest.iter();
            while let Some(arg) = iter.next() {
                match arg.as_str() {
                    "--json" => json = true,
                    "--as-of" => {
                        let value = iter
                            .next()
                            .ok_or_else(|| CliError::Usage("--as-of needs a date".to_string()))?;
                        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                            CliError::Usage(format!("invalid --as-of date '{}'", value))
                        })?;
                        as_of = Some(date);
                    }
                    _ => positional.push(arg.clone()),
                }
            }
            match <[String; 2]>::try_from(positional) {
                Ok([config_dir, paystubs]) => Ok(Command::Report {
                    config_dir,
                    paystubs,
                    json,
                    as_of,
                }),
                Err(_) => Err(CliError::Usage(
                    "report takes a config directory and a pay-stub file".to_string(),
                )),
            }
        }
        "serve" => {
            let config_dir = rest
                .first()
                .ok_or_else(|| CliError::Usage("serve needs a config directory".to_string()))?
                .clone();
            let addr_text = rest.get(1).map(String::as_str).unwrap_or(DEFAULT_ADDR);
            let addr = addr_text
                .parse()
                .map_err(|_| CliError::Usage(format!("invalid address '{}'", addr_text)))?;
            Ok(Command::Serve { config_dir, addr })
        }
        other => Err(CliError::Usage(format!("unknown subcommand '{}'", other))),
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Report {
            config_dir,
            paystubs,
            json,
            as_of,
        } => {
            let mut config = ConfigLoader::load(&config_dir)?;
            if let Some(date) = as_of {
                config = config.with_evaluation_date(date);
            }
            let outcome = PaystubLoader::load(&paystubs)?;
            let report = assemble_report(&config, &outcome.records, outcome.warnings);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_text(&report));
            }
            Ok(())
        }
        Command::Serve { config_dir, addr } => {
            let config = ConfigLoader::load(&config_dir)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve(AppState::new(config), addr))
        }
    }
}

async fn serve(state: AppState, addr: SocketAddr) -> Result<(), CliError> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
