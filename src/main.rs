//! CLI entry point for the NeoWs rater tool.
//!
//! Provides subcommands for fetching and classifying near-earth objects over
//! a date range, summarizing their risk, and printing the operation contracts
//! exposed to a hosting runtime.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use neows_rater::infra::neows::NeoWsClient;
use neows_rater::model::DateRange;
use neows_rater::services::NeoFeed;
use neows_rater::tools;
use std::ffi::OsStr;
use std::path::Path;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "neows_rater")]
#[command(about = "A tool to fetch and risk-rate NASA NeoWs asteroid feeds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and classify asteroids for an inclusive date range
    Fetch {
        /// Range start, YYYY-MM-DD
        #[arg(value_name = "START_DATE")]
        start_date: String,

        /// Range end (inclusive), YYYY-MM-DD
        #[arg(value_name = "END_DATE")]
        end_date: String,
    },
    /// Summarize risk counts and top high-risk objects for a date range
    Summarize {
        /// Range start, YYYY-MM-DD
        #[arg(value_name = "START_DATE")]
        start_date: String,

        /// Range end (inclusive), YYYY-MM-DD
        #[arg(value_name = "END_DATE")]
        end_date: String,
    },
    /// Print the tool registration table as JSON
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/neows_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("neows_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            start_date,
            end_date,
        } => {
            let service = NeoWsClient::from_env().context("building NeoWs client")?;
            let range = DateRange::new(start_date, end_date);
            let fetched = service.fetch_asteroids(&range).await?;

            println!("{}", serde_json::to_string_pretty(&fetched)?);
        }
        Commands::Summarize {
            start_date,
            end_date,
        } => {
            let service = NeoWsClient::from_env().context("building NeoWs client")?;
            let range = DateRange::new(start_date, end_date);
            let summary = service.summarize_asteroid_risk(&range).await?;

            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Tools => {
            println!("{}", serde_json::to_string_pretty(&tools::tool_specs())?);
        }
    }

    Ok(())
}
