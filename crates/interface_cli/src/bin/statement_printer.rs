//! Statement Printer - command-line entry point
//!
//! Reads a plays catalog and a set of invoices and prints one statement per
//! invoice to stdout (or `--output`). Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! statement-printer --plays plays.json --invoices invoices.json --format html
//! ```
//!
//! # Environment Variables
//!
//! * `STATEMENT_PLAYS_PATH` - Plays catalog path (default: plays.json)
//! * `STATEMENT_INVOICES_PATH` - Invoices path (default: invoices.json)
//! * `STATEMENT_FORMAT` - text, html or json (default: text)
//! * `STATEMENT_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//!
//! Command-line flags take precedence over the environment.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_statement::StatementFormat;
use interface_cli::config::{ConfigOverrides, PrinterConfig};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Text,
    Html,
    Json,
}

impl From<Fmt> for StatementFormat {
    fn from(fmt: Fmt) -> Self {
        match fmt {
            Fmt::Text => StatementFormat::Text,
            Fmt::Html => StatementFormat::Html,
            Fmt::Json => StatementFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "statement-printer", version, about = "Print theatre billing statements")]
struct Cli {
    /// Plays catalog JSON
    #[arg(short = 'p', long = "plays")]
    plays: Option<PathBuf>,

    /// Invoices JSON
    #[arg(short = 'i', long = "invoices")]
    invoices: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<Fmt>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Log level filter
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

impl Cli {
    /// Splits the flags into config overrides and the output destination
    fn into_overrides(self) -> (ConfigOverrides, Option<PathBuf>) {
        let overrides = ConfigOverrides {
            plays_path: self.plays,
            invoices_path: self.invoices,
            format: self.format.map(StatementFormat::from),
            log_level: self.log_level,
        };
        (overrides, self.output)
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let (overrides, output) = Cli::parse().into_overrides();
    let config = PrinterConfig::from_env()
        .context("Invalid STATEMENT_* environment configuration")?
        .with_overrides(overrides);

    init_tracing(&config.log_level);

    tracing::info!(
        plays = %config.plays_path.display(),
        invoices = %config.invoices_path.display(),
        format = %config.format,
        "Starting statement printer"
    );

    let statements = interface_cli::run(&config)?;

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    for statement in &statements {
        writer.write_all(statement.as_bytes())?;
        if config.format != StatementFormat::Text {
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    tracing::info!(statements = statements.len(), "Done");
    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}
