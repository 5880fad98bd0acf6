//! Statement Printer CLI
//!
//! Thin wrapper around the statement domain: loads a play catalog and a set
//! of invoices from JSON, builds one statement per invoice, and renders each
//! in the configured format.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{config::PrinterConfig, run};
//!
//! let config = PrinterConfig::from_env()?;
//! for statement in run(&config)? {
//!     print!("{statement}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod loader;

use domain_pricing::{PerformanceSummary, PlayCatalog};
use domain_statement::{build_statement, render, StatementFormat};

use crate::config::PrinterConfig;
use crate::error::CliError;

/// Builds and renders a statement for every invoice
///
/// Fails on the first invoice that cannot be priced; nothing is rendered in
/// that case.
pub fn render_all(
    invoices: &[PerformanceSummary],
    catalog: &PlayCatalog,
    format: StatementFormat,
) -> Result<Vec<String>, CliError> {
    let statements = invoices
        .iter()
        .map(|summary| build_statement(summary, catalog))
        .collect::<Result<Vec<_>, _>>()?;

    statements
        .iter()
        .map(|statement| render(statement, format).map_err(CliError::from))
        .collect()
}

/// Loads the configured input files and renders every statement
pub fn run(config: &PrinterConfig) -> Result<Vec<String>, CliError> {
    let catalog = loader::load_catalog(&config.plays_path)?;
    let invoices = loader::load_invoices(&config.invoices_path)?;

    tracing::info!(
        invoices = invoices.len(),
        format = %config.format,
        "Rendering statements"
    );

    render_all(&invoices, &catalog, config.format)
}
