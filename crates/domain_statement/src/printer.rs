//! One-call statement printing

use domain_pricing::{PerformanceSummary, PlayCatalog};

use crate::error::StatementError;
use crate::render::{render, StatementFormat};
use crate::statement::build_statement;

/// Builds a statement and renders it as plain text
///
/// # Errors
///
/// Returns any error raised while building the statement.
pub fn print_statement(
    summary: &PerformanceSummary,
    catalog: &PlayCatalog,
) -> Result<String, StatementError> {
    print_statement_as(summary, catalog, StatementFormat::Text)
}

/// Builds a statement and renders it in the given format
///
/// # Errors
///
/// Returns any error raised while building or rendering the statement.
pub fn print_statement_as(
    summary: &PerformanceSummary,
    catalog: &PlayCatalog,
    format: StatementFormat,
) -> Result<String, StatementError> {
    let statement = build_statement(summary, catalog)?;
    render(&statement, format)
}
