//! Loading plays and invoices from JSON files
//!
//! Plays: `{ "<playID>": { "name": "...", "type": "tragedy" | "comedy" } }`
//! Invoices: an array of `{ "customer": "...", "performances": [...] }`, or a
//! single such object.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use domain_pricing::{PerformanceSummary, PlayCatalog};

use crate::error::CliError;

#[derive(Deserialize)]
#[serde(untagged)]
enum Invoices {
    Many(Vec<PerformanceSummary>),
    One(PerformanceSummary),
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a plays catalog, rejecting unsupported genres
pub fn parse_catalog(json: &str, path: &Path) -> Result<PlayCatalog, CliError> {
    serde_json::from_str(json).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses one or many invoices
pub fn parse_invoices(json: &str, path: &Path) -> Result<Vec<PerformanceSummary>, CliError> {
    let invoices: Invoices = serde_json::from_str(json).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match invoices {
        Invoices::Many(summaries) => summaries,
        Invoices::One(summary) => vec![summary],
    })
}

/// Reads and parses the plays catalog at `path`
pub fn load_catalog(path: &Path) -> Result<PlayCatalog, CliError> {
    let catalog = parse_catalog(&read(path)?, path)?;
    if catalog.is_empty() {
        tracing::warn!(path = %path.display(), "Play catalog is empty");
    }
    tracing::debug!(path = %path.display(), plays = catalog.len(), "Loaded play catalog");
    Ok(catalog)
}

/// Reads and parses the invoices at `path`
pub fn load_invoices(path: &Path) -> Result<Vec<PerformanceSummary>, CliError> {
    let invoices = parse_invoices(&read(path)?, path)?;
    tracing::debug!(path = %path.display(), invoices = invoices.len(), "Loaded invoices");
    Ok(invoices)
}
