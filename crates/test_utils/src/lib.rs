//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! theatre statement test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built plays, catalogs, summaries and expected output
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for statements and totals
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
