//! Statement Domain
//!
//! This crate turns a customer's bookings into a statement and renders it.
//!
//! # Flow
//!
//! ```text
//! PerformanceSummary + PlayCatalog
//!     -> build_statement (prices every performance, totals the season)
//!     -> Statement (immutable, integer amounts)
//!     -> render_plain_text / render_html / JSON
//! ```
//!
//! # Example
//!
//! ```rust
//! use domain_pricing::{PerformanceSummary, Play, PlayCatalog};
//! use domain_statement::{build_statement, render_plain_text};
//!
//! let catalog = PlayCatalog::new().with_play("hamlet", Play::tragedy("Hamlet"));
//! let summary = PerformanceSummary::new("BigCo").with_performance("hamlet", 55);
//!
//! let statement = build_statement(&summary, &catalog)?;
//! assert_eq!(
//!     render_plain_text(&statement),
//!     "Statement for BigCo\n Hamlet: $650.00 (55 seats)\nAmount owed is $650.00\nYou earned 25 credits\n"
//! );
//! # Ok::<(), domain_statement::StatementError>(())
//! ```

pub mod error;
pub mod printer;
pub mod render;
pub mod statement;

pub use error::StatementError;
pub use printer::{print_statement, print_statement_as};
pub use render::{render, render_html, render_plain_text, StatementFormat};
pub use statement::{build_statement, PerformanceLineItem, Statement};
