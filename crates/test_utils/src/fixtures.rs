//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for plays, catalogs and bookings.
//! The BigCo season is the reference scenario: three performances whose
//! charges are $650.00, $580.00 and $500.00.

use core_kernel::Money;
use domain_pricing::{PerformanceSummary, Play, PlayCatalog, PlayRecord};

/// Fixture for play test data
pub struct PlayFixtures;

impl PlayFixtures {
    /// Hamlet, a tragedy
    pub fn hamlet() -> Play {
        Play::tragedy("Hamlet")
    }

    /// As You Like It, a comedy
    pub fn as_like() -> Play {
        Play::comedy("As You Like It")
    }

    /// Othello, a tragedy
    pub fn othello() -> Play {
        Play::tragedy("Othello")
    }

    /// A catalog record with a genre the engine does not price
    pub fn henry_v_record() -> PlayRecord {
        PlayRecord {
            name: "Henry V".to_string(),
            kind: "history".to_string(),
        }
    }
}

/// Fixture for play catalogs
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// The three-play catalog used by the BigCo season
    pub fn big_co() -> PlayCatalog {
        PlayCatalog::new()
            .with_play("hamlet", PlayFixtures::hamlet())
            .with_play("as-like", PlayFixtures::as_like())
            .with_play("othello", PlayFixtures::othello())
    }

    /// The BigCo catalog in its JSON data format
    pub fn big_co_json() -> &'static str {
        r#"{
    "hamlet": {"name": "Hamlet", "type": "tragedy"},
    "as-like": {"name": "As You Like It", "type": "comedy"},
    "othello": {"name": "Othello", "type": "tragedy"}
}"#
    }
}

/// Fixture for performance summaries
pub struct SummaryFixtures;

impl SummaryFixtures {
    /// BigCo's season: Hamlet (55), As You Like It (35), Othello (40)
    pub fn big_co() -> PerformanceSummary {
        PerformanceSummary::new("BigCo")
            .with_performance("hamlet", 55)
            .with_performance("as-like", 35)
            .with_performance("othello", 40)
    }

    /// A customer with no bookings
    pub fn empty() -> PerformanceSummary {
        PerformanceSummary::new("Nobody")
    }

    /// BigCo's season in the invoices JSON data format
    pub fn big_co_invoices_json() -> &'static str {
        r#"[
    {
        "customer": "BigCo",
        "performances": [
            {"playID": "hamlet", "audience": 55},
            {"playID": "as-like", "audience": 35},
            {"playID": "othello", "audience": 40}
        ]
    }
]"#
    }
}

/// Expected results for the BigCo season
pub struct BigCoExpectations;

impl BigCoExpectations {
    /// Per-performance charges in booking order
    pub fn line_amounts() -> [Money; 3] {
        [
            Money::from_minor(65_000),
            Money::from_minor(58_000),
            Money::from_minor(50_000),
        ]
    }

    /// Per-performance credits in booking order
    pub fn line_credits() -> [u64; 3] {
        [25, 12, 10]
    }

    pub fn total_amount() -> Money {
        Money::from_minor(173_000)
    }

    pub fn total_credits() -> u64 {
        47
    }

    /// The plain-text statement
    pub fn plain_text() -> &'static str {
        "Statement for BigCo\n \
         Hamlet: $650.00 (55 seats)\n \
         As You Like It: $580.00 (35 seats)\n \
         Othello: $500.00 (40 seats)\n\
         Amount owed is $1,730.00\n\
         You earned 47 credits\n"
    }

    /// The HTML statement
    pub fn html() -> &'static str {
        "<h1>Statement for BigCo</h1>\
         <ul>\
         <li> Hamlet: $650.00 (55 seats)</li>\
         <li> As You Like It: $580.00 (35 seats)</li>\
         <li> Othello: $500.00 (40 seats)</li>\
         </ul>\
         <p>Amount owed is $1,730.00</p>\
         <p>You earned 47 credits</p>"
    }
}
