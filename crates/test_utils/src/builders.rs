//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::PlayId;
use domain_pricing::{PerformanceSummary, Play, PlayCatalog, PlayRecord, PricingError};

/// Builder for play catalogs, including ones with unchecked genres
#[derive(Debug, Default)]
pub struct TestCatalogBuilder {
    records: Vec<(PlayId, PlayRecord)>,
}

impl TestCatalogBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tragedy
    pub fn with_tragedy(self, id: &str, name: &str) -> Self {
        self.with_record(id, name, "tragedy")
    }

    /// Adds a comedy
    pub fn with_comedy(self, id: &str, name: &str) -> Self {
        self.with_record(id, name, "comedy")
    }

    /// Adds a play with an arbitrary genre string
    pub fn with_record(mut self, id: &str, name: &str, kind: &str) -> Self {
        self.records.push((
            PlayId::from(id),
            PlayRecord {
                name: name.to_string(),
                kind: kind.to_string(),
            },
        ));
        self
    }

    /// Builds the catalog, validating every genre
    pub fn try_build(self) -> Result<PlayCatalog, PricingError> {
        PlayCatalog::from_records(self.records)
    }

    /// Builds the catalog
    ///
    /// # Panics
    ///
    /// Panics if any play has an unsupported genre
    pub fn build(self) -> PlayCatalog {
        self.try_build().expect("Test catalog has an unsupported genre")
    }
}

/// Builder for performance summaries
#[derive(Debug)]
pub struct TestSummaryBuilder {
    summary: PerformanceSummary,
}

impl Default for TestSummaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSummaryBuilder {
    /// Creates a builder for a default customer with no bookings
    pub fn new() -> Self {
        Self {
            summary: PerformanceSummary::new("Test Customer"),
        }
    }

    /// Sets the customer name
    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.summary.customer = customer.into();
        self
    }

    /// Adds one performance
    pub fn performance(mut self, play_id: &str, audience: u32) -> Self {
        self.summary = self.summary.with_performance(play_id, audience);
        self
    }

    /// Adds `count` identical performances
    pub fn repeated(mut self, play_id: &str, audience: u32, count: usize) -> Self {
        for _ in 0..count {
            self = self.performance(play_id, audience);
        }
        self
    }

    pub fn build(self) -> PerformanceSummary {
        self.summary
    }
}

/// Builds a single-play catalog and a one-performance summary for it
pub fn single_performance(play: Play, audience: u32) -> (PlayCatalog, PerformanceSummary) {
    let catalog = PlayCatalog::new().with_play("play", play);
    let summary = TestSummaryBuilder::new().performance("play", audience).build();
    (catalog, summary)
}
