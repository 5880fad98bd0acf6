//! Performances and per-customer booking summaries

use serde::{Deserialize, Serialize};

use core_kernel::PlayId;

/// One booked performance of a play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Catalog key of the play performed
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    /// Number of attendees
    pub audience: u32,
}

impl Performance {
    /// Creates a new performance
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's bookings for one billing period
///
/// Performance order is kept as given; it is the row order of the rendered
/// statement and has no effect on totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Customer name
    pub customer: String,
    /// Booked performances in billing order
    pub performances: Vec<Performance>,
}

impl PerformanceSummary {
    /// Creates a summary with no performances
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            performances: Vec::new(),
        }
    }

    /// Appends a performance
    pub fn with_performance(mut self, play_id: impl Into<PlayId>, audience: u32) -> Self {
        self.performances.push(Performance::new(play_id, audience));
        self
    }
}
