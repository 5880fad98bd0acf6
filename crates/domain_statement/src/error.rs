//! Statement domain errors

use core_kernel::Money;
use domain_pricing::{Credits, PricingError};
use thiserror::Error;

/// Errors that can occur while building or rendering a statement
#[derive(Debug, Error)]
pub enum StatementError {
    /// Pricing failed for one of the performances
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Aggregate totals disagree with the emitted line items
    #[error("Inconsistent totals: line items sum to {line_amount} / {line_credits} credits, aggregates are {total_amount} / {total_credits} credits")]
    InconsistentTotals {
        line_amount: Money,
        line_credits: Credits,
        total_amount: Money,
        total_credits: Credits,
    },

    /// Statement could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
