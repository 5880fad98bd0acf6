//! Pricing domain errors
//!
//! Every variant aborts the whole computation; no partial totals or
//! statements are produced once one of these is raised.

use core_kernel::{MoneyError, PlayId};
use thiserror::Error;

/// Errors that can occur in the pricing domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A play genre outside the supported set
    #[error("unknown type: {genre}")]
    UnknownPlayType {
        genre: String,
    },

    /// A performance refers to a play that is not in the catalog
    #[error("Missing play reference: no play with id '{play_id}' in catalog")]
    MissingPlayReference {
        play_id: PlayId,
    },

    /// Arithmetic overflow while aggregating amounts
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl PricingError {
    pub fn unknown_play_type(genre: impl Into<String>) -> Self {
        PricingError::UnknownPlayType { genre: genre.into() }
    }

    pub fn missing_play(play_id: &PlayId) -> Self {
        PricingError::MissingPlayReference { play_id: play_id.clone() }
    }
}
