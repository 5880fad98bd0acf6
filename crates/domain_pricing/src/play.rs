//! Plays and their genres
//!
//! The genre decides which pricing formula applies. It is a closed set:
//! strings coming from catalog files are converted here and anything other
//! than `tragedy` or `comedy` is rejected with `PricingError::UnknownPlayType`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// Play genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    /// Tragedy, priced from a 30-seat threshold
    Tragedy,
    /// Comedy, priced from a 20-seat threshold with a per-seat surcharge
    Comedy,
}

impl Genre {
    /// Returns the lowercase name used in catalog data
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(PricingError::unknown_play_type(other)),
        }
    }
}

/// A play that can be booked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name
    pub name: String,
    /// Genre
    #[serde(rename = "type")]
    pub genre: Genre,
}

impl Play {
    /// Creates a play with an already-validated genre
    pub fn new(name: impl Into<String>, genre: Genre) -> Self {
        Self {
            name: name.into(),
            genre,
        }
    }

    /// Creates a tragedy
    pub fn tragedy(name: impl Into<String>) -> Self {
        Self::new(name, Genre::Tragedy)
    }

    /// Creates a comedy
    pub fn comedy(name: impl Into<String>) -> Self {
        Self::new(name, Genre::Comedy)
    }

    /// Creates a play from an untrusted genre string
    ///
    /// # Errors
    ///
    /// Returns `PricingError::UnknownPlayType` if `genre` is not a supported genre.
    pub fn try_new(name: impl Into<String>, genre: &str) -> Result<Self, PricingError> {
        Ok(Self::new(name, genre.parse()?))
    }
}

/// A play as it appears in catalog data, before its genre is checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TryFrom<PlayRecord> for Play {
    type Error = PricingError;

    fn try_from(record: PlayRecord) -> Result<Self, Self::Error> {
        Play::try_new(record.name, &record.kind)
    }
}
