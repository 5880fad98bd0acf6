//! Strongly-typed identifiers for domain entities
//!
//! Plays are keyed by a caller-chosen string (e.g. `"hamlet"`). Wrapping it
//! in a newtype keeps catalog keys from being mixed up with display names.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a play in a catalog
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    /// Creates an identifier from any string-like key
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// Lets `HashMap<PlayId, _>` be queried with a plain `&str`.
impl Borrow<str> for PlayId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
