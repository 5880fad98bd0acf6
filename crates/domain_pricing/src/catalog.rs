//! Play catalog
//!
//! The catalog is always passed explicitly into pricing calls. It
//! deserializes straight from the `{ "<playID>": { "name", "type" } }` data
//! format, converting every genre on the way in.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::PlayId;

use crate::error::PricingError;
use crate::performance::Performance;
use crate::play::{Play, PlayRecord};

/// Mapping from play identifier to play
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, PlayRecord>", into = "HashMap<PlayId, Play>")]
pub struct PlayCatalog {
    plays: HashMap<PlayId, Play>,
}

impl PlayCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a play, returning the catalog for chaining
    ///
    /// A play already registered under `id` is replaced.
    pub fn with_play(mut self, id: impl Into<PlayId>, play: Play) -> Self {
        self.insert(id, play);
        self
    }

    /// Adds a play, returning any play previously registered under `id`
    pub fn insert(&mut self, id: impl Into<PlayId>, play: Play) -> Option<Play> {
        self.plays.insert(id.into(), play)
    }

    /// Builds a catalog from unchecked records
    ///
    /// # Errors
    ///
    /// Returns `PricingError::UnknownPlayType` for the first record whose
    /// genre is not supported. No catalog is produced in that case.
    pub fn from_records<I, K>(records: I) -> Result<Self, PricingError>
    where
        I: IntoIterator<Item = (K, PlayRecord)>,
        K: Into<PlayId>,
    {
        let mut plays = HashMap::new();
        for (id, record) in records {
            let id = id.into();
            let play = Play::try_from(record).inspect_err(|err| {
                tracing::warn!(play_id = %id, error = %err, "Rejected play with unsupported genre");
            })?;
            plays.insert(id, play);
        }
        Ok(Self { plays })
    }

    /// Looks up a play by identifier
    pub fn get(&self, id: &str) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Resolves the play a performance refers to
    ///
    /// # Errors
    ///
    /// Returns `PricingError::MissingPlayReference` if the play is not in the catalog.
    pub fn resolve(&self, performance: &Performance) -> Result<&Play, PricingError> {
        self.plays
            .get(&performance.play_id)
            .ok_or_else(|| PricingError::missing_play(&performance.play_id))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl TryFrom<HashMap<String, PlayRecord>> for PlayCatalog {
    type Error = PricingError;

    fn try_from(records: HashMap<String, PlayRecord>) -> Result<Self, Self::Error> {
        Self::from_records(records)
    }
}

impl From<PlayCatalog> for HashMap<PlayId, Play> {
    fn from(catalog: PlayCatalog) -> Self {
        catalog.plays
    }
}

impl<K: Into<PlayId>> FromIterator<(K, Play)> for PlayCatalog {
    fn from_iter<T: IntoIterator<Item = (K, Play)>>(iter: T) -> Self {
        Self {
            plays: iter.into_iter().map(|(id, play)| (id.into(), play)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, kind: &str) -> PlayRecord {
        PlayRecord {
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_resolve_known_play() {
        let catalog = PlayCatalog::new().with_play("hamlet", Play::tragedy("Hamlet"));
        let play = catalog.resolve(&Performance::new("hamlet", 55)).unwrap();
        assert_eq!(play.name, "Hamlet");
    }

    #[test]
    fn test_resolve_missing_play() {
        let catalog = PlayCatalog::new();
        let err = catalog.resolve(&Performance::new("hamlet", 55)).unwrap_err();
        assert_eq!(err, PricingError::missing_play(&PlayId::from("hamlet")));
    }

    #[test]
    fn test_from_records_rejects_unknown_genre() {
        let records = vec![
            ("hamlet", record("Hamlet", "tragedy")),
            ("henry-v", record("Henry V", "history")),
        ];
        let err = PlayCatalog::from_records(records).unwrap_err();
        assert_eq!(err, PricingError::unknown_play_type("history"));
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut catalog = PlayCatalog::new();
        assert!(catalog.insert("othello", Play::comedy("Othello")).is_none());
        let previous = catalog.insert("othello", Play::tragedy("Othello"));
        assert_eq!(previous, Some(Play::comedy("Othello")));
        assert_eq!(catalog.len(), 1);
    }
}
