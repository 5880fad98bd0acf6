//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants: every generated summary only refers
//! to plays present in its generated catalog.

use domain_pricing::{Genre, Performance, PerformanceSummary, Play, PlayCatalog};
use proptest::prelude::*;

/// Strategy for generating valid Genre values
pub fn genre_strategy() -> impl Strategy<Value = Genre> {
    prop_oneof![Just(Genre::Tragedy), Just(Genre::Comedy)]
}

/// Strategy for audience sizes, weighted towards the pricing thresholds
pub fn audience_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => 0u32..=60u32,
        1 => 61u32..100_000u32,
    ]
}

/// Strategy for generating plays
pub fn play_strategy() -> impl Strategy<Value = Play> {
    ("[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10}){0,3}", genre_strategy())
        .prop_map(|(name, genre)| Play::new(name, genre))
}

/// Strategy for a catalog of 1 to 8 plays keyed `play-0`, `play-1`, ...
pub fn catalog_strategy() -> impl Strategy<Value = PlayCatalog> {
    prop::collection::vec(play_strategy(), 1..8).prop_map(|plays| {
        plays
            .into_iter()
            .enumerate()
            .map(|(index, play)| (format!("play-{index}"), play))
            .collect::<PlayCatalog>()
    })
}

/// Strategy for a catalog together with a summary that only books plays from it
pub fn catalog_and_summary_strategy() -> impl Strategy<Value = (PlayCatalog, PerformanceSummary)> {
    catalog_strategy().prop_flat_map(|catalog| {
        let play_count = catalog.len();
        let performances = prop::collection::vec(
            (0..play_count, audience_strategy())
                .prop_map(|(index, audience)| Performance::new(format!("play-{index}"), audience)),
            0..25,
        );
        (Just(catalog), "[A-Za-z][A-Za-z ]{0,20}", performances).prop_map(
            |(catalog, customer, performances)| {
                (catalog, PerformanceSummary { customer, performances })
            },
        )
    })
}
