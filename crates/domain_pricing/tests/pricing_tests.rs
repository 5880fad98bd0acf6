//! Pricing Engine Tests
//!
//! # Test Organization
//!
//! - `amount_tests` - per-performance charges for each genre
//! - `credit_tests` - per-performance loyalty credits
//! - `aggregate_tests` - totals over a performance summary
//! - `catalog_tests` - catalog loading and genre validation
//! - `property_tests` - aggregation laws

use core_kernel::{Money, PlayId};
use domain_pricing::{
    amount_for, charge_for, credits_for, total_amount, total_credits, Genre, Performance,
    PerformanceSummary, Play, PlayCatalog, PricingError,
};

fn big_co_catalog() -> PlayCatalog {
    PlayCatalog::new()
        .with_play("hamlet", Play::tragedy("Hamlet"))
        .with_play("as-like", Play::comedy("As You Like It"))
        .with_play("othello", Play::tragedy("Othello"))
}

fn big_co_summary() -> PerformanceSummary {
    PerformanceSummary::new("BigCo")
        .with_performance("hamlet", 55)
        .with_performance("as-like", 35)
        .with_performance("othello", 40)
}

// ============================================================================
// AMOUNT TESTS
// ============================================================================

mod amount_tests {
    use super::*;

    #[test]
    fn test_tragedy_small_audience_is_base_amount() {
        let play = Play::tragedy("Hamlet");
        for audience in [0, 1, 15, 29, 30] {
            assert_eq!(
                amount_for(&play, &Performance::new("hamlet", audience)),
                Money::from_minor(40_000),
                "tragedy with {audience} seats"
            );
        }
    }

    #[test]
    fn test_tragedy_large_audience() {
        let play = Play::tragedy("Hamlet");
        assert_eq!(amount_for(&play, &Performance::new("hamlet", 35)).minor_units(), 45_000);
        assert_eq!(amount_for(&play, &Performance::new("hamlet", 55)).minor_units(), 65_000);
    }

    #[test]
    fn test_comedy_small_audience() {
        let play = Play::comedy("As You Like It");
        assert_eq!(amount_for(&play, &Performance::new("as-like", 15)).minor_units(), 34_500);
    }

    #[test]
    fn test_comedy_large_audience() {
        let play = Play::comedy("As You Like It");
        assert_eq!(amount_for(&play, &Performance::new("as-like", 25)).minor_units(), 50_000);
        assert_eq!(amount_for(&play, &Performance::new("as-like", 35)).minor_units(), 58_000);
    }
}

// ============================================================================
// CREDIT TESTS
// ============================================================================

mod credit_tests {
    use super::*;

    #[test]
    fn test_tragedy_credits() {
        let play = Play::tragedy("Othello");
        assert_eq!(credits_for(&play, &Performance::new("othello", 25)), 0);
        assert_eq!(credits_for(&play, &Performance::new("othello", 35)), 5);
    }

    #[test]
    fn test_comedy_credits() {
        let play = Play::comedy("As You Like It");
        assert_eq!(credits_for(&play, &Performance::new("as-like", 25)), 5);
        assert_eq!(credits_for(&play, &Performance::new("as-like", 55)), 36);
    }

    #[test]
    fn test_charge_for_combines_amount_and_credits() {
        let catalog = big_co_catalog();
        let charge = charge_for(&Performance::new("as-like", 35), &catalog).unwrap();
        assert_eq!(charge.play.name, "As You Like It");
        assert_eq!(charge.amount, Money::from_minor(58_000));
        assert_eq!(charge.credits, 12);
    }
}

// ============================================================================
// AGGREGATE TESTS
// ============================================================================

mod aggregate_tests {
    use super::*;

    #[test]
    fn test_big_co_totals() {
        let summary = big_co_summary();
        let catalog = big_co_catalog();

        assert_eq!(total_amount(&summary, &catalog), Ok(Money::from_minor(173_000)));
        assert_eq!(total_credits(&summary, &catalog), Ok(47));
    }

    #[test]
    fn test_empty_summary_totals_are_zero() {
        let summary = PerformanceSummary::new("Nobody");
        let catalog = big_co_catalog();

        assert_eq!(total_amount(&summary, &catalog), Ok(Money::zero()));
        assert_eq!(total_credits(&summary, &catalog), Ok(0));
    }

    #[test]
    fn test_missing_play_fails_totals() {
        let summary = big_co_summary().with_performance("macbeth", 10);
        let catalog = big_co_catalog();
        let expected = PricingError::MissingPlayReference {
            play_id: PlayId::from("macbeth"),
        };

        assert_eq!(total_amount(&summary, &catalog), Err(expected.clone()));
        assert_eq!(total_credits(&summary, &catalog), Err(expected));
    }

    #[test]
    fn test_order_does_not_affect_totals() {
        let catalog = big_co_catalog();
        let forward = big_co_summary();
        let mut reversed = forward.clone();
        reversed.performances.reverse();

        assert_eq!(total_amount(&forward, &catalog), total_amount(&reversed, &catalog));
        assert_eq!(total_credits(&forward, &catalog), total_credits(&reversed, &catalog));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let summary = big_co_summary();
        let catalog = big_co_catalog();
        let summary_before = summary.clone();
        let catalog_before = catalog.clone();

        total_amount(&summary, &catalog).unwrap();
        total_credits(&summary, &catalog).unwrap();

        assert_eq!(summary, summary_before);
        assert_eq!(catalog, catalog_before);
    }
}

// ============================================================================
// CATALOG TESTS
// ============================================================================

mod catalog_tests {
    use super::*;

    #[test]
    fn test_catalog_from_json() {
        let json = r#"{
            "hamlet": {"name": "Hamlet", "type": "tragedy"},
            "as-like": {"name": "As You Like It", "type": "comedy"},
            "othello": {"name": "Othello", "type": "tragedy"}
        }"#;
        let catalog: PlayCatalog = serde_json::from_str(json).unwrap();

        assert_eq!(catalog, big_co_catalog());
        assert_eq!(catalog.get("as-like").map(|p| p.genre), Some(Genre::Comedy));
    }

    #[test]
    fn test_catalog_from_json_rejects_unknown_genre() {
        let json = r#"{"henry-v": {"name": "Henry V", "type": "history"}}"#;
        let err = serde_json::from_str::<PlayCatalog>(json).unwrap_err();

        assert!(err.to_string().contains("unknown type: history"));
    }

    #[test]
    fn test_play_try_new_rejects_unknown_genre() {
        let result = Play::try_new("Henry V", "history");
        assert_eq!(result, Err(PricingError::unknown_play_type("history")));
    }

    #[test]
    fn test_summary_from_json() {
        let json = r#"{
            "customer": "BigCo",
            "performances": [
                {"playID": "hamlet", "audience": 55},
                {"playID": "as-like", "audience": 35},
                {"playID": "othello", "audience": 40}
            ]
        }"#;
        let summary: PerformanceSummary = serde_json::from_str(json).unwrap();

        assert_eq!(summary, big_co_summary());
    }

    #[test]
    fn test_catalog_serializes_back_to_data_format() {
        let catalog = PlayCatalog::new().with_play("hamlet", Play::tragedy("Hamlet"));
        let value = serde_json::to_value(&catalog).unwrap();

        assert_eq!(value["hamlet"]["name"], "Hamlet");
        assert_eq!(value["hamlet"]["type"], "tragedy");
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn performance_strategy() -> impl Strategy<Value = Performance> {
        (prop_oneof![Just("hamlet"), Just("as-like"), Just("othello")], 0u32..500)
            .prop_map(|(id, audience)| Performance::new(id, audience))
    }

    proptest! {
        #[test]
        fn totals_equal_sum_of_parts(performances in prop::collection::vec(performance_strategy(), 0..20)) {
            let catalog = big_co_catalog();
            let summary = PerformanceSummary { customer: "Anyone".to_string(), performances };

            let mut amount = 0u64;
            let mut credits = 0u64;
            for performance in &summary.performances {
                let play = catalog.resolve(performance).unwrap();
                amount += amount_for(play, performance).minor_units();
                credits += credits_for(play, performance);
            }

            prop_assert_eq!(total_amount(&summary, &catalog), Ok(Money::from_minor(amount)));
            prop_assert_eq!(total_credits(&summary, &catalog), Ok(credits));
        }
    }
}
