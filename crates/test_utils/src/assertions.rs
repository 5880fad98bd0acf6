//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for statements that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_pricing::{amount_for, credits_for, PerformanceSummary, PlayCatalog};
use domain_statement::Statement;

/// Asserts that a statement's totals equal the sums over its rows
///
/// # Panics
///
/// Panics if either total differs from the sum of its line items
pub fn assert_totals_match_line_items(statement: &Statement) {
    let amounts: Vec<Money> = statement.line_items().iter().map(|i| i.amount()).collect();
    let line_amount = Money::checked_sum(&amounts).expect("Line amounts overflow");
    let line_credits: u64 = statement.line_items().iter().map(|i| i.credits()).sum();

    assert_eq!(
        line_amount,
        statement.total_amount(),
        "Line items sum to {} but statement total is {}",
        line_amount,
        statement.total_amount()
    );
    assert_eq!(
        line_credits,
        statement.total_credits(),
        "Line items earn {} credits but statement total is {}",
        line_credits,
        statement.total_credits()
    );
}

/// Asserts that a statement has one row per booked performance, in order,
/// each priced from scratch against the catalog
///
/// # Panics
///
/// Panics on any row count, order, name, audience, amount or credit mismatch
pub fn assert_rows_follow_summary(
    statement: &Statement,
    summary: &PerformanceSummary,
    catalog: &PlayCatalog,
) {
    assert_eq!(statement.customer(), summary.customer, "Customer mismatch");
    assert_eq!(
        statement.line_items().len(),
        summary.performances.len(),
        "Expected one line item per performance"
    );

    for (index, (item, performance)) in statement
        .line_items()
        .iter()
        .zip(&summary.performances)
        .enumerate()
    {
        let play = catalog
            .get(performance.play_id.as_str())
            .unwrap_or_else(|| panic!("Row {index}: play '{}' not in catalog", performance.play_id));

        assert_eq!(item.play_name(), play.name, "Row {index}: play name");
        assert_eq!(item.audience(), performance.audience, "Row {index}: audience");
        assert_eq!(item.amount(), amount_for(play, performance), "Row {index}: amount");
        assert_eq!(item.credits(), credits_for(play, performance), "Row {index}: credits");
    }
}

/// Asserts that a rendered amount uses the `$X,XXX.XX` layout
///
/// # Panics
///
/// Panics if the text is not a dollar sign, comma-grouped digits, a point
/// and exactly two fraction digits
pub fn assert_usd_format(text: &str) {
    let body = text
        .strip_prefix('$')
        .unwrap_or_else(|| panic!("'{text}' does not start with '$'"));
    let (whole, fraction) = body
        .split_once('.')
        .unwrap_or_else(|| panic!("'{text}' has no decimal point"));

    assert_eq!(fraction.len(), 2, "'{text}' must have two fraction digits");
    assert!(fraction.chars().all(|c| c.is_ascii_digit()), "'{text}' fraction is not numeric");

    let groups: Vec<&str> = whole.split(',').collect();
    assert!(
        (1..=3).contains(&groups[0].len()),
        "'{text}' leading group must have 1-3 digits"
    );
    for group in &groups[1..] {
        assert_eq!(group.len(), 3, "'{text}' has a malformed thousands group");
    }
    assert!(
        groups.iter().all(|g| g.chars().all(|c| c.is_ascii_digit())),
        "'{text}' whole part is not numeric"
    );
}
