//! Statement assembly
//!
//! A statement is built fresh from a performance summary and a play catalog
//! on every call. It carries integer amounts only; formatting happens in the
//! renderers.

use serde::Serialize;

use core_kernel::Money;
use domain_pricing::{
    charge_for, total_amount, total_credits, Credits, PerformanceSummary, PlayCatalog,
    PricingError,
};

use crate::error::StatementError;

/// One row of a statement, corresponding to a single performance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceLineItem {
    play_name: String,
    audience: u32,
    amount: Money,
    credits: Credits,
}

impl PerformanceLineItem {
    /// Display name of the play
    pub fn play_name(&self) -> &str {
        &self.play_name
    }

    /// Number of attendees
    pub fn audience(&self) -> u32 {
        self.audience
    }

    /// Charge for this performance
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Loyalty credits earned by this performance
    pub fn credits(&self) -> Credits {
        self.credits
    }
}

/// A customer's statement for one billing period
///
/// # Invariants
///
/// - One line item per performance, in booking order
/// - `total_amount` equals the sum of line-item amounts
/// - `total_credits` equals the sum of line-item credits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    customer: String,
    line_items: Vec<PerformanceLineItem>,
    total_amount: Money,
    total_credits: Credits,
}

impl Statement {
    /// Customer name
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Rows in booking order
    pub fn line_items(&self) -> &[PerformanceLineItem] {
        &self.line_items
    }

    /// Amount owed
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Credits earned
    pub fn total_credits(&self) -> Credits {
        self.total_credits
    }
}

/// Builds a statement for a customer's bookings
///
/// # Errors
///
/// Returns `StatementError::Pricing` if any performance refers to a play
/// missing from the catalog or an amount overflows. No partial statement is
/// produced.
pub fn build_statement(
    summary: &PerformanceSummary,
    catalog: &PlayCatalog,
) -> Result<Statement, StatementError> {
    let line_items = summary
        .performances
        .iter()
        .map(|performance| {
            let charge = charge_for(performance, catalog)?;
            Ok(PerformanceLineItem {
                play_name: charge.play.name.clone(),
                audience: performance.audience,
                amount: charge.amount,
                credits: charge.credits,
            })
        })
        .collect::<Result<Vec<_>, StatementError>>()?;

    let total_amount = total_amount(summary, catalog)?;
    let total_credits = total_credits(summary, catalog)?;

    let line_amount = Money::checked_sum(line_items.iter().map(|item| &item.amount))
        .map_err(PricingError::from)?;
    let line_credits: Credits = line_items.iter().map(|item| item.credits).sum();
    if line_amount != total_amount || line_credits != total_credits {
        return Err(StatementError::InconsistentTotals {
            line_amount,
            line_credits,
            total_amount,
            total_credits,
        });
    }

    tracing::info!(
        customer = %summary.customer,
        performances = line_items.len(),
        total_amount = total_amount.minor_units(),
        total_credits,
        "Built statement"
    );

    Ok(Statement {
        customer: summary.customer.clone(),
        line_items,
        total_amount,
        total_credits,
    })
}
