//! Charge and loyalty-credit rules
//!
//! All amounts are integer cents. The per-performance functions are total
//! over a typed `Play`; the aggregates can only fail on a missing catalog
//! entry or on overflow.

use core_kernel::Money;

use crate::catalog::PlayCatalog;
use crate::error::PricingError;
use crate::performance::{Performance, PerformanceSummary};
use crate::play::{Genre, Play};

/// Loyalty credits, a non-monetary reward unit
pub type Credits = u64;

const TRAGEDY_BASE: u64 = 40_000;
const TRAGEDY_THRESHOLD: u32 = 30;
const TRAGEDY_PER_EXTRA_SEAT: u64 = 1_000;

const COMEDY_BASE: u64 = 30_000;
const COMEDY_THRESHOLD: u32 = 20;
const COMEDY_LARGE_AUDIENCE_FEE: u64 = 10_000;
const COMEDY_PER_EXTRA_SEAT: u64 = 500;
const COMEDY_PER_SEAT: u64 = 300;

const CREDIT_THRESHOLD: u32 = 30;
const COMEDY_ATTENDEES_PER_BONUS_CREDIT: u32 = 5;

/// Charge and credits for a single performance, with the play it was priced as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceCharge<'a> {
    pub play: &'a Play,
    pub amount: Money,
    pub credits: Credits,
}

/// Calculates the charge for one performance
///
/// * Tragedy: 40000, plus 1000 per attendee above 30.
/// * Comedy: 30000, plus 10000 and 500 per attendee above 20 once the
///   audience exceeds 20, plus 300 per attendee.
pub fn amount_for(play: &Play, performance: &Performance) -> Money {
    let audience = performance.audience;
    let minor = match play.genre {
        Genre::Tragedy => tragedy_amount(audience),
        Genre::Comedy => comedy_amount(audience),
    };
    Money::from_minor(minor)
}

fn tragedy_amount(audience: u32) -> u64 {
    let mut amount = TRAGEDY_BASE;
    if audience > TRAGEDY_THRESHOLD {
        amount += TRAGEDY_PER_EXTRA_SEAT * u64::from(audience - TRAGEDY_THRESHOLD);
    }
    amount
}

fn comedy_amount(audience: u32) -> u64 {
    let mut amount = COMEDY_BASE;
    if audience > COMEDY_THRESHOLD {
        amount += COMEDY_LARGE_AUDIENCE_FEE
            + COMEDY_PER_EXTRA_SEAT * u64::from(audience - COMEDY_THRESHOLD);
    }
    amount + COMEDY_PER_SEAT * u64::from(audience)
}

/// Calculates loyalty credits for one performance
///
/// One credit per attendee above 30, plus one per five attendees for comedies.
pub fn credits_for(play: &Play, performance: &Performance) -> Credits {
    let audience = performance.audience;
    let base = Credits::from(audience.saturating_sub(CREDIT_THRESHOLD));
    match play.genre {
        Genre::Comedy => base + Credits::from(audience / COMEDY_ATTENDEES_PER_BONUS_CREDIT),
        Genre::Tragedy => base,
    }
}

/// Prices one performance against the catalog
///
/// # Errors
///
/// Returns `PricingError::MissingPlayReference` if the play is not in the catalog.
pub fn charge_for<'a>(
    performance: &Performance,
    catalog: &'a PlayCatalog,
) -> Result<PerformanceCharge<'a>, PricingError> {
    let play = catalog.resolve(performance)?;
    let charge = PerformanceCharge {
        play,
        amount: amount_for(play, performance),
        credits: credits_for(play, performance),
    };
    tracing::debug!(
        play_id = %performance.play_id,
        genre = %play.genre,
        audience = performance.audience,
        amount = charge.amount.minor_units(),
        credits = charge.credits,
        "Priced performance"
    );
    Ok(charge)
}

/// Sums `amount_for` over every performance in the summary
///
/// # Errors
///
/// Returns `PricingError::MissingPlayReference` for the first performance whose
/// play is not in the catalog, or `PricingError::Money` on overflow.
pub fn total_amount(summary: &PerformanceSummary, catalog: &PlayCatalog) -> Result<Money, PricingError> {
    summary
        .performances
        .iter()
        .try_fold(Money::zero(), |total, performance| {
            let play = catalog.resolve(performance)?;
            Ok(total.checked_add(&amount_for(play, performance))?)
        })
}

/// Sums `credits_for` over every performance in the summary
///
/// # Errors
///
/// Returns `PricingError::MissingPlayReference` for the first performance whose
/// play is not in the catalog.
pub fn total_credits(summary: &PerformanceSummary, catalog: &PlayCatalog) -> Result<Credits, PricingError> {
    summary
        .performances
        .iter()
        .try_fold(0, |total: Credits, performance| {
            let play = catalog.resolve(performance)?;
            Ok(total.saturating_add(credits_for(play, performance)))
        })
}
