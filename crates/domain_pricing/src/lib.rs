//! Pricing Domain
//!
//! This crate holds the rules that turn a booked performance into a charge
//! and a number of loyalty credits, and the aggregation of those rules over
//! a customer's bookings.
//!
//! # Pricing Rules
//!
//! | Genre   | Base    | Large audience                         | Per seat |
//! |---------|---------|----------------------------------------|----------|
//! | Tragedy | $400.00 | +$10.00 per attendee above 30          | -        |
//! | Comedy  | $300.00 | +$100.00 and $5.00 per attendee above 20 | +$3.00 |
//!
//! Every performance earns one credit per attendee above 30; comedies earn an
//! extra credit for every five attendees.
//!
//! # Example
//!
//! ```rust
//! use domain_pricing::{amount_for, credits_for, Performance, Play};
//!
//! let hamlet = Play::tragedy("Hamlet");
//! let performance = Performance::new("hamlet", 35);
//!
//! assert_eq!(amount_for(&hamlet, &performance).minor_units(), 45_000);
//! assert_eq!(credits_for(&hamlet, &performance), 5);
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod performance;
pub mod play;

pub use catalog::PlayCatalog;
pub use engine::{
    amount_for, charge_for, credits_for, total_amount, total_credits, Credits, PerformanceCharge,
};
pub use error::PricingError;
pub use performance::{Performance, PerformanceSummary};
pub use play::{Genre, Play, PlayRecord};
