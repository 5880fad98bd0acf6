//! Core Kernel - Foundational types shared by the statement crates
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money held as integer cents with en-US display formatting
//! - The play identifier used to key catalogs

pub mod money;
pub mod identifiers;

pub use money::{Money, MoneyError};
pub use identifiers::PlayId;
