//! Unit tests for the Money module
//!
//! Tests cover money creation, checked arithmetic, major-unit conversion,
//! and en-US display formatting.

use core_kernel::{Money, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050);
        assert_eq!(m.to_major(), dec!(100.50));
        assert_eq!(m.minor_units(), 10050);
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero();
        assert_eq!(m.minor_units(), 0);
        assert_eq!(m, Money::default());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add() {
        let a = Money::from_minor(65000);
        let b = Money::from_minor(58000);
        assert_eq!(a.checked_add(&b), Ok(Money::from_minor(123000)));
    }

    #[test]
    fn test_checked_sum() {
        let amounts = [
            Money::from_minor(65000),
            Money::from_minor(58000),
            Money::from_minor(50000),
        ];
        assert_eq!(Money::checked_sum(&amounts), Ok(Money::from_minor(173000)));
    }

    #[test]
    fn test_checked_sum_of_nothing_is_zero() {
        let amounts: Vec<Money> = Vec::new();
        assert_eq!(Money::checked_sum(&amounts), Ok(Money::zero()));
    }

    #[test]
    fn test_checked_sum_overflow() {
        let amounts = [Money::from_minor(u64::MAX), Money::from_minor(1)];
        assert_eq!(Money::checked_sum(&amounts), Err(MoneyError::Overflow));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_money_display_usd() {
        assert_eq!(Money::from_minor(65000).to_string(), "$650.00");
        assert_eq!(Money::from_minor(58000).to_string(), "$580.00");
    }

    #[test]
    fn test_money_display_thousands_separator() {
        assert_eq!(Money::from_minor(100000).to_string(), "$1,000.00");
        assert_eq!(Money::from_minor(10000000).to_string(), "$100,000.00");
        assert_eq!(Money::from_minor(100000000).to_string(), "$1,000,000.00");
    }

    #[test]
    fn test_money_display_keeps_two_fraction_digits() {
        assert_eq!(Money::from_minor(47510).to_string(), "$475.10");
        assert_eq!(Money::from_minor(1).to_string(), "$0.01");
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_serializes_as_minor_units() {
        let json = serde_json::to_string(&Money::from_minor(43000)).unwrap();
        assert_eq!(json, "43000");
    }
}
