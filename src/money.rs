//! Fixed-point peso amounts with 2 decimal places.
//!
//! Wraps `rust_decimal` and keeps every value at the same scale so that
//! subtotals, totals and change add up exactly.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A monetary amount held at exactly 2 decimal places.
///
/// `Display` always prints two decimals and respects width and alignment,
/// so amounts can be dropped straight into padded table columns.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use grocery_pos::Money;
///
/// let price = Money::from_str("12.5").unwrap();
/// assert_eq!(price.to_string(), "12.50");
/// assert_eq!(format!("[{:>7}]", price), "[  12.50]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero pesos.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a `Money` from a `Decimal`, rounding half away from zero to 2 places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Whole pesos, as used by the built-in catalog.
    pub fn from_pesos(pesos: i64) -> Self {
        Money::new(Decimal::from(pesos))
    }

    /// Returns `true` if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Adds two amounts, or `None` if the result does not fit.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money::new)
    }

    /// Subtracts `rhs`, or `None` if the result does not fit.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Money::new)
    }

    /// Multiplies by a quantity, or `None` if the result does not fit.
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Money::new)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:.2}", self.0))
    }
}
