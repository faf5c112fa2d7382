//! Line items and the running cart.
//!
//! Maintains the invariant: every line item has a positive price and a
//! quantity of at least 1, and the cart total is the sum of the subtotals.

use crate::error::InputError;
use crate::money::Money;

/// One entry on the cart, frozen at the moment it was added.
///
/// Line items are never edited or merged; picking the same product twice
/// yields two separate entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    name: String,
    unit_price: Money,
    quantity: u32,
    subtotal: Money,
}

impl LineItem {
    /// Creates a line item, rejecting a non-positive price or a zero quantity.
    ///
    /// A subtotal too large to represent is reported as [`InputError::OutOfRange`].
    pub fn new(
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Result<Self, InputError> {
        if !unit_price.is_positive() || quantity == 0 {
            return Err(InputError::NotPositive);
        }

        let subtotal = unit_price
            .checked_mul(quantity)
            .ok_or(InputError::OutOfRange)?;

        Ok(LineItem {
            name: name.into(),
            unit_price,
            quantity,
            subtotal,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }
}

/// Line items in the order they were added, with their running total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
    total: Money,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            total: Money::ZERO,
        }
    }

    /// Appends a line item at the end of the cart.
    ///
    /// Refuses the item, leaving the cart unchanged, if the new total would
    /// not fit.
    pub fn add(&mut self, item: LineItem) -> Result<(), InputError> {
        self.total = self
            .total
            .checked_add(item.subtotal)
            .ok_or(InputError::OutOfRange)?;
        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all subtotals.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Removes every line item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Money::ZERO;
    }
}
