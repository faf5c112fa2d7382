//! Cart display, payment settlement and the checkout flow.

use crate::cart::Cart;
use crate::error::{PaymentError, Result};
use crate::input::parse_amount;
use crate::money::Money;
use crate::receipt;
use crate::terminal::Terminal;
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Width of the dashed rules around the item table.
pub const TABLE_WIDTH: usize = 42;

/// A settled cash sale. Lives only for one checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub total: Money,
    pub payment: Money,
    pub change: Money,
}

impl Transaction {
    /// Settles `total` against a cash `payment`.
    ///
    /// Payments equal to the total are accepted with zero change; anything
    /// less is refused with the exact missing amount.
    pub fn settle(total: Money, payment: Money) -> std::result::Result<Self, PaymentError> {
        if payment < total {
            let short_by = total
                .checked_sub(payment)
                .ok_or(PaymentError::OutOfRange)?;
            return Err(PaymentError::Insufficient { short_by });
        }

        let change = payment
            .checked_sub(total)
            .ok_or(PaymentError::OutOfRange)?;
        Ok(Transaction {
            total,
            payment,
            change,
        })
    }
}

/// Writes the item table followed by the TOTAL row.
pub fn write_cart_table<W: Write>(out: &mut W, cart: &Cart) -> io::Result<()> {
    writeln!(out, "{:<18}{:<5}{:<8}{:>8}", "Item", "Qty", "Price", "Total")?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;
    for item in cart.items() {
        writeln!(
            out,
            "{:<18}{:<5}₱{:<7}₱{:>7}",
            item.name(),
            item.quantity(),
            item.unit_price(),
            item.subtotal()
        )?;
    }
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;
    write_amount_row(out, "TOTAL:", cart.total())
}

/// Writes a labelled amount row such as `TOTAL:` or `Change:`.
pub fn write_amount_row<W: Write>(out: &mut W, label: &str, amount: Money) -> io::Result<()> {
    writeln!(out, "{:<30} ₱{:>8}", label, amount)
}

/// Shows the current cart. Never modifies it.
pub fn view_cart<R: BufRead, W: Write>(term: &mut Terminal<R, W>, cart: &Cart) -> Result<()> {
    term.say("\n=== 🛒 Current Cart ===")?;
    if cart.is_empty() {
        return term.say("Your cart is empty.");
    }

    write_cart_table(term.output(), cart)?;
    Ok(())
}

/// Collects cash for the cart, prints the receipt and empties the cart.
///
/// Returns `None` without prompting when the cart is empty. Short payments
/// are refused until the operator tenders enough.
pub fn checkout<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    cart: &mut Cart,
) -> Result<Option<Transaction>> {
    if cart.is_empty() {
        term.say("\nYour cart is empty. Please order items first.")?;
        return Ok(None);
    }

    let total = cart.total();
    term.say("\n=== Checkout Summary ===")?;
    write_cart_table(term.output(), cart)?;

    let transaction = loop {
        let text = term.prompt("\nEnter payment amount (₱): ")?;
        let payment = match parse_amount(&text) {
            Ok(payment) => payment,
            Err(e) => {
                debug!("Rejected payment: {}", e);
                term.say("Please enter a valid number.")?;
                continue;
            }
        };

        match Transaction::settle(total, payment) {
            Ok(transaction) => break transaction,
            Err(PaymentError::Insufficient { short_by }) => {
                debug!("Payment {} short of {} by {}", payment, total, short_by);
                term.say(format!(
                    "Insufficient payment. You are short by ₱{}. Please enter an amount higher than total.",
                    short_by
                ))?;
            }
            Err(PaymentError::OutOfRange) => {
                debug!("Rejected payment {}: out of range", payment);
                term.say("Please enter a valid number.")?;
            }
        }
    };

    receipt::print_receipt(term.output(), cart, &transaction)?;
    info!(
        "Sale settled: {} line(s), total {}, paid {}, change {}",
        cart.len(),
        transaction.total,
        transaction.payment,
        transaction.change
    );

    cart.clear();
    term.say("\nTransaction complete. Returning to main menu...")?;
    Ok(Some(transaction))
}
