//! Printed receipt for a settled sale.

use crate::cart::Cart;
use crate::checkout::{write_amount_row, write_cart_table, Transaction, TABLE_WIDTH};
use crate::money::Money;
use chrono::{Local, NaiveDateTime};
use std::io::{self, Write};

/// Totals strictly above this earn the big-order thank-you.
const BIG_ORDER_THRESHOLD: i64 = 100;

/// Timestamp layout on the `Date:` line.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A receipt ready to print. Rendering is infallible apart from writer errors.
pub struct Receipt<'a> {
    cart: &'a Cart,
    transaction: &'a Transaction,
    printed_at: NaiveDateTime,
}

impl<'a> Receipt<'a> {
    pub fn new(cart: &'a Cart, transaction: &'a Transaction, printed_at: NaiveDateTime) -> Self {
        Receipt {
            cart,
            transaction,
            printed_at,
        }
    }

    /// The closing message, chosen by the sale total.
    pub fn thank_you(&self) -> &'static str {
        if self.transaction.total > Money::from_pesos(BIG_ORDER_THRESHOLD) {
            " Thank you! Your total exceeds ₱100. Enjoy your shopping!"
        } else {
            " Thank you for shopping with us!"
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let double_rule = "=".repeat(TABLE_WIDTH);
        let single_rule = "-".repeat(TABLE_WIDTH);

        writeln!(out, "\n{}", double_rule)?;
        writeln!(out, " GROCERY STORE RECEIPT")?;
        writeln!(out, "{}", double_rule)?;
        writeln!(out, "Date: {}", self.printed_at.format(DATE_FORMAT))?;
        writeln!(out, "{}", single_rule)?;

        write_cart_table(out, self.cart)?;
        write_amount_row(out, "Payment:", self.transaction.payment)?;
        write_amount_row(out, "Change:", self.transaction.change)?;
        writeln!(out, "{}", single_rule)?;

        writeln!(out, "{}", self.thank_you())?;
        writeln!(out, "{}", double_rule)?;
        writeln!(out, "        Please Come Again Soon! ")?;
        writeln!(out, "{}", double_rule)?;
        Ok(())
    }
}

/// Prints the receipt stamped with the local wall-clock time.
pub fn print_receipt<W: Write>(
    out: &mut W,
    cart: &Cart,
    transaction: &Transaction,
) -> io::Result<()> {
    let now = Local::now().naive_local();
    Receipt::new(cart, transaction, now).write_to(out)
}
