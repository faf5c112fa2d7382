//! Error types for the point-of-sale session.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, PosError>;

/// Errors that end the session.
#[derive(Error, Debug)]
pub enum PosError {
    /// Failed to read from or write to the terminal
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operator closed the input stream while a prompt was waiting
    #[error("input stream closed")]
    InputClosed,
}

/// Rejected operator input. Always recovered by re-prompting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Text that does not parse as a number
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// A price or quantity of zero or less
    #[error("value must be greater than zero")]
    NotPositive,

    /// An amount too large to represent once multiplied or totalled
    #[error("amount out of range")]
    OutOfRange,

    /// A selection token that does not name a catalog entry
    #[error("Invalid item number: {0}")]
    InvalidItemNumber(String),
}

/// A cash payment that cannot settle the sale.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    /// The payment is less than the total
    #[error("short by {short_by}")]
    Insufficient { short_by: Money },

    /// The payment is too far from the total for the difference to be represented
    #[error("payment out of range")]
    OutOfRange,
}
