//! # Grocery POS
//!
//! A single-session, terminal point-of-sale simulator for a small grocery
//! store. The cashier picks catalog items or enters ad hoc products, reviews
//! the running cart and settles it in cash against a printed receipt.
//!
//! ## Design Principles
//!
//! - **Fixed-point money**: peso amounts at 2 decimal places via `rust_decimal`
//! - **Explicit ownership**: the catalog is built at startup and the cart is
//!   owned by the menu loop, lent to each flow
//! - **Validated values**: line items reject non-positive prices and quantities
//! - **Scriptable I/O**: every flow runs over any `BufRead`/`Write` pair
//!
//! ## Example
//!
//! ```
//! use grocery_pos::{run_session, Catalog, Terminal};
//! use std::io::Cursor;
//!
//! let script = "1\n1\n2\n0\n3\n150\n4\n";
//! let mut term = Terminal::new(Cursor::new(script), Vec::new());
//! let cart = run_session(&Catalog::grocery(), &mut term).unwrap();
//! assert!(cart.is_empty());
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod input;
pub mod menu;
pub mod money;
pub mod ordering;
pub mod receipt;
pub mod terminal;

pub use cart::{Cart, LineItem};
pub use catalog::{Catalog, CatalogEntry};
pub use checkout::{checkout, view_cart, Transaction};
pub use error::{InputError, PaymentError, PosError, Result};
pub use menu::{run_session, MenuChoice};
pub use money::Money;
pub use ordering::select_items;
pub use receipt::{print_receipt, Receipt};
pub use terminal::Terminal;
