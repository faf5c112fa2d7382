//! Top-level menu loop. Owns the cart for the whole session.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{checkout, view_cart};
use crate::error::{PosError, Result};
use crate::ordering::select_items;
use crate::terminal::Terminal;
use log::{debug, info, warn};
use std::io::{BufRead, Write};

const BANNER_RULE: &str = "==================================";

/// A main menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    OrderItems,
    ViewCart,
    Checkout,
    Exit,
}

impl MenuChoice {
    /// Maps the operator's raw choice; `None` for anything but `1`-`4`.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(MenuChoice::OrderItems),
            "2" => Some(MenuChoice::ViewCart),
            "3" => Some(MenuChoice::Checkout),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Runs one register session until the operator exits or input ends.
///
/// End of input at any prompt counts as choosing Exit: whatever flow was in
/// progress is abandoned. Returns the cart as it stood when the session ended.
pub fn run_session<R: BufRead, W: Write>(
    catalog: &Catalog,
    term: &mut Terminal<R, W>,
) -> Result<Cart> {
    let mut cart = Cart::new();

    match serve(catalog, term, &mut cart) {
        Ok(()) => {}
        Err(PosError::InputClosed) => {
            info!("Input closed, ending session");
            term.say("")?;
        }
        Err(e) => return Err(e),
    }

    if !cart.is_empty() {
        warn!("Session ended with {} unpaid line item(s)", cart.len());
    }
    term.say("Thank you! Have a nice day.")?;
    Ok(cart)
}

fn serve<R: BufRead, W: Write>(
    catalog: &Catalog,
    term: &mut Terminal<R, W>,
    cart: &mut Cart,
) -> Result<()> {
    loop {
        show_main_menu(term)?;
        let line = term.prompt("Enter your choice: ")?;

        match MenuChoice::parse(&line) {
            Some(MenuChoice::OrderItems) => select_items(term, catalog, cart)?,
            Some(MenuChoice::ViewCart) => view_cart(term, cart)?,
            Some(MenuChoice::Checkout) => {
                checkout(term, cart)?;
            }
            Some(MenuChoice::Exit) => return Ok(()),
            None => {
                debug!("Rejected menu choice {:?}", line);
                term.say("Invalid choice. Please enter a number from 1 to 4.")?;
            }
        }
    }
}

fn show_main_menu<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<()> {
    term.say(format!("\n{}", BANNER_RULE))?;
    term.say("Welcome to the Grocery Store!")?;
    term.say(BANNER_RULE)?;
    term.say("1. Order Items")?;
    term.say("2. View Cart")?;
    term.say("3. Proceed to Payment")?;
    term.say("4. Exit")?;
    term.say(BANNER_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Cart, String) {
        let mut term = Terminal::new(Cursor::new(script.to_string()), Vec::new());
        let cart = run_session(&Catalog::grocery(), &mut term).unwrap();
        (cart, String::from_utf8(term.into_output()).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::OrderItems));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::ViewCart));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Checkout));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_exit_immediately() {
        let (cart, output) = run("4\n");
        assert!(cart.is_empty());
        assert!(output.contains("Welcome to the Grocery Store!"));
        assert!(output.contains("3. Proceed to Payment"));
        assert!(output.ends_with("Thank you! Have a nice day.\n"));
    }

    #[test]
    fn test_banner_layout() {
        let (_, output) = run("4\n");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], BANNER_RULE);
        assert_eq!(lines[2], "Welcome to the Grocery Store!");
        assert_eq!(lines[3], BANNER_RULE);
        assert_eq!(lines[4], "1. Order Items");
        assert_eq!(lines[8], BANNER_RULE);
    }

    #[test]
    fn test_invalid_choice_redraws_menu() {
        let (_, output) = run("9\n4\n");
        assert!(output.contains("Invalid choice. Please enter a number from 1 to 4."));
        assert_eq!(output.matches("Welcome to the Grocery Store!").count(), 2);
    }

    #[test]
    fn test_cart_survives_between_visits() {
        let (cart, output) = run("1\n1\n1\n0\n1\n3\n2\n0\n2\n4\n");
        assert_eq!(cart.len(), 2);
        assert!(output.contains("TOTAL:                         ₱  170.00"));
    }

    #[test]
    fn test_full_sale_clears_cart() {
        let (cart, output) = run("1\n5\n1\n0\n3\n200\n2\n4\n");
        assert!(cart.is_empty());
        assert!(output.contains("Change:                        ₱   20.00"));
        assert!(output.contains("Your total exceeds ₱100"));
        assert!(output.contains("Your cart is empty."));
    }

    #[test]
    fn test_end_of_input_is_implicit_exit() {
        let (cart, output) = run("1\n2\n3\n");
        assert_eq!(cart.len(), 1);
        assert!(output.ends_with("\nThank you! Have a nice day.\n"));
    }

    #[test]
    fn test_end_of_input_during_checkout_prints_no_receipt() {
        let (cart, output) = run("1\n4\n1\n0\n3\n5\n");
        assert_eq!(cart.len(), 1);
        assert!(output.contains("You are short by ₱35.00."));
        assert!(!output.contains("GROCERY STORE RECEIPT"));
    }
}
