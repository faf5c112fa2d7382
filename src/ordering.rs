//! The "Order Items" flow: catalog picks and ad hoc products.

use crate::cart::{Cart, LineItem};
use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{InputError, Result};
use crate::input::{
    normalize_product_name, parse_amount, parse_quantity, parse_selection, Selection,
};
use crate::terminal::Terminal;
use log::debug;
use std::io::{BufRead, Write};

const ADD_NEW_INVALID_NUMBERS: &str = "Please enter valid numbers for price and quantity.";
const ADD_NEW_NOT_POSITIVE: &str = "Price and quantity must be greater than zero.";
const QUANTITY_INVALID_NUMBER: &str = "Please enter a valid number for quantity.";
const QUANTITY_NOT_POSITIVE: &str = "Quantity must be at least 1.";

/// Runs the ordering menu until the operator enters `0`.
///
/// Every valid pick is appended to `cart` as soon as it is confirmed; nothing
/// is rolled back when a later token on the same line is rejected.
pub fn select_items<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    catalog: &Catalog,
    cart: &mut Cart,
) -> Result<()> {
    loop {
        show_catalog(term, catalog)?;
        let line = term.prompt("\nEnter item number(s) (e.g., 1,3,5): ")?;

        match parse_selection(&line, catalog) {
            Selection::Back => return Ok(()),
            Selection::AddNew => add_new_product(term, cart)?,
            Selection::Items(picks) => {
                for pick in picks {
                    match pick {
                        Ok(entry) => add_catalog_item(term, entry, cart)?,
                        Err(e) => {
                            debug!("Rejected selection token: {}", e);
                            term.say(e.to_string())?;
                        }
                    }
                }
            }
        }
    }
}

/// Prints the numbered catalog plus the two extra options.
fn show_catalog<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    catalog: &Catalog,
) -> Result<()> {
    term.say("\n=== 🛒 Grocery Items ===")?;
    for (index, entry) in catalog.list_entries() {
        term.say(format!("{}. {:<15} ₱{:>6}", index, entry.name, entry.price))?;
    }
    term.say(format!("{}. Add new product", catalog.add_new_index()))?;
    term.say("0. Back to Main Menu")
}

/// Prompts for a quantity of `entry` and appends it.
fn add_catalog_item<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    entry: &CatalogEntry,
    cart: &mut Cart,
) -> Result<()> {
    let text = term.prompt(&format!("Enter quantity for {}: ", entry.name))?;
    let quantity = match parse_quantity(&text) {
        Ok(quantity) => quantity,
        Err(InputError::NotPositive) => return term.say(QUANTITY_NOT_POSITIVE),
        Err(e) => {
            debug!("Rejected quantity for {}: {}", entry.name, e);
            return term.say(QUANTITY_INVALID_NUMBER);
        }
    };

    match LineItem::new(entry.name.clone(), entry.price, quantity)
        .and_then(|item| add_line(cart, item))
    {
        Ok(confirmation) => term.say(confirmation),
        Err(InputError::NotPositive) => term.say(QUANTITY_NOT_POSITIVE),
        Err(e) => {
            debug!("Rejected {} x {}: {}", quantity, entry.name, e);
            term.say(QUANTITY_INVALID_NUMBER)
        }
    }
}

/// Registers a product that is not in the catalog.
///
/// Any bad field discards the whole entry; the operator starts over from the menu.
fn add_new_product<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    cart: &mut Cart,
) -> Result<()> {
    let name = normalize_product_name(&term.prompt("Enter new product name: ")?);

    let text = term.prompt(&format!("Enter price for {} (₱): ", name))?;
    let price = match parse_amount(&text) {
        Ok(price) => price,
        Err(e) => {
            debug!("Rejected price for {}: {}", name, e);
            return term.say(ADD_NEW_INVALID_NUMBERS);
        }
    };

    let text = term.prompt(&format!("Enter quantity for {}: ", name))?;
    let quantity = match parse_quantity(&text) {
        Ok(quantity) => quantity,
        Err(InputError::NotPositive) => return term.say(ADD_NEW_NOT_POSITIVE),
        Err(e) => {
            debug!("Rejected quantity for {}: {}", name, e);
            return term.say(ADD_NEW_INVALID_NUMBERS);
        }
    };

    match LineItem::new(name, price, quantity).and_then(|item| add_line(cart, item)) {
        Ok(confirmation) => term.say(confirmation),
        Err(InputError::NotPositive) => term.say(ADD_NEW_NOT_POSITIVE),
        Err(e) => {
            debug!("Rejected new product at {} x {}: {}", quantity, price, e);
            term.say(ADD_NEW_INVALID_NUMBERS)
        }
    }
}

/// Appends `item` to the cart and returns the confirmation line for it.
fn add_line(cart: &mut Cart, item: LineItem) -> std::result::Result<String, InputError> {
    let confirmation = format!(
        "Added {} x {} = ₱{}",
        item.quantity(),
        item.name(),
        item.subtotal()
    );
    cart.add(item)?;
    debug!("Cart line {}: {}", cart.len(), confirmation);
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use std::io::Cursor;
    use std::str::FromStr;

    fn run(script: &str, cart: &mut Cart) -> String {
        let mut term = Terminal::new(Cursor::new(script.to_string()), Vec::new());
        select_items(&mut term, &Catalog::grocery(), cart).unwrap();
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn test_zero_leaves_cart_untouched() {
        let mut cart = Cart::new();
        cart.add(LineItem::new("Milk (1L)", Money::from_pesos(60), 1).unwrap()).unwrap();
        let before = cart.clone();

        run("0\n", &mut cart);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_menu_lists_catalog_and_extra_options() {
        let output = run("0\n", &mut Cart::new());
        assert!(output.contains("=== 🛒 Grocery Items ==="));
        assert!(output.contains("1. Rice (1kg)      ₱ 50.00"));
        assert!(output.contains("5. Chicken (1kg)   ₱180.00"));
        assert!(output.contains("6. Add new product"));
        assert!(output.contains("0. Back to Main Menu"));
    }

    #[test]
    fn test_pick_one_item() {
        let mut cart = Cart::new();
        let output = run("1\n2\n0\n", &mut cart);

        assert_eq!(cart.len(), 1);
        let item = &cart.items()[0];
        assert_eq!(item.name(), "Rice (1kg)");
        assert_eq!(item.unit_price(), Money::from_pesos(50));
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.subtotal(), Money::from_pesos(100));
        assert_eq!(cart.total().to_string(), "100.00");
        assert!(output.contains("Enter quantity for Rice (1kg): "));
        assert!(output.contains("Added 2 x Rice (1kg) = ₱100.00"));
    }

    #[test]
    fn test_multiple_picks_with_invalid_token() {
        let mut cart = Cart::new();
        let output = run("1,9,3\n1\n2\n0\n", &mut cart);

        assert!(output.contains("Invalid item number: 9"));
        let names: Vec<_> = cart.items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Rice (1kg)", "Milk (1L)"]);
        assert_eq!(cart.total(), Money::from_pesos(170));
    }

    #[test]
    fn test_bad_quantity_skips_only_that_token() {
        let mut cart = Cart::new();
        let output = run("1,2,4\nlots\n0\n3\n0\n", &mut cart);

        assert!(output.contains(QUANTITY_INVALID_NUMBER));
        assert!(output.contains(QUANTITY_NOT_POSITIVE));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name(), "Bread (loaf)");
        assert_eq!(cart.items()[0].quantity(), 3);
    }

    #[test]
    fn test_add_new_product() {
        let mut cart = Cart::new();
        let output = run("6\n  soy sauce \n32.50\n2\n0\n", &mut cart);

        assert!(output.contains("Enter price for Soy Sauce (₱): "));
        assert!(output.contains("Added 2 x Soy Sauce = ₱65.00"));
        assert_eq!(cart.items()[0].unit_price(), Money::from_str("32.5").unwrap());
    }

    #[test]
    fn test_add_new_rejects_non_numeric_price_without_asking_quantity() {
        let mut cart = Cart::new();
        let output = run("6\nvinegar\nabc\n0\n", &mut cart);

        assert!(cart.is_empty());
        assert!(output.contains(ADD_NEW_INVALID_NUMBERS));
        assert!(!output.contains("Enter quantity for Vinegar"));
        // menu is redrawn after the rejection
        assert_eq!(output.matches("=== 🛒 Grocery Items ===").count(), 2);
    }

    #[test]
    fn test_add_new_rejects_non_positive_values() {
        let mut cart = Cart::new();
        let output = run("6\nvinegar\n0\n3\n6\nvinegar\n15\n-1\n0\n", &mut cart);

        assert!(cart.is_empty());
        assert_eq!(output.matches(ADD_NEW_NOT_POSITIVE).count(), 2);
    }

    #[test]
    fn test_ad_hoc_name_may_shadow_catalog_entry() {
        let mut cart = Cart::new();
        run("1\n1\n6\nrice (1kg)\n45\n1\n0\n", &mut cart);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].unit_price(), Money::from_pesos(50));
        assert_eq!(cart.items()[1].name(), "Rice (1Kg)");
        assert_eq!(cart.items()[1].unit_price(), Money::from_pesos(45));
    }

    #[test]
    fn test_add_new_with_overflowing_subtotal_is_rejected() {
        let mut cart = Cart::new();
        let output = run("6\ngold\n79228162514264337593543950\n5000\n0\n", &mut cart);

        assert!(cart.is_empty());
        assert!(output.contains(ADD_NEW_INVALID_NUMBERS));
        assert!(!output.contains("Added"));
        assert_eq!(output.matches("=== 🛒 Grocery Items ===").count(), 2);
    }

    #[test]
    fn test_item_that_would_overflow_total_is_rejected() {
        let mut cart = Cart::new();
        let script = "6\nvault\n79228162514264337593543950335\n1\n1\n1\n0\n";
        let output = run(script, &mut cart);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name(), "Vault");
        assert!(output.contains(QUANTITY_INVALID_NUMBER));
        assert!(!output.contains("Added 1 x Rice (1kg)"));
    }

    #[test]
    fn test_catalog_pick_with_valid_quantity_is_never_refused_as_quantity() {
        let catalog = Catalog::new([("Free", Money::ZERO), ("Coffee", Money::from_pesos(12))]);
        let mut cart = Cart::new();
        let mut term = Terminal::new(Cursor::new("1\n3\n0\n"), Vec::new());
        select_items(&mut term, &catalog, &mut cart).unwrap();
        let output = String::from_utf8(term.into_output()).unwrap();

        assert!(!output.contains("Free"));
        assert!(!output.contains(QUANTITY_NOT_POSITIVE));
        assert_eq!(cart.items()[0].name(), "Coffee");
        assert_eq!(cart.total(), Money::from_pesos(36));
    }

    #[test]
    fn test_closed_input_keeps_items_added_so_far() {
        let mut cart = Cart::new();
        let mut term = Terminal::new(Cursor::new("2\n1\n"), Vec::new());
        let result = select_items(&mut term, &Catalog::grocery(), &mut cart);

        assert!(matches!(result, Err(crate::error::PosError::InputClosed)));
        assert_eq!(cart.len(), 1);
    }
}
