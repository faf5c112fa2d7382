//! Parsing and validation of operator input.
//!
//! Everything here is pure: functions take the raw line and return a typed
//! value or an [`InputError`] for the calling flow to report.

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::InputError;
use crate::money::Money;
use std::str::FromStr;

/// What the operator asked for on the ordering menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// `0`: back to the main menu.
    Back,

    /// `N+1`: enter a product that is not in the catalog.
    AddNew,

    /// A comma-separated list of catalog picks, one result per token, in order.
    Items(Vec<Result<&'a CatalogEntry, InputError>>),
}

/// Interprets one line from the ordering menu against `catalog`.
///
/// `0` and `N+1` are only special as the whole line; inside a list they are
/// reported as invalid like any other out-of-range token.
pub fn parse_selection<'a>(line: &str, catalog: &'a Catalog) -> Selection<'a> {
    let line = line.trim();

    if line == "0" {
        return Selection::Back;
    }
    if line == catalog.add_new_index().to_string() {
        return Selection::AddNew;
    }

    Selection::Items(
        line.split(',')
            .map(|token| parse_item_number(token.trim(), catalog))
            .collect(),
    )
}

/// Resolves a token made only of ASCII digits to the catalog entry it numbers.
fn parse_item_number<'a>(
    token: &str,
    catalog: &'a Catalog,
) -> Result<&'a CatalogEntry, InputError> {
    let invalid = || InputError::InvalidItemNumber(token.to_string());

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token
        .parse::<usize>()
        .ok()
        .and_then(|index| catalog.get(index))
        .ok_or_else(invalid)
}

/// Parses a whole-number quantity of at least 1.
pub fn parse_quantity(text: &str) -> Result<u32, InputError> {
    let trimmed = text.trim();
    let value =
        i64::from_str(trimmed).map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if value <= 0 {
        return Err(InputError::NotPositive);
    }
    u32::try_from(value).map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Parses a peso amount. Sign is not checked here; callers decide what a
/// zero or negative amount means.
pub fn parse_amount(text: &str) -> Result<Money, InputError> {
    let trimmed = text.trim();
    Money::from_str(trimmed).map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Trims a product name and title-cases it: the first letter of every run of
/// letters is uppercased and the rest lowercased.
pub fn normalize_product_name(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len());
    let mut previous_is_letter = false;

    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            name.push(c);
            previous_is_letter = false;
        }
    }

    name
}
