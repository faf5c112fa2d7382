//! The fixed price list shown on the ordering menu.

use crate::money::Money;
use log::warn;

/// One purchasable item with its unit price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub price: Money,
}

/// An immutable, ordered list of catalog entries.
///
/// Declaration order defines the menu numbering: the first entry is item 1.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog from `(name, price)` pairs in menu order.
    ///
    /// Later pairs whose name is already present are skipped, so names stay
    /// unique. Pairs with a zero or negative price are skipped as well.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        let mut catalog = Catalog {
            entries: Vec::new(),
        };
        for (name, price) in entries {
            let name = name.into();
            if catalog.entries.iter().any(|e| e.name == name) {
                warn!("Duplicate catalog entry {:?}, ignoring", name);
                continue;
            }
            if !price.is_positive() {
                warn!("Catalog entry {:?} has non-positive price {}, ignoring", name, price);
                continue;
            }
            catalog.entries.push(CatalogEntry { name, price });
        }
        catalog
    }

    /// The store's standard price list.
    pub fn grocery() -> Self {
        Catalog::new([
            ("Rice (1kg)", Money::from_pesos(50)),
            ("Eggs (dozen)", Money::from_pesos(75)),
            ("Milk (1L)", Money::from_pesos(60)),
            ("Bread (loaf)", Money::from_pesos(40)),
            ("Chicken (1kg)", Money::from_pesos(180)),
        ])
    }

    /// Entries with their 1-based menu index.
    pub fn list_entries(&self) -> impl Iterator<Item = (usize, &CatalogEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    /// Looks up an entry by its 1-based menu index.
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Menu index of the "Add new product" option.
    pub fn add_new_index(&self) -> usize {
        self.entries.len() + 1
    }
}
