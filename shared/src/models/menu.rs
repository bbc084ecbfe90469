//! Menu Catalog Model
//!
//! Static price list handed to the ledger at startup. The ledger only reads
//! it; unit prices are copied onto line items when an order is placed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Menu entry (name + unit price)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub unit_price: Decimal,
}

/// Immutable mapping from item name to unit price
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCatalog {
    prices: BTreeMap<String, Decimal>,
}

impl MenuCatalog {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            prices: items
                .into_iter()
                .map(|(name, price)| (name.into(), price))
                .collect(),
        }
    }

    /// Unit price for `name`, exact (case-sensitive) match
    pub fn price_of(&self, name: &str) -> Option<Decimal> {
        self.prices.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prices.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Entries in name order
    pub fn items(&self) -> impl Iterator<Item = MenuItem> + '_ {
        self.prices.iter().map(|(name, price)| MenuItem {
            name: name.clone(),
            unit_price: *price,
        })
    }
}
