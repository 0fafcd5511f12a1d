//! Product/stock catalog contract.
//!
//! The catalog is an external, read-only collaborator: callers consult it to
//! decide whether an add or a quantity bump *should* be attempted (e.g.,
//! refuse to go past available stock). The store itself performs no stock
//! validation - it will happily hold a quantity the catalog cannot fulfill,
//! and the display layer reconciles.

use std::collections::HashMap;

use golden_fig_core::{ItemId, Price, Quantity};

/// What the catalog knows about a purchasable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Unit price.
    pub price: Price,
    /// Units currently available.
    pub stock_quantity: u32,
}

/// Read-only lookup of price and stock by item id.
pub trait StockCatalog {
    /// Look up an item. `None` means the item is unknown to the catalog
    /// (delisted or never existed).
    fn entry(&self, item: &ItemId) -> Option<CatalogEntry>;

    /// Whether `desired` units of `item` are available.
    ///
    /// Unknown items are never available.
    fn in_stock(&self, item: &ItemId, desired: Quantity) -> bool {
        self.entry(item)
            .is_some_and(|e| e.stock_quantity >= desired.get())
    }
}

/// Map-backed catalog for tests and fixtures.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: HashMap<ItemId, CatalogEntry>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, item: ItemId, entry: CatalogEntry) {
        self.entries.insert(item, entry);
    }
}

impl StockCatalog for StaticCatalog {
    fn entry(&self, item: &ItemId) -> Option<CatalogEntry> {
        self.entries.get(item).cloned()
    }
}
