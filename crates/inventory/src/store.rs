//! The in-memory store and its mutation/query operations.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::warn;

use stockbook_core::{InventoryError, InventoryResult, ItemName};

/// Default threshold below which an item counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Mapping from item name to quantity on hand.
///
/// Backed by a `BTreeMap`, so every scan (report, low-stock check) runs in
/// lexicographic name order. Quantities are signed: `add_item` accepts
/// negative deltas and lets the running total go below zero without deleting
/// the entry; only `remove_item` deletes entries that reach zero or less.
/// That asymmetry mirrors the system this replaces and is kept deliberately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub(crate) items: BTreeMap<ItemName, i64>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    /// Add `qty` of `item`, creating the entry at zero if absent, and append
    /// a timestamped line describing the addition to `logs`.
    ///
    /// An invalid (empty) name is a `Validation` error and leaves both the
    /// store and `logs` untouched.
    pub fn try_add(
        &mut self,
        item: &str,
        qty: i64,
        logs: &mut Vec<String>,
    ) -> InventoryResult<()> {
        let name = ItemName::new(item)?;
        *self.items.entry(name).or_insert(0) += qty;
        logs.push(format!("{}: Added {qty} of {item}", Utc::now()));
        Ok(())
    }

    /// Absorbing wrapper over [`Inventory::try_add`]: a rejected addition is
    /// reported as a diagnostic and the call is a no-op.
    pub fn add_item(&mut self, item: &str, qty: i64, logs: &mut Vec<String>) {
        if let Err(err) = self.try_add(item, qty, logs) {
            warn!("{err}; ignoring add");
        }
    }

    /// Remove `qty` of `item`. If the remaining quantity is zero or less the
    /// entry is deleted entirely.
    pub fn try_remove(&mut self, item: &str, qty: i64) -> InventoryResult<()> {
        let Some(current) = self.items.get_mut(item) else {
            return Err(InventoryError::not_found(item));
        };
        *current -= qty;
        if *current <= 0 {
            self.items.remove(item);
        }
        Ok(())
    }

    /// Absorbing wrapper over [`Inventory::try_remove`]: removing from an
    /// unknown item is reported as a diagnostic and the call is a no-op.
    pub fn remove_item(&mut self, item: &str, qty: i64) {
        if let Err(err) = self.try_remove(item, qty) {
            warn!("{err}");
        }
    }

    /// Quantity on hand for `item`, or 0 if the item is unknown.
    pub fn get_qty(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }
}
