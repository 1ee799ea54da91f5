//! Human-readable reporting over the store.

use std::fmt::Write as _;

use stockbook_core::ItemName;

use crate::store::Inventory;

/// Render the stock report: a header line followed by one `<item> -> <qty>`
/// line per entry, in name order. Intended for human reading only.
pub fn render(inventory: &Inventory) -> String {
    let mut out = String::from("Items Report\n");
    for (name, qty) in inventory.iter() {
        let _ = writeln!(out, "{name} -> {qty}");
    }
    out
}

impl Inventory {
    /// Print the stock report to stdout.
    pub fn print_data(&self) {
        print!("{}", render(self));
    }

    /// Names of items whose quantity is strictly below `threshold`, in name
    /// order. [`crate::DEFAULT_LOW_STOCK_THRESHOLD`] is the conventional cutoff.
    pub fn check_low_items(&self, threshold: i64) -> Vec<ItemName> {
        self.iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
