//! Fixed demonstration driver for the inventory store.
//!
//! Runs a small add/remove/query session, persists it to the default data
//! file, reloads it, and prints the stock report. Takes no arguments.

use stockbook_inventory::{DEFAULT_DATA_PATH, DEFAULT_LOW_STOCK_THRESHOLD, Inventory};

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let mut inv = Inventory::new();
    let mut logs = Vec::new();

    inv.add_item("apple", 10, &mut logs);
    inv.add_item("banana", -2, &mut logs);
    inv.add_item("", 5, &mut logs); // rejected with a diagnostic
    inv.remove_item("apple", 3);
    inv.remove_item("orange", 1); // unknown item, diagnostic only

    println!("Apple stock: {}", inv.get_qty("apple"));

    let low = inv.check_low_items(DEFAULT_LOW_STOCK_THRESHOLD);
    let names: Vec<&str> = low.iter().map(|n| n.as_str()).collect();
    println!("Low items: {names:?}");

    inv.save_data(DEFAULT_DATA_PATH)?;
    inv.load_data(DEFAULT_DATA_PATH);
    inv.print_data();

    for line in &logs {
        println!("{line}");
    }

    Ok(())
}
