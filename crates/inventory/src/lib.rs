//! Inventory store: an ordered mapping from item name to quantity.
//!
//! The store is a plain owned value (no globals, no locking); callers pass it
//! around explicitly. Recoverable conditions (bad name, missing item, absent
//! or corrupt data file) never abort the caller: the public operations absorb
//! them and emit a `warn`-level diagnostic. `try_*` variants returning typed
//! errors exist alongside. Only a failed write during [`Inventory::save_data`]
//! propagates as a hard error.

pub mod persist;
pub mod report;
pub mod store;

pub use persist::{DEFAULT_DATA_PATH, LoadError};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
