//! `stockbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no persistence
//! concerns): the error model and the validated item-name value object.

pub mod error;
pub mod item_name;

pub use error::{InventoryError, InventoryResult};
pub use item_name::ItemName;
