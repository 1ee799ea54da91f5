//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable conditions. These never
/// abort a caller of the store's public operations: the store absorbs them
/// and surfaces a human-readable diagnostic instead. Infrastructure failures
/// (e.g. a failed write during save) are not modelled here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A value failed validation (e.g. an empty item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The named item does not exist in the inventory.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }
}
