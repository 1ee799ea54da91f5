//! Item name value object: a validated stock-keeping-unit identifier.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};

/// Name of a stock keeping unit.
///
/// Compared by value. The only validation rule is non-emptiness; names with
/// surrounding whitespace are accepted as-is. Serialized transparently as a
/// plain string so it can act as a JSON object key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Validate and wrap an item name. The empty string is rejected.
    pub fn new(name: impl Into<String>) -> InventoryResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(InventoryError::validation("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemName {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// Lets ordered maps keyed by `ItemName` be queried with a plain `&str`.
// `Ord` on `ItemName` delegates to `String`, so the orderings agree.
impl core::borrow::Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}
