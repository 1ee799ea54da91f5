//! JSON-file persistence for the inventory mapping.
//!
//! The on-disk format is a single JSON object whose keys are item names and
//! whose values are quantities. No versioning, no schema tag.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;
use tracing::warn;

use stockbook_core::ItemName;

use crate::store::Inventory;

/// Default location of the persisted inventory file.
pub const DEFAULT_DATA_PATH: &str = "inventory.json";

/// Recoverable failure while loading the persisted inventory.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("inventory file {0} not found")]
    Missing(PathBuf),

    #[error("failed to read inventory file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in inventory file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Inventory {
    /// Replace the whole mapping with the JSON object at `path`.
    ///
    /// On failure the store is left untouched; the caller decides how to
    /// recover. [`Inventory::load_data`] is the absorbing variant.
    pub fn try_load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::Missing(path.to_path_buf())
            } else {
                LoadError::Io { path: path.to_path_buf(), source }
            }
        })?;
        let items: BTreeMap<ItemName, i64> =
            serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        self.items = items;
        Ok(())
    }

    /// Absorbing wrapper over [`Inventory::try_load`]: a missing or corrupt
    /// file resets the store to empty and emits a diagnostic. Never fatal.
    pub fn load_data(&mut self, path: impl AsRef<Path>) {
        if let Err(err) = self.try_load(path) {
            warn!("{err}; starting with empty inventory");
            self.items.clear();
        }
    }

    /// Serialize the mapping as a JSON object, overwriting `path`.
    ///
    /// Unlike the load side, a failed write is a hard error and propagates.
    pub fn save_data(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string(&self.items)
            .context("failed to serialize inventory")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write inventory file {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> Inventory {
        let mut inv = Inventory::new();
        let mut logs = Vec::new();
        inv.add_item("apple", 7, &mut logs);
        inv.add_item("banana", 3, &mut logs);
        inv
    }

    #[test]
    fn save_then_load_reproduces_the_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let original = populated();
        original.save_data(&path).unwrap();

        let mut restored = Inventory::new();
        restored.load_data(&path);
        assert_eq!(restored, original);
    }

    #[test]
    fn load_of_missing_file_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let mut inv = populated();
        inv.load_data(&path);
        assert!(inv.is_empty());
    }

    #[test]
    fn try_load_of_missing_file_reports_missing_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let mut inv = populated();
        let err = inv.try_load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Missing(_)));
        assert_eq!(inv, populated());
    }

    #[test]
    fn load_of_corrupt_file_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{not json").unwrap();

        let mut inv = populated();
        inv.load_data(&path);
        assert!(inv.is_empty());
    }

    #[test]
    fn save_into_missing_directory_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("inventory.json");

        let err = populated().save_data(&path).unwrap_err();
        assert!(err.to_string().contains("failed to write inventory file"));
    }

    #[test]
    fn persisted_form_is_a_plain_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        populated().save_data(&path).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"apple":7,"banana":3}"#);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                // File IO per case; keep the run short.
                cases: 32,
                ..ProptestConfig::default()
            })]

            /// Property: save then load on the same path is the identity.
            #[test]
            fn round_trip_is_identity(
                entries in proptest::collection::btree_map("[a-z]{1,8}", -1_000i64..1_000, 0..16),
            ) {
                let mut inv = Inventory::new();
                let mut logs = Vec::new();
                for (item, qty) in &entries {
                    inv.add_item(item, *qty, &mut logs);
                }

                let dir = tempfile::tempdir().unwrap();
                let path = dir.path().join("inventory.json");
                inv.save_data(&path).unwrap();

                let mut restored = Inventory::new();
                restored.load_data(&path);
                prop_assert_eq!(restored, inv);
            }
        }
    }
}
