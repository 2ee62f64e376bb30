// ShelfTrack - app/persist.rs
//
// Inventory persistence: the single JSON slot holding the whole product
// collection.
//
// Design principles:
// - The file is saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good copy.
// - Load errors are logged and treated as "no data" (corrupt or
//   incompatible payloads start the app with an empty collection rather
//   than surfacing errors to the user).
// - The data directory is created on first save; no user action required.
// - There is no schema version tag; the payload is a plain JSON array of
//   product records.

use crate::core::model::Product;
use crate::util::constants::INVENTORY_FILE_NAME;
use crate::util::error::PersistenceError;
use std::path::{Path, PathBuf};

/// Resolve the inventory file path from the platform data directory.
pub fn inventory_path(data_dir: &Path) -> PathBuf {
    data_dir.join(INVENTORY_FILE_NAME)
}

/// Save the full collection to `path` atomically (write temp → rename).
///
/// The overwrite is total, not incremental. Creates all parent
/// directories as needed.
pub fn save(products: &[Product], path: &Path) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let json = serde_json::to_string_pretty(products).map_err(|e| PersistenceError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Atomic write: write to a sibling temp file then rename.
    // A crash between write and rename loses the new collection but never
    // corrupts the previous one (rename is atomic on all supported platforms).
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|e| PersistenceError::Io {
        path: tmp.clone(),
        operation: "write",
        source: e,
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        PersistenceError::Io {
            path: path.to_path_buf(),
            operation: "rename",
            source: e,
        }
    })?;

    tracing::debug!(path = %path.display(), count = products.len(), "Inventory saved");
    Ok(())
}

/// Load the full collection from `path`.
///
/// Returns an empty Vec on any error: a missing file is a normal first
/// run, and a malformed payload is logged and discarded rather than
/// treated as fatal.
pub fn load(path: &Path) -> Vec<Product> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            // Distinguish "file not found" (normal first run) from other errors.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read inventory file");
            }
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Product>>(&content) {
        Ok(products) => {
            tracing::info!(path = %path.display(), count = products.len(), "Inventory loaded");
            products
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Inventory file is malformed — starting with an empty collection"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_products() -> Vec<Product> {
        vec![
            Product {
                id: 1710000000000,
                name: "Milk".to_string(),
                quantity: 2,
                price: 1.99,
                weight: 1.0,
                expiry_date: Some("2024-03-22".to_string()),
                category: "Dairy".to_string(),
            },
            Product {
                id: 1710000000001,
                name: "Rice".to_string(),
                quantity: 5,
                price: 3.5,
                weight: 0.0,
                expiry_date: None,
                category: "Pantry".to_string(),
            },
        ]
    }

    /// Save and load must round-trip the full field set losslessly.
    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        let original = sample_products();

        save(&original, &path).expect("save should succeed");
        let loaded = load(&path);

        assert_eq!(loaded, original);
    }

    /// Load must return empty when the file does not exist (first run).
    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent.json");
        assert!(load(&path).is_empty());
    }

    /// Load must return empty when the JSON is malformed rather than panicking.
    #[test]
    fn test_load_malformed_json_returns_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_empty());
    }

    /// A structurally incompatible payload (wrong shape) is treated as no data.
    #[test]
    fn test_load_incompatible_payload_returns_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, br#"{"products": "nope"}"#).unwrap();
        assert!(load(&path).is_empty());
    }

    /// Absent expiry_date must stay absent on disk, not become null-with-key.
    #[test]
    fn test_absent_expiry_not_serialised() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        let mut products = sample_products();
        products.truncate(2);

        save(&products, &path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        // Only the first product carries the key.
        assert_eq!(raw.matches("expiry_date").count(), 1);
    }

    /// Saving into a directory that does not exist yet must create it.
    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("inventory.json");
        save(&sample_products(), &path).unwrap();
        assert_eq!(load(&path).len(), 2);
    }
}
