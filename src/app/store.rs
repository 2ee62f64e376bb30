// ShelfTrack - app/store.rs
//
// The inventory store: owner of the authoritative in-memory product
// collection and its persistence mirroring.
//
// The store is an explicit object owned by the top-level application
// state and passed to whatever needs read/mutate access — no ambient
// globals. Every mutating call rewrites the persisted slot in full;
// save failures are logged and the in-memory collection remains
// authoritative for the session.

use crate::app::persist;
use crate::core::coerce;
use crate::core::date;
use crate::core::model::{Product, ProductInput};
use crate::util::constants::DEFAULT_CATEGORY;
use crate::util::error::StoreError;
use chrono::Utc;
use std::path::PathBuf;

/// Owner of the in-memory product collection, mirrored to a JSON file.
#[derive(Debug)]
pub struct InventoryStore {
    products: Vec<Product>,
    path: PathBuf,
}

impl InventoryStore {
    /// Load the collection from `path`, or start empty if none exists or
    /// the stored payload fails to parse (logged, not fatal).
    pub fn load(path: PathBuf) -> Self {
        let products = persist::load(&path);
        Self { products, path }
    }

    /// In-memory store for tests; persists to the given path like any other.
    #[cfg(test)]
    pub fn with_products(products: Vec<Product>, path: PathBuf) -> Self {
        Self { products, path }
    }

    /// Read access to the full collection, newest-first.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Create a product from form input and prepend it to the collection.
    ///
    /// Fails with `Validation` if the trimmed name is empty; numeric and
    /// date fields coerce silently to safe defaults. Returns the new id.
    pub fn add(&mut self, input: &ProductInput) -> Result<u64, StoreError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation { field: "name" });
        }

        let id = self.next_id();
        let product = Product {
            id,
            name: name.to_string(),
            quantity: coerce::coerce_quantity(&input.quantity),
            price: coerce::coerce_decimal(&input.price),
            weight: coerce::coerce_decimal(&input.weight),
            expiry_date: date::normalize(&input.expiry_date),
            category: resolve_category(&input.category),
        };

        tracing::info!(id, name = %product.name, "Product added");
        self.products.insert(0, product);
        self.save();
        Ok(id)
    }

    /// Replace the fields of an existing product. The id never changes.
    pub fn update(&mut self, id: u64, input: &ProductInput) -> Result<(), StoreError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation { field: "name" });
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound { id })?;

        product.name = name.to_string();
        product.quantity = coerce::coerce_quantity(&input.quantity);
        product.price = coerce::coerce_decimal(&input.price);
        product.weight = coerce::coerce_decimal(&input.weight);
        product.expiry_date = date::normalize(&input.expiry_date);
        product.category = resolve_category(&input.category);

        tracing::info!(id, name = %name, "Product updated");
        self.save();
        Ok(())
    }

    /// Delete a product. A missing id is reported but non-fatal at call
    /// sites — the UI only offers deletion of ids it currently displays.
    pub fn remove(&mut self, id: u64) -> Result<(), StoreError> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(StoreError::NotFound { id });
        }

        tracing::info!(id, "Product removed");
        self.save();
        Ok(())
    }

    /// Adjust quantity by `delta`, clamping at 0. Never fails; a missing
    /// id is silently ignored.
    pub fn adjust_quantity(&mut self, id: u64, delta: i64) {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return;
        };

        let adjusted = i64::from(product.quantity).saturating_add(delta);
        product.quantity = adjusted.clamp(0, i64::from(u32::MAX)) as u32;
        self.save();
    }

    /// Rewrite the persisted slot with the current collection.
    ///
    /// Errors are logged and never propagated: the in-memory collection
    /// stays authoritative and the session continues.
    fn save(&self) {
        if let Err(e) = persist::save(&self.products, &self.path) {
            tracing::error!(error = %e, "Failed to persist inventory; in-memory state retained");
        }
    }

    /// Next unique creation-timestamp id.
    ///
    /// Ids are the current time in milliseconds, bumped while taken so
    /// two products created within the same millisecond stay distinct.
    fn next_id(&self) -> u64 {
        let mut id = Utc::now().timestamp_millis().max(0) as u64;
        while self.products.iter().any(|p| p.id == id) {
            id += 1;
        }
        id
    }
}

/// Trimmed category, or the default when unset.
fn resolve_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}
