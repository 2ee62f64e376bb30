// ShelfTrack - app/state.rs
//
// Application state management. Holds the inventory store, filter/search
// state, selection, the add/edit form, and the pending delete confirmation.
// Owned by the eframe::App implementation.

use crate::app::store::InventoryStore;
use crate::core::model::{FilterMode, InventoryTotals, Product, ProductInput};
use crate::core::{date, filter, stats};
use crate::util::error::StoreError;

/// State of the add/edit modal form.
///
/// `editing` is the id being edited, or None when creating. All fields
/// hold the user's literal text until submission.
#[derive(Debug, Default)]
pub struct FormState {
    /// Id of the product being edited; None when adding a new one.
    pub editing: Option<u64>,

    /// Raw form fields.
    pub input: ProductInput,

    /// Inline error message shown inside the modal, if any.
    pub error: Option<String>,
}

impl FormState {
    /// Empty form for creating a new product.
    pub fn new_product() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing product for editing.
    pub fn edit_product(product: &Product) -> Self {
        Self {
            editing: Some(product.id),
            input: ProductInput {
                name: product.name.clone(),
                quantity: product.quantity.to_string(),
                price: format!("{:.2}", product.price),
                weight: if product.weight == 0.0 {
                    String::new()
                } else {
                    format!("{:.3}", product.weight)
                },
                expiry_date: product.expiry_date.clone().unwrap_or_default(),
                category: product.category.clone(),
            },
            error: None,
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Authoritative product collection with persistence mirroring.
    pub store: InventoryStore,

    /// Active filter toggle.
    pub filter_mode: FilterMode,

    /// Search box text (applied trimmed and lower-cased).
    pub search_text: String,

    /// Indices of products matching the current filter (into `store.products()`).
    pub visible_indices: Vec<usize>,

    /// Id of the currently selected product, if any.
    pub selected_id: Option<u64>,

    /// Add/edit modal form; Some while the modal is open.
    pub form: Option<FormState>,

    /// Id awaiting delete confirmation; Some while the confirm modal is open.
    pub pending_delete: Option<u64>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state around a loaded store.
    pub fn new(store: InventoryStore, debug_mode: bool) -> Self {
        let mut state = Self {
            store,
            filter_mode: FilterMode::All,
            search_text: String::new(),
            visible_indices: Vec::new(),
            selected_id: None,
            form: None,
            pending_delete: None,
            status_message: "Ready.".to_string(),
            debug_mode,
        };
        state.apply_filters();
        state
    }

    /// Recompute visible indices from the current collection and filter state.
    pub fn apply_filters(&mut self) {
        self.visible_indices =
            filter::visible(self.store.products(), self.filter_mode, &self.search_text);

        // Drop the selection if it filtered out of view.
        if let Some(id) = self.selected_id {
            let still_visible = self
                .visible_indices
                .iter()
                .any(|&idx| self.store.products()[idx].id == id);
            if !still_visible {
                self.selected_id = None;
            }
        }
    }

    /// Products in the current visible order (borrowed, store order preserved).
    pub fn visible_products(&self) -> Vec<&Product> {
        self.visible_indices
            .iter()
            .filter_map(|&idx| self.store.products().get(idx))
            .collect()
    }

    /// The currently selected product, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_id.and_then(|id| self.store.get(id))
    }

    /// Summary statistics over the full collection (not the filtered view).
    pub fn totals(&self) -> InventoryTotals {
        stats::totals(self.store.products())
    }

    /// Submit the open form: add or update depending on `editing`.
    ///
    /// On success the form closes and filters refresh; on failure the form
    /// stays open with an inline error and no state change.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        // A non-empty expiry that fails to normalise would silently become
        // "never expires"; block it here so the user can correct the typo.
        let expiry_text = form.input.expiry_date.trim();
        if !expiry_text.is_empty() && date::normalize(expiry_text).is_none() {
            form.error = Some(format!("'{expiry_text}' is not a recognised date"));
            return;
        }

        let result = match form.editing {
            Some(id) => self.store.update(id, &form.input).map(|()| id),
            None => self.store.add(&form.input),
        };

        match result {
            Ok(id) => {
                let verb = if form.editing.is_some() { "updated" } else { "added" };
                self.status_message = format!("Product {verb}.");
                self.selected_id = Some(id);
                self.form = None;
                self.apply_filters();
            }
            Err(e @ StoreError::Validation { .. }) => {
                form.error = Some(e.to_string());
            }
            Err(StoreError::NotFound { id }) => {
                // The product vanished under the open form (stale intent);
                // close the modal and move on.
                tracing::warn!(id, "Edit target no longer exists");
                self.status_message = "Product no longer exists.".to_string();
                self.form = None;
            }
        }
    }

    /// Confirm the pending delete and apply it to the store.
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        match self.store.remove(id) {
            Ok(()) => {
                self.status_message = "Product deleted.".to_string();
            }
            Err(StoreError::NotFound { .. }) => {
                // Already gone — nothing to surface.
                tracing::debug!(id, "Delete target already removed");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Delete failed");
            }
        }

        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        self.apply_filters();
    }

    /// Increment/decrement a product's quantity from the list row buttons.
    pub fn adjust_quantity(&mut self, id: u64, delta: i64) {
        self.store.adjust_quantity(id, delta);
        self.apply_filters();
    }
}
