// ShelfTrack - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies (Core depends on std only).
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product (the persisted inventory record)
// =============================================================================

/// A single inventory record.
///
/// This is the core data unit that flows through filtering, aggregation,
/// display, persistence, and export. The on-disk representation is a JSON
/// array of these records with no schema version tag; any structurally
/// incompatible payload is treated as "no data" at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Creation timestamp in milliseconds, unique within the collection
    /// for the process's lifetime. Immutable after creation.
    pub id: u64,

    /// Product name. Non-empty after trimming (enforced by the store).
    pub name: String,

    /// Units on hand. Decrements clamp at 0, never negative.
    pub quantity: u32,

    /// Unit price. 0.0 when the form input was unparseable.
    pub price: f64,

    /// Unit weight. 0.0 means "not specified".
    #[serde(default)]
    pub weight: f64,

    /// Canonical `YYYY-MM-DD` expiry date. Absent means "never expires".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,

    /// Category label from the fixed list. Defaults to "Other".
    pub category: String,
}

// =============================================================================
// Product input (raw form fields before coercion)
// =============================================================================

/// Raw form input for the add/edit operations.
///
/// All fields are the user's literal text. The store performs trimming,
/// locale-aware numeric coercion, and date normalisation; unparseable
/// numerics coerce to 0 and unparseable dates to absent rather than
/// failing the mutation.
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    /// Product name (required, validated non-empty after trimming).
    pub name: String,

    /// Quantity text (e.g. "12"). Unparseable or negative coerces to 0.
    pub quantity: String,

    /// Price text. Comma accepted as decimal separator ("4,99").
    pub price: String,

    /// Weight text. Empty or unparseable coerces to 0 ("not specified").
    pub weight: String,

    /// Expiry date text in any accepted form. Empty means no expiry.
    pub expiry_date: String,

    /// Category label. Empty falls back to the default category.
    pub category: String,
}

// =============================================================================
// Filter mode
// =============================================================================

/// Fixed set of predicates narrowing the visible product list.
///
/// `OutOfStock` deliberately does not exclude expired products the way
/// `InStock` does — observed behaviour, kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FilterMode {
    /// Every product (search still applies).
    #[default]
    All,

    /// Quantity > 0 and not expired.
    InStock,

    /// Quantity == 0.
    OutOfStock,

    /// Expiry date strictly before today.
    Expired,
}

impl FilterMode {
    /// Returns all variants in display order.
    pub fn all() -> &'static [FilterMode] {
        &[
            FilterMode::All,
            FilterMode::InStock,
            FilterMode::OutOfStock,
            FilterMode::Expired,
        ]
    }

    /// Human-readable label for the filter toggle buttons.
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::InStock => "In stock",
            FilterMode::OutOfStock => "Out of stock",
            FilterMode::Expired => "Expired",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Status colour
// =============================================================================

/// Health classification of a product row, derived from expiry and stock.
///
/// Derivation rules, in order (first match wins):
/// 1. no expiry date        => Healthy
/// 2. expired               => Critical
/// 3. quantity is zero      => Critical
/// 4. expiry unparseable    => Unknown
/// 5. days-until-expiry <= warning threshold (inclusive) => Warning
/// 6. otherwise             => Healthy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Healthy,
    Warning,
    Critical,
    Unknown,
}

impl StatusColor {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            StatusColor::Healthy => "Healthy",
            StatusColor::Warning => "Near expiry",
            StatusColor::Critical => "Critical",
            StatusColor::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for StatusColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Inventory totals
// =============================================================================

/// Summary statistics over the full collection (not the filtered view).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InventoryTotals {
    /// Collection size.
    pub count: usize,

    /// Number of products with quantity > 0. Expiry is not considered.
    pub in_stock_count: usize,

    /// Sum of price * quantity over all products.
    pub total_value: f64,
}

impl InventoryTotals {
    /// Total value rendered with two-decimal fixed-point precision.
    pub fn total_value_display(&self) -> String {
        format!("{:.2}", self.total_value)
    }
}
