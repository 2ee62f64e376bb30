// ShelfTrack - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ShelfTrack";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ShelfTrack";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Expiry policy
// =============================================================================

/// Days-until-expiry threshold at or below which a product is flagged
/// as near-expiry (inclusive). A product expiring today has 0 days left
/// and is therefore inside the warning window.
pub const WARNING_DAYS: i64 = 7;

// =============================================================================
// Categories
// =============================================================================

/// Fixed category list offered in the add/edit form.
/// The last entry is the default for products created without a category.
pub const CATEGORIES: &[&str] = &[
    "Dairy",
    "Bakery",
    "Produce",
    "Meat",
    "Frozen",
    "Beverages",
    "Pantry",
    "Cleaning",
    "Other",
];

/// Category assigned when the form supplies none.
pub const DEFAULT_CATEGORY: &str = "Other";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Files
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Inventory persistence file name (stored in the platform data directory).
pub const INVENTORY_FILE_NAME: &str = "inventory.json";
