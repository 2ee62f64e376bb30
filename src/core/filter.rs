// ShelfTrack - core/filter.rs
//
// Filter/search pipeline deriving the visible subset of products.
// Filter mode and search text are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::date;
use crate::core::model::{FilterMode, Product};
use chrono::{Local, NaiveDate};

/// Derive the visible subset of products, as indices into `products`.
///
/// Returns indices rather than clones so the store's order (newest-first)
/// is preserved and rows never need copying for display. The pipeline
/// never re-sorts.
pub fn visible(products: &[Product], mode: FilterMode, search: &str) -> Vec<usize> {
    visible_on(products, mode, search, Local::now().date_naive())
}

/// As `visible`, with an explicit reference date for expiry checks.
pub fn visible_on(
    products: &[Product],
    mode: FilterMode,
    search: &str,
    today: NaiveDate,
) -> Vec<usize> {
    let needle = search.trim().to_lowercase();

    products
        .iter()
        .enumerate()
        .filter(|(_, p)| matches_mode(p, mode, today) && matches_search(p, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check a product against the active filter mode.
fn matches_mode(product: &Product, mode: FilterMode, today: NaiveDate) -> bool {
    let expired = date::is_expired_on(product.expiry_date.as_deref(), today);
    match mode {
        FilterMode::All => true,
        FilterMode::InStock => product.quantity > 0 && !expired,
        // Unlike InStock, OutOfStock does not exclude expired products.
        // Asymmetric by observation; do not "fix" without product-owner
        // confirmation.
        FilterMode::OutOfStock => product.quantity == 0,
        FilterMode::Expired => expired,
    }
}

/// Case-insensitive substring match against name or category.
/// An empty needle matches everything.
fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u64, name: &str, quantity: u32, expiry: Option<&str>) -> Product {
        Product {
            id,
            name: name.to_string(),
            quantity,
            price: 1.0,
            weight: 0.0,
            expiry_date: expiry.map(str::to_string),
            category: "Other".to_string(),
        }
    }

    fn day(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_all_mode_returns_everything_in_order() {
        let products = vec![
            make_product(2, "Bread", 3, None),
            make_product(1, "Milk", 0, None),
        ];
        let result = visible_on(&products, FilterMode::All, "", day("2024-03-15"));
        assert_eq!(result, vec![0, 1]);
    }

    #[test]
    fn test_in_stock_excludes_empty_and_expired() {
        let today = day("2024-03-15");
        let products = vec![
            make_product(1, "Fresh", 3, Some("2024-04-01")),
            make_product(2, "Empty", 0, None),
            make_product(3, "Stale", 5, Some("2024-03-01")),
        ];
        let result = visible_on(&products, FilterMode::InStock, "", today);
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_out_of_stock_keeps_expired() {
        let today = day("2024-03-15");
        let products = vec![
            make_product(1, "Empty", 0, None),
            make_product(2, "Full", 3, None),
            make_product(3, "Empty and stale", 0, Some("2024-03-01")),
        ];
        let result = visible_on(&products, FilterMode::OutOfStock, "", today);
        // Expired products are NOT excluded here, unlike InStock.
        assert_eq!(result, vec![0, 2]);
    }

    #[test]
    fn test_expired_mode() {
        let today = day("2024-03-15");
        let products = vec![
            make_product(1, "Stale", 5, Some("2024-03-14")),
            make_product(2, "Fresh", 5, Some("2024-03-16")),
            make_product(3, "Forever", 5, None),
        ];
        let result = visible_on(&products, FilterMode::Expired, "", today);
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let products = vec![
            make_product(1, "Whole Milk", 3, None),
            make_product(2, "Bread", 3, None),
        ];
        let result = visible_on(&products, FilterMode::All, "MILK", day("2024-03-15"));
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_search_matches_category() {
        let mut p = make_product(1, "Queijo", 3, None);
        p.category = "Lacticínios".to_string();
        let products = vec![p, make_product(2, "Bread", 3, None)];
        let result = visible_on(&products, FilterMode::All, "lact", day("2024-03-15"));
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_search_is_trimmed() {
        let products = vec![make_product(1, "Milk", 3, None)];
        let result = visible_on(&products, FilterMode::All, "  milk  ", day("2024-03-15"));
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_mode_and_search_combine() {
        let today = day("2024-03-15");
        let products = vec![
            make_product(1, "Milk", 3, None),
            make_product(2, "Milk (old)", 0, None),
            make_product(3, "Bread", 0, None),
        ];
        let result = visible_on(&products, FilterMode::OutOfStock, "milk", today);
        assert_eq!(result, vec![1]);
    }
}
