// ShelfTrack - core/stats.rs
//
// Summary statistics over the full product collection.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{InventoryTotals, Product};

/// Compute summary statistics for the whole collection.
///
/// `in_stock_count` counts quantity > 0 regardless of expiry; the stats
/// strip deliberately shows a broader number than the InStock filter.
pub fn totals(products: &[Product]) -> InventoryTotals {
    InventoryTotals {
        count: products.len(),
        in_stock_count: products.iter().filter(|p| p.quantity > 0).count(),
        total_value: products
            .iter()
            .map(|p| p.price * f64::from(p.quantity))
            // fold from 0.0 rather than `.sum()`: the std f64 Sum identity is
            // -0.0, which would render an empty total as "-0.00".
            .fold(0.0, |acc, v| acc + v),
    }
}
