// ShelfTrack - core/export.rs
//
// CSV and JSON export of the visible product subset.
// Core layer: writes to any Write trait object.

use crate::core::model::Product;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export products to CSV format.
///
/// Writes: id, name, category, quantity, price, weight, expiry_date
pub fn export_csv<W: Write>(
    products: &[Product],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "name",
            "category",
            "quantity",
            "price",
            "weight",
            "expiry_date",
        ])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for product in products {
        csv_writer
            .write_record([
                &product.id.to_string(),
                &product.name,
                &product.category,
                &product.quantity.to_string(),
                &format!("{:.2}", product.price),
                &format!("{:.3}", product.weight),
                product.expiry_date.as_deref().unwrap_or(""),
            ])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export products to JSON format (array of objects).
pub fn export_json<W: Write>(
    products: &[Product],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, products).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(products.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_product(id: u64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            quantity: 2,
            price: 4.5,
            weight: 0.0,
            expiry_date: Some("2025-01-01".to_string()),
            category: "Dairy".to_string(),
        }
    }

    #[test]
    fn test_csv_export() {
        let products = vec![make_product(1, "Milk"), make_product(2, "Butter")];
        let mut buf = Vec::new();
        let count = export_csv(&products, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("id,name,category"));
        assert!(output.contains("Milk"));
        assert!(output.contains("Butter"));
        assert!(output.contains("2025-01-01"));
    }

    #[test]
    fn test_json_export() {
        let products = vec![make_product(1, "Milk")];
        let mut buf = Vec::new();
        let count = export_json(&products, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"name\": \"Milk\""));
    }
}
