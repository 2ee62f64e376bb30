// ShelfTrack - core/coerce.rs
//
// Locale-aware numeric coercion for form input.
// Core layer: pure logic, no I/O or UI dependencies.
//
// Unparseable input coerces to 0 rather than failing the mutation —
// the form never blocks on a bad number, only on an empty name.

/// Coerce quantity text to a non-negative integer.
///
/// Accepts plain integers and decimal text (truncated toward zero).
/// Unparseable or negative input coerces to 0.
pub fn coerce_quantity(text: &str) -> u32 {
    let value = coerce_decimal(text);
    if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value as u32
    }
}

/// Coerce price/weight text to a non-negative decimal.
///
/// Comma is accepted as the decimal separator ("4,99" == 4.99), and
/// grouped thousands in either convention ("1.234,56", "1,234.56") are
/// handled by treating the last separator as the decimal point.
/// Unparseable or negative input coerces to 0.
pub fn coerce_decimal(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let normalised = normalise_separators(trimmed);
    match normalised.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Rewrite comma/dot separators into plain `1234.56` form.
///
/// The last separator in the text is taken as the decimal point; all
/// earlier separators are assumed to be grouping and removed. A single
/// dot keeps its usual meaning.
fn normalise_separators(text: &str) -> String {
    let last_sep = text.rfind([',', '.']);
    let Some(pos) = last_sep else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        match ch {
            ',' | '.' if i == pos => out.push('.'),
            ',' | '.' => {}
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_plain_integer() {
        assert_eq!(coerce_quantity("12"), 12);
        assert_eq!(coerce_quantity("0"), 0);
        assert_eq!(coerce_quantity(" 7 "), 7);
    }

    #[test]
    fn test_quantity_invalid_defaults_to_zero() {
        assert_eq!(coerce_quantity(""), 0);
        assert_eq!(coerce_quantity("abc"), 0);
        assert_eq!(coerce_quantity("-3"), 0);
    }

    #[test]
    fn test_decimal_dot_and_comma() {
        assert_eq!(coerce_decimal("4.99"), 4.99);
        assert_eq!(coerce_decimal("4,99"), 4.99);
        assert_eq!(coerce_decimal("10"), 10.0);
    }

    #[test]
    fn test_decimal_grouped_thousands() {
        assert_eq!(coerce_decimal("1.234,56"), 1234.56);
        assert_eq!(coerce_decimal("1,234.56"), 1234.56);
    }

    #[test]
    fn test_decimal_invalid_defaults_to_zero() {
        assert_eq!(coerce_decimal(""), 0.0);
        assert_eq!(coerce_decimal("free"), 0.0);
        assert_eq!(coerce_decimal("-1.50"), 0.0);
        assert_eq!(coerce_decimal("NaN"), 0.0);
    }
}
