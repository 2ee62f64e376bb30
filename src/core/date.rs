// ShelfTrack - core/date.rs
//
// Date normalisation and expiry classification.
// Core layer: pure logic, no I/O or UI dependencies.
//
// All expiry comparisons are calendar-date comparisons (both sides
// truncated to midnight); time-of-day never affects the result.

use crate::core::model::{Product, StatusColor};
use crate::util::constants::WARNING_DAYS;
use chrono::{Local, NaiveDate};

/// Canonical calendar-date format, unambiguous across locales.
const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Accepted non-canonical input formats, tried in order after the
/// canonical form. Covers the slash and dot conventions plus the common
/// dash variant; anything else falls through to the RFC 3339 parser.
const FALLBACK_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%Y.%m.%d",
    "%d.%m.%Y",
];

/// Convert heterogeneous date text into canonical `YYYY-MM-DD` form.
///
/// Returns `None` for empty input or anything that is not a valid
/// calendar date. Callers interpret `None` as "no expiry" (form input)
/// or "unparseable" (stored data) depending on context.
pub fn normalize(text: &str) -> Option<String> {
    parse(text).map(|d| d.format(CANONICAL_FORMAT).to_string())
}

/// Parse date text into a `NaiveDate`, or `None` if unparseable.
pub fn parse(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, CANONICAL_FORMAT) {
        return Some(date);
    }

    for format in FALLBACK_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    // General parser of last resort: full RFC 3339 timestamps reduce to
    // their calendar date.
    chrono::DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

// =============================================================================
// Expiry classification
// =============================================================================

/// Four-valued expiry classification.
///
/// The boolean `is_expired` conflates "never expires" with "unparseable
/// date"; this enum keeps the two apart for the status colour policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// No expiry date recorded.
    Never,

    /// Expiry date is strictly before today.
    Expired,

    /// Expiry date is today or later. `days_left` is the whole-day
    /// difference (0 = expires today).
    Active { days_left: i64 },

    /// An expiry date is recorded but cannot be parsed (hand-edited or
    /// incompatible stored data).
    Unknown,
}

impl ExpiryStatus {
    /// Classify a raw expiry string against a reference date.
    pub fn classify_on(raw: Option<&str>, today: NaiveDate) -> Self {
        let Some(text) = raw else {
            return ExpiryStatus::Never;
        };
        let Some(date) = parse(text) else {
            return ExpiryStatus::Unknown;
        };
        let days_left = (date - today).num_days();
        if days_left < 0 {
            ExpiryStatus::Expired
        } else {
            ExpiryStatus::Active { days_left }
        }
    }

    /// Classify against the current local date.
    pub fn classify(raw: Option<&str>) -> Self {
        Self::classify_on(raw, Local::now().date_naive())
    }
}

/// Whether a raw expiry date is strictly before `today`.
///
/// Normalisation failure and absence both return `false`: an unparseable
/// date is treated as non-expiring rather than erroring.
pub fn is_expired_on(raw: Option<&str>, today: NaiveDate) -> bool {
    matches!(ExpiryStatus::classify_on(raw, today), ExpiryStatus::Expired)
}

/// Whether a raw expiry date is strictly before the current local date.
pub fn is_expired(raw: Option<&str>) -> bool {
    is_expired_on(raw, Local::now().date_naive())
}

// =============================================================================
// Status colour derivation
// =============================================================================

/// Derive the health classification for a product row.
///
/// Rule order is significant (see `StatusColor` docs): an expired,
/// zero-quantity product is Critical via the expiry rule, not counted
/// twice.
pub fn status_color_on(product: &Product, today: NaiveDate) -> StatusColor {
    match ExpiryStatus::classify_on(product.expiry_date.as_deref(), today) {
        // The no-expiry rule precedes the zero-quantity rule, so a product
        // that never expires is Healthy even when out of stock.
        ExpiryStatus::Never => StatusColor::Healthy,
        ExpiryStatus::Expired => StatusColor::Critical,
        ExpiryStatus::Unknown => {
            if product.quantity == 0 {
                StatusColor::Critical
            } else {
                StatusColor::Unknown
            }
        }
        ExpiryStatus::Active { days_left } => {
            if product.quantity == 0 {
                StatusColor::Critical
            } else if days_left <= WARNING_DAYS {
                StatusColor::Warning
            } else {
                StatusColor::Healthy
            }
        }
    }
}

/// Derive the health classification against the current local date.
pub fn status_color(product: &Product) -> StatusColor {
    status_color_on(product, Local::now().date_naive())
}
