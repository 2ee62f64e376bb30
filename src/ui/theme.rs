// ShelfTrack - ui/theme.rs
//
// Colour scheme, status colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::StatusColor;
use egui::Color32;

/// Colour for a product's health classification.
pub fn status_colour(status: &StatusColor) -> Color32 {
    match status {
        StatusColor::Healthy => Color32::from_rgb(34, 197, 94),   // Green 500
        StatusColor::Warning => Color32::from_rgb(217, 119, 6),   // Amber 600
        StatusColor::Critical => Color32::from_rgb(220, 38, 38),  // Red 600
        StatusColor::Unknown => Color32::from_rgb(107, 114, 128), // Gray 500
    }
}

/// Background highlight colour for a status (subtle, for row backgrounds).
pub fn status_bg_colour(status: &StatusColor) -> Option<Color32> {
    match status {
        StatusColor::Critical => Some(Color32::from_rgba_premultiplied(220, 38, 38, 25)),
        StatusColor::Warning => Some(Color32::from_rgba_premultiplied(217, 119, 6, 15)),
        _ => None,
    }
}

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 230.0;
pub const DETAIL_PANE_HEIGHT: f32 = 180.0;
pub const ROW_HEIGHT: f32 = 24.0;
