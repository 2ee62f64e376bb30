// ShelfTrack - ui/panels/detail.rs
//
// Product detail pane showing the full field set and expiry status
// for the selected row.

use crate::app::state::AppState;
use crate::core::date::{self, ExpiryStatus};
use crate::ui::theme;

/// Render the detail pane (bottom panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if let Some(product) = state.selected_product() {
        egui::Grid::new("detail_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.label(&product.name);
                ui.end_row();

                ui.label("Category:");
                ui.label(&product.category);
                ui.end_row();

                ui.label("Quantity:");
                ui.label(product.quantity.to_string());
                ui.end_row();

                ui.label("Price:");
                ui.label(format!("{:.2}", product.price));
                ui.end_row();

                if product.weight > 0.0 {
                    ui.label("Weight:");
                    ui.label(format!("{:.3}", product.weight));
                    ui.end_row();
                }

                ui.label("Expiry:");
                let status = date::status_color(product);
                let expiry_text = match ExpiryStatus::classify(product.expiry_date.as_deref()) {
                    ExpiryStatus::Never => "Never expires".to_string(),
                    ExpiryStatus::Expired => format!(
                        "{} (expired)",
                        product.expiry_date.as_deref().unwrap_or("?")
                    ),
                    ExpiryStatus::Active { days_left: 0 } => format!(
                        "{} (expires today)",
                        product.expiry_date.as_deref().unwrap_or("?")
                    ),
                    ExpiryStatus::Active { days_left } => format!(
                        "{} ({days_left} days left)",
                        product.expiry_date.as_deref().unwrap_or("?")
                    ),
                    ExpiryStatus::Unknown => format!(
                        "{} (unrecognised date)",
                        product.expiry_date.as_deref().unwrap_or("?")
                    ),
                };
                ui.colored_label(theme::status_colour(&status), expiry_text);
                ui.end_row();

                ui.label("Status:");
                ui.colored_label(theme::status_colour(&status), status.label());
                ui.end_row();
            });
    } else {
        ui.centered_and_justified(|ui| {
            ui.label("Select a product to view details.");
        });
    }
}
