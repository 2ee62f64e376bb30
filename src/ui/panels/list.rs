// ShelfTrack - ui/panels/list.rs
//
// Central product list: one row per visible product with a status dot,
// quantity adjustment buttons, and edit/delete actions.
//
// Row actions are collected during rendering and applied afterwards so
// the store is never mutated while its rows are being borrowed.

use crate::app::state::{AppState, FormState};
use crate::core::date;
use crate::ui::theme;

/// A deferred row intent, applied after rendering.
enum RowAction {
    Select(u64),
    Adjust(u64, i64),
    Edit(u64),
    Delete(u64),
}

/// Render the product list.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.store.products().is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No products yet. Use \u{2795} Add product to get started.");
        });
        return;
    }
    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No products match the current filter.");
        });
        return;
    }

    let mut action: Option<RowAction> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("product_table")
                .num_columns(7)
                .striped(true)
                .min_row_height(theme::ROW_HEIGHT)
                .spacing([12.0, 3.0])
                .show(ui, |ui| {
                    // Header row
                    ui.label("");
                    ui.strong("Name");
                    ui.strong("Category");
                    ui.strong("Quantity");
                    ui.strong("Price");
                    ui.strong("Expiry");
                    ui.strong("");
                    ui.end_row();

                    for &idx in &state.visible_indices {
                        let Some(product) = state.store.products().get(idx) else {
                            continue;
                        };
                        let id = product.id;
                        let selected = state.selected_id == Some(id);
                        let status = date::status_color(product);

                        // Status dot
                        ui.colored_label(theme::status_colour(&status), "\u{25cf}")
                            .on_hover_text(status.label());

                        // Name (click to select)
                        if ui
                            .selectable_label(selected, &product.name)
                            .clicked()
                        {
                            action = Some(RowAction::Select(id));
                        }

                        ui.label(&product.category);

                        // Quantity with -/+ buttons
                        ui.horizontal(|ui| {
                            if ui.small_button("\u{2212}").clicked() {
                                action = Some(RowAction::Adjust(id, -1));
                            }
                            ui.monospace(product.quantity.to_string());
                            if ui.small_button("+").clicked() {
                                action = Some(RowAction::Adjust(id, 1));
                            }
                        });

                        ui.monospace(format!("{:.2}", product.price));
                        ui.monospace(product.expiry_date.as_deref().unwrap_or("--"));

                        ui.horizontal(|ui| {
                            if ui.small_button("Edit").clicked() {
                                action = Some(RowAction::Edit(id));
                            }
                            if ui.small_button("Delete").clicked() {
                                action = Some(RowAction::Delete(id));
                            }
                        });
                        ui.end_row();
                    }
                });
        });

    match action {
        Some(RowAction::Select(id)) => {
            state.selected_id = Some(id);
        }
        Some(RowAction::Adjust(id, delta)) => {
            state.adjust_quantity(id, delta);
        }
        Some(RowAction::Edit(id)) => {
            if let Some(product) = state.store.get(id) {
                state.form = Some(FormState::edit_product(product));
            }
        }
        Some(RowAction::Delete(id)) => {
            // Destructive: route through the confirmation modal.
            state.pending_delete = Some(id);
        }
        None => {}
    }
}
