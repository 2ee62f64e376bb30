// ShelfTrack - ui/panels/form.rs
//
// Add/edit modal form. Open while `state.form` is Some.
//
// Name is the only required field; numbers and dates coerce to safe
// defaults on save, except a non-empty expiry that fails to normalise,
// which blocks the save with an inline message.

use crate::app::state::AppState;
use crate::util::constants::CATEGORIES;

/// Render the add/edit product modal (if a form is open).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(form) = state.form.as_mut() else {
        return;
    };

    let title = if form.editing.is_some() {
        "Edit product"
    } else {
        "Add product"
    };

    let mut open = true;
    let mut save_clicked = false;
    let mut cancel_clicked = false;

    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("product_form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut form.input.name);
                    ui.end_row();

                    ui.label("Quantity:");
                    ui.text_edit_singleline(&mut form.input.quantity);
                    ui.end_row();

                    ui.label("Price:");
                    ui.text_edit_singleline(&mut form.input.price);
                    ui.end_row();

                    ui.label("Weight:");
                    ui.text_edit_singleline(&mut form.input.weight);
                    ui.end_row();

                    ui.label("Expiry date:");
                    ui.text_edit_singleline(&mut form.input.expiry_date)
                        .on_hover_text("YYYY-MM-DD or DD/MM/YYYY; empty = never expires");
                    ui.end_row();

                    ui.label("Category:");
                    egui::ComboBox::from_id_salt("form_category")
                        .selected_text(if form.input.category.is_empty() {
                            "Other"
                        } else {
                            form.input.category.as_str()
                        })
                        .show_ui(ui, |ui| {
                            for category in CATEGORIES {
                                ui.selectable_value(
                                    &mut form.input.category,
                                    (*category).to_string(),
                                    *category,
                                );
                            }
                        });
                    ui.end_row();
                });

            if let Some(ref error) = form.error {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::from_rgb(248, 113, 113), error);
            }

            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save_clicked = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel_clicked = true;
                }
            });
        });

    if save_clicked {
        state.submit_form();
    } else if cancel_clicked || !open {
        state.form = None;
    }
}
