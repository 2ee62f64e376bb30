// ShelfTrack - ui/panels/filters.rs
//
// Sidebar: search box, filter mode toggles, and the add-product button.

use crate::app::state::{AppState, FormState};
use crate::core::model::FilterMode;

/// Render the search and filter controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Inventory");
    ui.separator();

    if ui.button("\u{2795} Add product").clicked() {
        state.form = Some(FormState::new_product());
    }

    ui.separator();

    // Search box
    ui.label("Search:");
    let response = ui.text_edit_singleline(&mut state.search_text);
    if response.changed() {
        state.apply_filters();
    }
    if !state.search_text.is_empty() && ui.small_button("Clear search").clicked() {
        state.search_text.clear();
        state.apply_filters();
    }

    ui.separator();

    // Filter mode toggles (exactly one active)
    ui.label("Show:");
    let mut changed = false;
    for mode in FilterMode::all() {
        if ui
            .selectable_label(state.filter_mode == *mode, mode.label())
            .clicked()
        {
            state.filter_mode = *mode;
            changed = true;
        }
    }
    if changed {
        state.apply_filters();
    }
}
