// ShelfTrack - ui/panels/stats.rs
//
// Summary statistics strip: item count, in-stock count, total value.
// Computed over the full collection, not the filtered view.

use crate::app::state::AppState;

/// Render the stats strip (top panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let totals = state.totals();

    ui.horizontal(|ui| {
        ui.strong("Items:");
        ui.label(totals.count.to_string());
        ui.separator();

        ui.strong("In stock:");
        ui.label(totals.in_stock_count.to_string());
        ui.separator();

        ui.strong("Total value:");
        ui.monospace(totals.total_value_display());
    });
}
