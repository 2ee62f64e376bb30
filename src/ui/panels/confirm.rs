// ShelfTrack - ui/panels/confirm.rs
//
// Delete confirmation modal. The store mutation only happens after an
// explicit confirm; closing the window or pressing Cancel discards the
// pending delete.

use crate::app::state::AppState;

/// Render the delete confirmation dialog (if a delete is pending).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(id) = state.pending_delete else {
        return;
    };

    // The product can disappear between frames (stale intent); drop the
    // dialog rather than confirming against nothing.
    let Some(name) = state.store.get(id).map(|p| p.name.clone()) else {
        state.pending_delete = None;
        return;
    };

    let mut open = true;
    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Delete product?")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Delete '{name}'? This cannot be undone."));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    confirmed = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        state.confirm_delete();
    } else if cancelled || !open {
        state.pending_delete = None;
    }
}
