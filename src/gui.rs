// ShelfTrack - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and dispatches export intents.

use crate::app::state::AppState;
use crate::ui;

/// The ShelfTrack application.
pub struct ShelfTrackApp {
    pub state: AppState,
}

impl ShelfTrackApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Snapshot of the visible products for export (store order preserved).
    fn visible_snapshot(&self) -> Vec<crate::core::model::Product> {
        self.state
            .visible_products()
            .into_iter()
            .cloned()
            .collect()
    }
}

impl eframe::App for ShelfTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    // Export sub-menu -- enabled only when there are visible products
                    let has_visible = !self.state.visible_indices.is_empty();
                    ui.add_enabled_ui(has_visible, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Export CSV...").clicked() {
                                if let Some(dest) = rfd::FileDialog::new()
                                    .add_filter("CSV", &["csv"])
                                    .set_file_name("inventory.csv")
                                    .save_file()
                                {
                                    let products = self.visible_snapshot();
                                    match std::fs::File::create(&dest) {
                                        Ok(f) => {
                                            match crate::core::export::export_csv(
                                                &products, f, &dest,
                                            ) {
                                                Ok(n) => {
                                                    self.state.status_message =
                                                        format!("Exported {n} products to CSV.");
                                                }
                                                Err(e) => {
                                                    self.state.status_message =
                                                        format!("CSV export failed: {e}");
                                                }
                                            }
                                        }
                                        Err(e) => {
                                            self.state.status_message =
                                                format!("Cannot create file: {e}");
                                        }
                                    }
                                }
                                ui.close_menu();
                            }
                            if ui.button("Export JSON...").clicked() {
                                if let Some(dest) = rfd::FileDialog::new()
                                    .add_filter("JSON", &["json"])
                                    .set_file_name("inventory.json")
                                    .save_file()
                                {
                                    let products = self.visible_snapshot();
                                    match std::fs::File::create(&dest) {
                                        Ok(f) => {
                                            match crate::core::export::export_json(
                                                &products, f, &dest,
                                            ) {
                                                Ok(n) => {
                                                    self.state.status_message =
                                                        format!("Exported {n} products to JSON.");
                                                }
                                                Err(e) => {
                                                    self.state.status_message =
                                                        format!("JSON export failed: {e}");
                                                }
                                            }
                                        }
                                        Err(e) => {
                                            self.state.status_message =
                                                format!("Cannot create file: {e}");
                                        }
                                    }
                                }
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Stats strip
        egui::TopBottomPanel::top("stats_strip").show(ctx, |ui| {
            ui::panels::stats::render(ui, &self.state);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.store.products().len();
                    let visible = self.state.visible_indices.len();
                    if total > 0 {
                        ui.label(format!("{visible}/{total} products"));
                    }
                });
            });
        });

        // Detail pane (bottom)
        egui::TopBottomPanel::bottom("detail_pane")
            .resizable(true)
            .default_height(ui::theme::DETAIL_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::detail::render(ui, &self.state);
            });

        // Left sidebar: search and filter controls
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::filters::render(ui, &mut self.state);
                    });
            });

        // Central panel (product list)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::list::render(ui, &mut self.state);
        });

        // Modals
        ui::panels::form::render(ctx, &mut self.state);
        ui::panels::confirm::render(ctx, &mut self.state);
    }
}
