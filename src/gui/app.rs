//! Dashboard Main Application
//! Main window: selector panel on the left, chart grid in the center.
//! Owns the dataset, the current selection and the current view;
//! recomputes the view only when the selection changes.

use crate::charts::snapshot;
use crate::data::{Dataset, DEFAULT_COUNTRY};
use crate::gui::{ChartGrid, SelectorAction, SelectorPanel};
use crate::view::{build_view, DashboardView};
use egui::SidePanel;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

const STORAGE_KEY: &str = "sportsboard.state";

/// UI state persisted across runs through eframe storage.
#[derive(Serialize, Deserialize)]
struct PersistedState {
    selected: String,
}

/// Main application window.
pub struct DashboardApp {
    dataset: Dataset,
    selector: SelectorPanel,
    view: DashboardView,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let dataset = Dataset::new();

        let selected = cc
            .storage
            .and_then(|storage| storage.get_string(STORAGE_KEY))
            .and_then(|raw| serde_json::from_str::<PersistedState>(&raw).ok())
            .map(|state| state.selected)
            .filter(|country| dataset.get(country).is_some())
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

        info!(countries = dataset.len(), %selected, "dashboard ready");

        // The selection was just validated against the dataset.
        let view = build_view(&dataset, &selected).expect("validated selection");

        Self {
            dataset,
            selector: SelectorPanel::new(selected),
            view,
        }
    }

    /// Recompute the view for the current selection.
    fn apply_selection(&mut self) {
        let selected = self.selector.selected.clone();
        match build_view(&self.dataset, &selected) {
            Ok(view) => {
                self.view = view;
                self.selector.set_status(&format!("Showing {selected}"));
            }
            // Unreachable through the dropdown; keep the old view and
            // surface the error on the status line.
            Err(err) => {
                warn!(%err, "selection rejected");
                self.selector.set_status(&format!("Error: {err}"));
            }
        }
    }

    /// Export the current view to a PNG chosen by the user, then open
    /// it with the system default viewer.
    fn handle_export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("sportsboard.png")
            .save_file()
        else {
            return; // User cancelled
        };

        self.selector.set_status("Rendering snapshot...");

        match snapshot::render_dashboard(&self.view, &path) {
            Ok(()) => {
                info!(path = %path.display(), "dashboard exported");
                self.selector
                    .set_status(&format!("Exported {}", path.display()));
                if let Err(err) = open::that(&path) {
                    warn!(%err, "could not open exported file");
                }
            }
            Err(err) => {
                error!(%err, "snapshot export failed");
                self.selector.set_status(&format!("Error: {err}"));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::left("selector_panel")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.selector.show(ui, &self.dataset, &self.view.summary);

                    match action {
                        SelectorAction::SelectionChanged => self.apply_selection(),
                        SelectorAction::ExportPng => self.handle_export(),
                        SelectorAction::None => {}
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ChartGrid::show(ui, &self.view);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = PersistedState {
            selected: self.selector.selected.clone(),
        };
        if let Ok(raw) = serde_json::to_string(&state) {
            storage.set_string(STORAGE_KEY, raw);
        }
    }
}
