//! Selector Panel Widget
//! Left side panel: country dropdown, the summary output region, a
//! small detail table and the export action.

use crate::data::{CountryRecord, Dataset};
use egui::{Color32, ComboBox, RichText};

/// Left side panel with the country selector and export controls.
pub struct SelectorPanel {
    pub selected: String,
    pub status: String,
}

impl SelectorPanel {
    pub fn new(selected: String) -> Self {
        Self {
            selected,
            status: "Ready".to_string(),
        }
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the panel. Returns the action the app should take.
    pub fn show(&mut self, ui: &mut egui::Ui, dataset: &Dataset, summary: &str) -> SelectorAction {
        let mut action = SelectorAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("⚽ Sports Statistics")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(RichText::new("Dashboard").size(11.0).color(Color32::GRAY));
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Country Section =====
        ui.label(RichText::new("🌍 Country").size(14.0).strong());
        ui.add_space(5.0);

        ComboBox::from_id_salt("country")
            .width(180.0)
            .selected_text(&self.selected)
            .show_ui(ui, |ui| {
                for country in dataset.countries() {
                    if ui
                        .selectable_label(self.selected == country, country)
                        .clicked()
                    {
                        self.selected = country.to_string();
                        action = SelectorAction::SelectionChanged;
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Summary Section =====
        ui.label(RichText::new("📊 Summary").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(summary).size(14.0));
            });

        ui.add_space(10.0);

        if let Some(record) = dataset.get(&self.selected) {
            Self::draw_detail_table(ui, record);
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                .min_size(egui::vec2(160.0, 30.0));
            if ui.add(button).clicked() {
                action = SelectorAction::ExportPng;
            }
        });

        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    fn draw_detail_table(ui: &mut egui::Ui, record: &CountryRecord) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("country_detail")
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Wins").strong().size(11.0));
                        ui.label(RichText::new(record.wins.to_string()).size(11.0));
                        ui.end_row();
                        ui.label(RichText::new("Losses").strong().size(11.0));
                        ui.label(RichText::new(record.losses.to_string()).size(11.0));
                        ui.end_row();
                        ui.label(RichText::new("Draws").strong().size(11.0));
                        ui.label(RichText::new(record.draws.to_string()).size(11.0));
                        ui.end_row();
                        ui.label(RichText::new("Goals").strong().size(11.0));
                        ui.label(RichText::new(record.goals.to_string()).size(11.0));
                        ui.end_row();
                        ui.label(RichText::new("Position").strong().size(11.0));
                        ui.label(
                            RichText::new(format!(
                                "{:.1}°, {:.1}°",
                                record.latitude, record.longitude
                            ))
                            .size(11.0),
                        );
                        ui.end_row();
                    });
            });
    }
}

/// Actions triggered by the selector panel
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorAction {
    None,
    SelectionChanged,
    ExportPng,
}
