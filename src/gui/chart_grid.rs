//! Chart Grid Widget
//! Central scrollable area laying out the five charts the way the
//! original page did: map on the left half, pie above the wins/losses
//! pair on the right half, draws bar full width below.

use crate::charts::ChartPlotter;
use crate::view::DashboardView;
use egui::{RichText, ScrollArea};

const CHART_SPACING: f32 = 15.0;
const UPPER_HEIGHT: f32 = 460.0;
const LOWER_HEIGHT: f32 = 300.0;

pub struct ChartGrid;

impl ChartGrid {
    pub fn show(ui: &mut egui::Ui, view: &DashboardView) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let avail_width = ui.available_width();
                let half = ((avail_width - CHART_SPACING) / 2.0).max(200.0);

                ui.horizontal(|ui| {
                    // Left half: world map
                    ui.vertical(|ui| {
                        ui.set_width(half);
                        ui.label(RichText::new(&view.map.title).size(15.0).strong());
                        ChartPlotter::draw_map_chart(ui, &view.map, UPPER_HEIGHT);
                    });

                    ui.add_space(CHART_SPACING);

                    // Right half: pie over the wins/losses pair
                    ui.vertical(|ui| {
                        ui.set_width(half);
                        ui.label(RichText::new(&view.pie.title).size(15.0).strong());
                        ChartPlotter::draw_pie_chart(ui, &view.pie, UPPER_HEIGHT * 0.42);

                        ui.add_space(CHART_SPACING);

                        let quarter = ((half - CHART_SPACING) / 2.0).max(100.0);
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.set_width(quarter);
                                ui.label(RichText::new(&view.wins.title).size(13.0).strong());
                                ChartPlotter::draw_bar_chart(ui, &view.wins, UPPER_HEIGHT * 0.38);
                            });
                            ui.add_space(CHART_SPACING);
                            ui.vertical(|ui| {
                                ui.set_width(quarter);
                                ui.label(RichText::new(&view.losses.title).size(13.0).strong());
                                ChartPlotter::draw_bar_chart(ui, &view.losses, UPPER_HEIGHT * 0.38);
                            });
                        });
                    });
                });

                ui.add_space(CHART_SPACING);

                // Full-width draws bar
                ui.label(RichText::new(&view.draws.title).size(15.0).strong());
                ChartPlotter::draw_bar_chart(ui, &view.draws, LOWER_HEIGHT);
            });
    }
}
