//! Chart Plotter Module
//! Interactive rendering of the dashboard figures using egui_plot and
//! the egui painter. This is the live-window adapter; the PNG adapter
//! lives in `snapshot`.

use crate::view::{BarFigure, MapFigure, Metric, PieFigure};
use egui::{vec2, Align2, Color32, FontId, RichText, Sense, Shape, Stroke};
use egui_plot::{
    Bar as PlotBar, BarChart, HLine, MarkerShape, Plot, PlotPoint, Points, Text, VLine,
};

/// Marker color for the map, matching the original blue point marker.
pub const MARKER_COLOR: Color32 = Color32::from_rgb(52, 152, 219);

/// Slice colors for the proportion chart: wins, losses, draws.
pub const PIE_PALETTE: [Color32; 3] = [
    Color32::from_rgb(52, 152, 219), // Blue
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
];

const GRATICULE_COLOR: Color32 = Color32::from_rgb(120, 120, 130);

/// Two-stop sequential color ramp. Bars are shaded by value only;
/// the selected country gets no extra highlight.
#[derive(Debug, Clone, Copy)]
pub struct ColorRamp {
    pub low: Color32,
    pub high: Color32,
}

impl ColorRamp {
    pub fn sample(&self, t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color32::from_rgb(
            lerp(self.low.r(), self.high.r()),
            lerp(self.low.g(), self.high.g()),
            lerp(self.low.b(), self.high.b()),
        )
    }
}

/// Sequential ramps per metric (blues / reds / greens).
pub const BLUES: ColorRamp = ColorRamp {
    low: Color32::from_rgb(222, 235, 247),
    high: Color32::from_rgb(8, 48, 107),
};
pub const REDS: ColorRamp = ColorRamp {
    low: Color32::from_rgb(254, 224, 210),
    high: Color32::from_rgb(103, 0, 13),
};
pub const GREENS: ColorRamp = ColorRamp {
    low: Color32::from_rgb(229, 245, 224),
    high: Color32::from_rgb(0, 68, 27),
};

/// Draws the dashboard figures as interactive egui widgets.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn metric_ramp(metric: Metric) -> ColorRamp {
        match metric {
            Metric::Wins => BLUES,
            Metric::Losses => REDS,
            Metric::Draws => GREENS,
        }
    }

    /// Draw an all-countries bar chart. X axis carries the country
    /// names; bar color encodes the value on the metric's ramp.
    pub fn draw_bar_chart(ui: &mut egui::Ui, figure: &BarFigure, height: f32) {
        let labels: Vec<&'static str> = figure.bars.iter().map(|b| b.country).collect();
        let max = figure.max_value().max(1.0);
        let ramp = Self::metric_ramp(figure.metric);

        let bars: Vec<PlotBar> = figure
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let t = (bar.value / max) as f32;
                PlotBar::new(i as f64, bar.value)
                    .width(0.7)
                    .fill(ramp.sample(t))
                    .name(bar.country)
            })
            .collect();

        Plot::new(format!("bar_{}", figure.metric.label()))
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .y_axis_label(figure.metric.label())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() < 1e-3 && idx >= 0.0 && (idx as usize) < labels.len() {
                    labels[idx as usize].to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name(&figure.title));
            });
    }

    /// Draw the proportion chart with the painter: a legend row, then
    /// a triangle-fan pie with in-slice percentage labels.
    pub fn draw_pie_chart(ui: &mut egui::Ui, figure: &PieFigure, height: f32) {
        // Legend
        ui.horizontal(|ui| {
            for (slice, color) in figure.slices.iter().zip(PIE_PALETTE) {
                let (rect, _) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
                ui.painter().rect_filled(rect, 3.0, color);
                ui.label(RichText::new(slice.label).size(12.0));
                ui.add_space(10.0);
            }
        });

        let desired = vec2(ui.available_width(), height);
        let (response, painter) = ui.allocate_painter(desired, Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = (rect.width().min(rect.height()) * 0.5 - 8.0).max(10.0);

        let total = figure.total();
        if total <= 0.0 {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                "No data",
                FontId::proportional(14.0),
                ui.visuals().text_color(),
            );
            return;
        }

        let mut angle = -std::f32::consts::FRAC_PI_2;
        for (slice, color) in figure.slices.iter().zip(PIE_PALETTE) {
            let sweep = (slice.value / total) as f32 * std::f32::consts::TAU;

            // Fan of small triangles; each is convex even when the
            // slice itself spans more than a half turn.
            let steps = ((sweep / 0.08).ceil() as usize).max(1);
            let delta = sweep / steps as f32;
            for k in 0..steps {
                let a0 = angle + k as f32 * delta;
                let a1 = a0 + delta;
                let p0 = center + radius * vec2(a0.cos(), a0.sin());
                let p1 = center + radius * vec2(a1.cos(), a1.sin());
                painter.add(Shape::convex_polygon(
                    vec![center, p0, p1],
                    color,
                    Stroke::NONE,
                ));
            }

            let mid = angle + sweep * 0.5;
            let label_pos = center + radius * 0.62 * vec2(mid.cos(), mid.sin());
            let percent = slice.value / total * 100.0;
            painter.text(
                label_pos,
                Align2::CENTER_CENTER,
                format!("{:.0}%", percent),
                FontId::proportional(12.0),
                Color32::WHITE,
            );

            angle += sweep;
        }
    }

    /// Draw the world-view map: longitude/latitude axes with a single
    /// point marker on the selected country.
    pub fn draw_map_chart(ui: &mut egui::Ui, figure: &MapFigure, height: f32) {
        Plot::new("world_map")
            .height(height)
            .data_aspect(1.0)
            .include_x(-180.0)
            .include_x(180.0)
            .include_y(-90.0)
            .include_y(90.0)
            .allow_scroll(false)
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .x_axis_formatter(|mark, _range| format!("{:.0}°", mark.value))
            .y_axis_formatter(|mark, _range| format!("{:.0}°", mark.value))
            .show(ui, |plot_ui| {
                // Equator and prime meridian stand out from the grid.
                plot_ui.hline(HLine::new(0.0).color(GRATICULE_COLOR).width(1.0));
                plot_ui.vline(VLine::new(0.0).color(GRATICULE_COLOR).width(1.0));

                plot_ui.points(
                    Points::new(vec![[figure.longitude, figure.latitude]])
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(6.0)
                        .color(MARKER_COLOR)
                        .name(&figure.label),
                );
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(figure.longitude, figure.latitude + 7.0),
                        RichText::new(&figure.label).size(13.0),
                    )
                    .color(ui_text_color(plot_ui)),
                );
            });
    }
}

fn ui_text_color(plot_ui: &egui_plot::PlotUi) -> Color32 {
    plot_ui.ctx().style().visuals.text_color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_hits_its_endpoints() {
        for ramp in [BLUES, REDS, GREENS] {
            assert_eq!(ramp.sample(0.0), ramp.low);
            assert_eq!(ramp.sample(1.0), ramp.high);
        }
    }

    #[test]
    fn ramp_clamps_out_of_range_input() {
        assert_eq!(BLUES.sample(-2.0), BLUES.low);
        assert_eq!(BLUES.sample(5.0), BLUES.high);
    }

    #[test]
    fn each_metric_has_its_own_ramp() {
        let wins = ChartPlotter::metric_ramp(Metric::Wins);
        let losses = ChartPlotter::metric_ramp(Metric::Losses);
        let draws = ChartPlotter::metric_ramp(Metric::Draws);
        assert_ne!(wins.high, losses.high);
        assert_ne!(losses.high, draws.high);
    }
}
