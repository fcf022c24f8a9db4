//! Snapshot Renderer
//! Renders a complete `DashboardView` into a single PNG using
//! plotters. Layout mirrors the live window: summary on top, map,
//! pie and wins bars on the first row, losses and draws below.

use crate::view::{BarFigure, DashboardView, MapFigure, Metric, PieFigure};
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Output image dimensions.
pub const SNAPSHOT_SIZE: (u32, u32) = (1600, 1000);

const MARKER: RGBColor = RGBColor(52, 152, 219);
const PIE_COLORS: [RGBColor; 3] = [
    RGBColor(52, 152, 219),
    RGBColor(231, 76, 60),
    RGBColor(46, 204, 113),
];
const MERIDIAN: RGBColor = RGBColor(170, 170, 180);

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Render the whole dashboard to `path` as a PNG.
pub fn render_dashboard(view: &DashboardView, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, SNAPSHOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(&view.summary, ("sans-serif", 28))?;

    let rows = root.split_evenly((2, 1));
    let top = rows[0].split_evenly((1, 3));
    draw_map(&top[0], &view.map)?;
    draw_pie(&top[1], &view.pie)?;
    draw_bars(&top[2], &view.wins)?;

    let bottom = rows[1].split_evenly((1, 2));
    draw_bars(&bottom[0], &view.losses)?;
    draw_bars(&bottom[1], &view.draws)?;

    root.present()?;
    Ok(())
}

/// Color for a bar at normalized height `t`, on the metric's ramp.
fn metric_color(metric: Metric, t: f64) -> RGBColor {
    let (low, high) = match metric {
        Metric::Wins => (RGBColor(222, 235, 247), RGBColor(8, 48, 107)),
        Metric::Losses => (RGBColor(254, 224, 210), RGBColor(103, 0, 13)),
        Metric::Draws => (RGBColor(229, 245, 224), RGBColor(0, 68, 27)),
    };
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(
        lerp(low.0, high.0),
        lerp(low.1, high.1),
        lerp(low.2, high.2),
    )
}

fn draw_map(area: &Area, figure: &MapFigure) -> Result<()> {
    let area = area.clone().titled(&figure.title, ("sans-serif", 20))?;

    let mut chart = ChartBuilder::on(&area)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(42)
        .build_cartesian_2d(-180.0..180.0, -90.0..90.0)?;

    chart
        .configure_mesh()
        .x_desc("Longitude")
        .y_desc("Latitude")
        .x_labels(7)
        .y_labels(7)
        .x_label_formatter(&|v| format!("{v:.0}°"))
        .y_label_formatter(&|v| format!("{v:.0}°"))
        .draw()?;

    // Equator and prime meridian
    chart.draw_series(LineSeries::new(
        vec![(-180.0, 0.0), (180.0, 0.0)],
        &MERIDIAN,
    ))?;
    chart.draw_series(LineSeries::new(vec![(0.0, -90.0), (0.0, 90.0)], &MERIDIAN))?;

    chart.draw_series(std::iter::once(Circle::new(
        (figure.longitude, figure.latitude),
        6,
        MARKER.filled(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        figure.label.clone(),
        (figure.longitude, figure.latitude + 5.0),
        ("sans-serif", 16),
    )))?;

    Ok(())
}

fn draw_pie(area: &Area, figure: &PieFigure) -> Result<()> {
    let area = area.clone().titled(&figure.title, ("sans-serif", 20))?;

    let (w, h) = area.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2 + 8);
    let radius = (w.min(h) as f64) * 0.32;

    let sizes: Vec<f64> = figure.slices.iter().map(|s| s.value).collect();
    let labels: Vec<String> = figure.slices.iter().map(|s| s.label.to_string()).collect();
    let colors = PIE_COLORS.to_vec();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 13).into_font().color(&BLACK));
    area.draw(&pie)?;

    Ok(())
}

fn draw_bars(area: &Area, figure: &BarFigure) -> Result<()> {
    let n = figure.bars.len();
    let max = figure.max_value().max(1.0);
    let names: Vec<&str> = figure.bars.iter().map(|b| b.country).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(&figure.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(72)
        .y_label_area_size(40)
        .build_cartesian_2d((0..n).into_segmented(), 0.0..max * 1.15)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < n => names[*i].to_string(),
            _ => String::new(),
        })
        .y_desc(figure.metric.label())
        .draw()?;

    chart.draw_series(figure.bars.iter().enumerate().map(|(i, bar)| {
        let t = bar.value / max;
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), bar.value),
            ],
            metric_color(figure.metric, t).filled(),
        );
        rect.set_margin(0, 0, 4, 4);
        rect
    }))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::view::build_view;

    #[test]
    fn metric_color_hits_ramp_endpoints() {
        assert_eq!(metric_color(Metric::Wins, 0.0), RGBColor(222, 235, 247));
        assert_eq!(metric_color(Metric::Wins, 1.0), RGBColor(8, 48, 107));
        assert_eq!(metric_color(Metric::Losses, 2.0), RGBColor(103, 0, 13));
    }

    #[test]
    #[ignore = "needs a system font for plotters text rendering"]
    fn writes_a_non_empty_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.png");

        let dataset = Dataset::new();
        let view = build_view(&dataset, "England").unwrap();
        render_dashboard(&view, &path).unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }
}
