//! View Controller Module
//! The single pure function of the program: map a selected country key
//! to the six rendered outputs.

use crate::data::{CountryRecord, Dataset};
use crate::view::figures::{Bar, BarFigure, DashboardView, MapFigure, Metric, PieFigure, PieSlice};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("unknown country: {0}")]
    UnknownCountry(String),
}

/// Build the full dashboard view for one selected country.
///
/// The three bar figures always cover every record; only the summary,
/// map and pie derive from the selected record itself.
pub fn build_view(dataset: &Dataset, country: &str) -> Result<DashboardView, ViewError> {
    let record = dataset
        .get(country)
        .ok_or_else(|| ViewError::UnknownCountry(country.to_string()))?;

    Ok(DashboardView {
        summary: summary_line(record),
        map: map_figure(record),
        pie: pie_figure(record),
        wins: bar_figure(dataset, Metric::Wins),
        losses: bar_figure(dataset, Metric::Losses),
        draws: bar_figure(dataset, Metric::Draws),
    })
}

fn summary_line(record: &CountryRecord) -> String {
    format!(
        "Wins: {}, Losses: {}, Draws: {}",
        record.wins, record.losses, record.draws
    )
}

fn map_figure(record: &CountryRecord) -> MapFigure {
    MapFigure {
        title: format!("{} Location", record.country),
        label: record.country.to_string(),
        latitude: record.latitude,
        longitude: record.longitude,
    }
}

fn pie_figure(record: &CountryRecord) -> PieFigure {
    PieFigure {
        title: format!("Performance of {}", record.country),
        slices: vec![
            PieSlice {
                label: "Wins",
                value: record.wins as f64,
            },
            PieSlice {
                label: "Losses",
                value: record.losses as f64,
            },
            PieSlice {
                label: "Draws",
                value: record.draws as f64,
            },
        ],
    }
}

fn bar_figure(dataset: &Dataset, metric: Metric) -> BarFigure {
    let bars = dataset
        .records()
        .iter()
        .map(|r| Bar {
            country: r.country,
            value: match metric {
                Metric::Wins => r.wins as f64,
                Metric::Losses => r.losses as f64,
                Metric::Draws => r.draws as f64,
            },
        })
        .collect();

    BarFigure {
        title: format!("{} by Country", metric.label()),
        metric,
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_contains_each_records_values() {
        let dataset = Dataset::new();
        for record in dataset.records() {
            let view = build_view(&dataset, record.country).unwrap();
            assert_eq!(
                view.summary,
                format!(
                    "Wins: {}, Losses: {}, Draws: {}",
                    record.wins, record.losses, record.draws
                )
            );
        }
    }

    #[test]
    fn england_summary_and_marker() {
        let dataset = Dataset::new();
        let view = build_view(&dataset, "England").unwrap();
        assert_eq!(view.summary, "Wins: 25, Losses: 3, Draws: 2");
        assert_eq!(view.map.latitude, 51.5);
        assert_eq!(view.map.longitude, -0.1);
        assert_eq!(view.map.title, "England Location");
    }

    #[test]
    fn brazil_pie_slices() {
        let dataset = Dataset::new();
        let view = build_view(&dataset, "Brazil").unwrap();
        assert_eq!(view.summary, "Wins: 19, Losses: 4, Draws: 3");

        let values: Vec<f64> = view.pie.slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![19.0, 4.0, 3.0]);
        assert_eq!(view.pie.title, "Performance of Brazil");
    }

    #[test]
    fn pie_total_equals_wins_losses_draws() {
        let dataset = Dataset::new();
        for record in dataset.records() {
            let view = build_view(&dataset, record.country).unwrap();
            let expected = (record.wins + record.losses + record.draws) as f64;
            assert_eq!(view.pie.total(), expected, "{}", record.country);
        }
    }

    #[test]
    fn bar_figures_cover_every_record() {
        let dataset = Dataset::new();
        let view = build_view(&dataset, "USA").unwrap();
        for fig in [&view.wins, &view.losses, &view.draws] {
            assert_eq!(fig.bars.len(), dataset.len());
        }
    }

    #[test]
    fn bar_figures_are_selection_invariant() {
        let dataset = Dataset::new();
        let usa = build_view(&dataset, "USA").unwrap();
        let italy = build_view(&dataset, "Italy").unwrap();

        assert_eq!(usa.wins, italy.wins);
        assert_eq!(usa.losses, italy.losses);
        assert_eq!(usa.draws, italy.draws);

        // While the record-derived outputs do change.
        assert_ne!(usa.summary, italy.summary);
        assert_ne!(usa.map, italy.map);
    }

    #[test]
    fn bar_titles_and_metrics() {
        let dataset = Dataset::new();
        let view = build_view(&dataset, "Spain").unwrap();
        assert_eq!(view.wins.title, "Wins by Country");
        assert_eq!(view.losses.title, "Losses by Country");
        assert_eq!(view.draws.title, "Draws by Country");
        assert_eq!(view.wins.metric, Metric::Wins);
        assert_eq!(view.wins.max_value(), 25.0);
    }

    #[test]
    fn unknown_country_is_a_typed_error() {
        let dataset = Dataset::new();
        let err = build_view(&dataset, "Atlantis").unwrap_err();
        assert!(matches!(err, ViewError::UnknownCountry(ref c) if c == "Atlantis"));
    }
}
