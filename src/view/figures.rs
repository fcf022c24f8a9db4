//! Figure Value Types
//! Toolkit-agnostic chart descriptions produced by the view controller.
//! Both rendering adapters (the live egui widgets and the plotters
//! snapshot) consume these without recomputing anything.

/// The metric a bar figure plots. Also selects the sequential color
/// ramp used by the adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Wins,
    Losses,
    Draws,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Wins => "Wins",
            Metric::Losses => "Losses",
            Metric::Draws => "Draws",
        }
    }
}

/// Geographic point-marker figure for the selected country.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFigure {
    pub title: String,
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One slice of the proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub value: f64,
}

/// Proportion chart (wins/losses/draws) for the selected country.
#[derive(Debug, Clone, PartialEq)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One bar in an all-countries bar figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub country: &'static str,
    pub value: f64,
}

/// Bar figure plotting one metric across every record.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFigure {
    pub title: String,
    pub metric: Metric,
    pub bars: Vec<Bar>,
}

impl BarFigure {
    /// Largest bar value, used to normalize the color ramp.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().fold(0.0, |acc, b| acc.max(b.value))
    }
}

/// Everything one selection renders: the summary string plus the five
/// chart figures.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub summary: String,
    pub map: MapFigure,
    pub pie: PieFigure,
    pub wins: BarFigure,
    pub losses: BarFigure,
    pub draws: BarFigure,
}
