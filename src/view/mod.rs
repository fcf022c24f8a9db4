//! View module - the selection -> view-model mapping

mod controller;
mod figures;

pub use controller::{build_view, ViewError};
pub use figures::{Bar, BarFigure, DashboardView, MapFigure, Metric, PieFigure, PieSlice};
