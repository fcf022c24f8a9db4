//! GUI module - User interface components

mod app;
mod chart_grid;
mod selector;

pub use app::DashboardApp;
pub use chart_grid::ChartGrid;
pub use selector::{SelectorAction, SelectorPanel};
