//! Charts module - rendering adapters for the dashboard figures

mod plotter;
pub mod snapshot;

pub use plotter::ChartPlotter;
