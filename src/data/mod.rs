//! Data module - the static country statistics table

mod dataset;

pub use dataset::{CountryRecord, Dataset, DEFAULT_COUNTRY};
