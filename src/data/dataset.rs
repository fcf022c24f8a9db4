//! Static Dataset Module
//! The ten-row country statistics table, built once at startup and
//! never mutated afterwards.

/// Country selected when no persisted selection exists.
pub const DEFAULT_COUNTRY: &str = "USA";

/// One row of the dataset: aggregate sports statistics and the
/// geographic coordinates used by the map figure.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub country: &'static str,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl CountryRecord {
    const fn new(
        country: &'static str,
        wins: u32,
        losses: u32,
        draws: u32,
        goals: u32,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            country,
            wins,
            losses,
            draws,
            goals,
            latitude,
            longitude,
        }
    }
}

/// Immutable collection of country records. Constructed once in
/// `main` and passed by reference into the view controller.
pub struct Dataset {
    records: Vec<CountryRecord>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self {
            records: vec![
                CountryRecord::new("USA", 20, 5, 5, 15, 37.1, -95.7),
                CountryRecord::new("England", 25, 3, 2, 22, 51.5, -0.1),
                CountryRecord::new("France", 22, 4, 3, 18, 46.6, 1.4),
                CountryRecord::new("Germany", 18, 6, 3, 10, 51.1, 10.4),
                CountryRecord::new("Spain", 24, 2, 4, 20, 40.4, -3.7),
                CountryRecord::new("Italy", 15, 5, 5, 17, 41.9, 12.6),
                CountryRecord::new("Brazil", 19, 4, 3, 19, -14.2, -51.9),
                CountryRecord::new("Argentina", 21, 3, 2, 21, -38.4, -63.4),
                CountryRecord::new("Netherlands", 16, 6, 3, 16, 52.4, 5.5),
                CountryRecord::new("Portugal", 17, 5, 2, 14, 39.6, -8.4),
            ],
        }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Country keys in insertion order. This is the selector's domain.
    pub fn countries(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.records.iter().map(|r| r.country)
    }

    /// Look up the record for a country key.
    pub fn get(&self, country: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.country == country)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ten_records_with_unique_keys() {
        let dataset = Dataset::new();
        assert_eq!(dataset.len(), 10);

        let keys: HashSet<&str> = dataset.countries().collect();
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn default_country_is_in_the_dataset() {
        let dataset = Dataset::new();
        assert!(dataset.get(DEFAULT_COUNTRY).is_some());
    }

    #[test]
    fn coordinates_are_in_range() {
        let dataset = Dataset::new();
        for record in dataset.records() {
            assert!(
                (-90.0..=90.0).contains(&record.latitude),
                "{} latitude out of range",
                record.country
            );
            assert!(
                (-180.0..=180.0).contains(&record.longitude),
                "{} longitude out of range",
                record.country
            );
        }
    }

    #[test]
    fn known_rows_match_the_source_table() {
        let dataset = Dataset::new();

        let england = dataset.get("England").unwrap();
        assert_eq!((england.wins, england.losses, england.draws), (25, 3, 2));
        assert_eq!(england.goals, 22);
        assert_eq!((england.latitude, england.longitude), (51.5, -0.1));

        let brazil = dataset.get("Brazil").unwrap();
        assert_eq!((brazil.wins, brazil.losses, brazil.draws), (19, 4, 3));
        assert_eq!(brazil.goals, 19);
    }

    #[test]
    fn lookup_misses_for_unknown_key() {
        let dataset = Dataset::new();
        assert!(dataset.get("Atlantis").is_none());
    }
}
