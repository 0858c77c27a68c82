//! City → dataset file mapping.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A city with a published trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// `(city, lower-case key, file name)` for every supported city.
static CITY_DATA: [(City, &str, &str); 3] = [
    (City::Chicago, "chicago", "chicago.csv"),
    (City::NewYorkCity, "new york city", "new_york_city.csv"),
    (City::Washington, "washington", "washington.csv"),
];

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Look up a city by its lower-case key (e.g. `"new york city"`).
    pub fn from_key(key: &str) -> Option<City> {
        CITY_DATA
            .iter()
            .find(|(_, k, _)| *k == key)
            .map(|(city, _, _)| *city)
    }

    pub fn key(self) -> &'static str {
        self.entry().1
    }

    /// Default file name of the city's dataset.
    pub fn file_name(self) -> &'static str {
        self.entry().2
    }

    fn entry(self) -> &'static (City, &'static str, &'static str) {
        // CITY_DATA is in variant declaration order.
        &CITY_DATA[self as usize]
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolves a [`City`] to the file its trips are loaded from.
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    data_dir: PathBuf,
    overrides: HashMap<City, PathBuf>,
}

impl DatasetRegistry {
    /// Registry reading `<data_dir>/<city file>` for every city.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            overrides: HashMap::new(),
        }
    }

    /// Read `city` from `path` instead of its default file.
    ///
    /// The path is used as given; relative paths are not joined to the data directory.
    pub fn with_source(mut self, city: City, path: impl AsRef<Path>) -> Self {
        self.overrides.insert(city, path.as_ref().to_path_buf());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the dataset for `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        match self.overrides.get(&city) {
            Some(path) => path.clone(),
            None => self.data_dir.join(city.file_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{City, DatasetRegistry};
    use std::path::PathBuf;

    #[test]
    fn keys_round_trip_for_every_city() {
        for city in City::ALL {
            assert_eq!(City::from_key(city.key()), Some(city));
        }
        assert_eq!(City::from_key("boston"), None);
        assert_eq!(City::from_key("Chicago"), None);
    }

    #[test]
    fn entries_line_up_with_variants() {
        assert_eq!(City::NewYorkCity.key(), "new york city");
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.file_name(), "washington.csv");
    }

    #[test]
    fn path_for_joins_data_dir_unless_overridden() {
        let registry = DatasetRegistry::new("data").with_source(City::Washington, "/tmp/dc.ndjson");
        assert_eq!(registry.path_for(City::Chicago), PathBuf::from("data").join("chicago.csv"));
        assert_eq!(registry.path_for(City::Washington), PathBuf::from("/tmp/dc.ndjson"));
    }
}
