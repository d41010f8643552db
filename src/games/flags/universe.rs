//! The set of countries a game can draw flags from.

use super::types::{CANDIDATE_COUNT, Country, CountryCode};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Built-in table of ISO 3166-1 alpha-2 codes and English names.
const BUILTIN: &[(&str, &str)] = &[
    ("ar", "Argentina"),
    ("at", "Austria"),
    ("au", "Australia"),
    ("be", "Belgium"),
    ("br", "Brazil"),
    ("ca", "Canada"),
    ("ch", "Switzerland"),
    ("cl", "Chile"),
    ("cn", "China"),
    ("co", "Colombia"),
    ("cz", "Czechia"),
    ("de", "Germany"),
    ("dk", "Denmark"),
    ("ee", "Estonia"),
    ("eg", "Egypt"),
    ("es", "Spain"),
    ("fi", "Finland"),
    ("fr", "France"),
    ("gb", "United Kingdom"),
    ("gr", "Greece"),
    ("hu", "Hungary"),
    ("ie", "Ireland"),
    ("in", "India"),
    ("is", "Iceland"),
    ("it", "Italy"),
    ("jp", "Japan"),
    ("ke", "Kenya"),
    ("kr", "South Korea"),
    ("mx", "Mexico"),
    ("ng", "Nigeria"),
    ("nl", "Netherlands"),
    ("no", "Norway"),
    ("nz", "New Zealand"),
    ("pe", "Peru"),
    ("pl", "Poland"),
    ("pt", "Portugal"),
    ("ro", "Romania"),
    ("se", "Sweden"),
    ("th", "Thailand"),
    ("tr", "Turkey"),
    ("ua", "Ukraine"),
    ("us", "United States"),
    ("vn", "Vietnam"),
    ("za", "South Africa"),
];

/// Read-only, duplicate-free list of countries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryUniverse {
    countries: Vec<Country>,
}

/// On-disk layout of a countries file.
#[derive(Debug, Deserialize, Serialize)]
struct UniverseFile {
    #[serde(rename = "country", default)]
    countries: Vec<Country>,
}

impl CountryUniverse {
    /// Validates and wraps a list of countries.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError`] if there are fewer than three countries, a
    /// code or name is blank, or a code appears twice.
    #[instrument(skip(countries), fields(count = countries.len()))]
    pub fn new(countries: Vec<Country>) -> Result<Self, UniverseError> {
        if countries.len() < CANDIDATE_COUNT {
            return Err(UniverseError::new(format!(
                "need at least {} countries, got {}",
                CANDIDATE_COUNT,
                countries.len()
            )));
        }

        let mut seen = HashSet::with_capacity(countries.len());
        for country in &countries {
            if country.code.as_str().trim().is_empty() || country.name.trim().is_empty() {
                return Err(UniverseError::new("country code and name must not be blank"));
            }
            if !seen.insert(country.code.clone()) {
                return Err(UniverseError::new(format!("duplicate country code '{}'", country.code)));
            }
        }

        debug!("Country universe validated");
        Ok(Self { countries })
    }

    /// The built-in country table.
    pub fn builtin() -> Self {
        Self {
            countries: BUILTIN
                .iter()
                .map(|(code, name)| Country::new(*code, *name))
                .collect(),
        }
    }

    /// Loads countries from a TOML file of `[[country]]` tables.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError`] if the file can't be read or parsed, or the
    /// list fails validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, UniverseError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| UniverseError::new(format!("Failed to read countries file: {}", e)))?;
        let file: UniverseFile = toml::from_str(&content)
            .map_err(|e| UniverseError::new(format!("Failed to parse countries file: {}", e)))?;

        let universe = Self::new(file.countries)?;
        info!(count = universe.len(), "Countries loaded");
        Ok(universe)
    }

    /// Display name for `code`.
    pub fn name(&self, code: &CountryCode) -> Option<&str> {
        self.countries
            .iter()
            .find(|c| &c.code == code)
            .map(|c| c.name.as_str())
    }

    /// Every code, in table order.
    pub fn codes(&self) -> Vec<CountryCode> {
        self.countries.iter().map(|c| c.code.clone()).collect()
    }

    /// Iterates over the countries.
    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Always false for a validated universe.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Default for CountryUniverse {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Country list could not be built.
#[derive(Debug, Clone, Display, Error)]
#[display("Universe error: {} at {}:{}", message, file, line)]
pub struct UniverseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl UniverseError {
    /// Creates a new universe error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
