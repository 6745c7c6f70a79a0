//! Fixtures
//!
//! YAML-backed demo data: a buyer-facing listing catalog and a market
//! price board, loaded from category subdirectories under a base path.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    grades::GradeParseError,
    listings::{Listing, ValidationError},
    prices::{MarketBoard, MarketQuote},
};

pub mod listings;
pub mod prices;

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files.
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A decimal field did not parse.
    #[error("invalid decimal value: {0}")]
    InvalidDecimal(String),

    /// A timestamp field did not parse.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Grade or tier notation was not recognised.
    #[error(transparent)]
    Grade(#[from] GradeParseError),

    /// A listing entry failed domain validation.
    #[error(transparent)]
    Listing(#[from] ValidationError),

    /// No listing stored under the requested key.
    #[error("listing not found: {0}")]
    ListingNotFound(String),
}

/// Loaded fixture set: keyed listings plus a market board.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files.
    base_path: PathBuf,

    /// Catalog in file order.
    catalog: Vec<Listing>,

    /// Fixture key -> catalog index.
    listing_keys: FxHashMap<String, usize>,

    /// Market quotes in file order.
    quotes: Vec<MarketQuote>,
}

impl Fixture {
    /// Create an empty fixture with the default base path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create an empty fixture with a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: Vec::new(),
            listing_keys: FxHashMap::default(),
            quotes: Vec::new(),
        }
    }

    /// Load a listing catalog from `listings/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an
    /// entry fails domain validation.
    pub fn load_listings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("listings").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: listings::ListingsFixture = serde_norway::from_str(&contents)?;

        for entry in fixture.listings {
            let key = entry.key.clone();
            let listing: Listing = entry.try_into()?;

            self.listing_keys.insert(key, self.catalog.len());
            self.catalog.push(listing);
        }

        Ok(self)
    }

    /// Load market quotes from `prices/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// quote carries an unknown grade or malformed price.
    pub fn load_quotes(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("prices").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: prices::QuotesFixture = serde_norway::from_str(&contents)?;

        for entry in fixture.quotes {
            self.quotes.push(entry.try_into()?);
        }

        Ok(self)
    }

    /// The loaded catalog, in file order.
    #[must_use]
    pub fn catalog(&self) -> &[Listing] {
        &self.catalog
    }

    /// Look up a catalog listing by its fixture key.
    ///
    /// # Errors
    ///
    /// Returns an error if no listing was loaded under `key`.
    pub fn listing(&self, key: &str) -> Result<&Listing, FixtureError> {
        self.listing_keys
            .get(key)
            .and_then(|&index| self.catalog.get(index))
            .ok_or_else(|| FixtureError::ListingNotFound(key.to_string()))
    }

    /// Fixture key of a loaded listing, when it has one.
    #[must_use]
    pub fn key_of(&self, listing: &Listing) -> Option<&str> {
        self.listing_keys
            .iter()
            .find(|&(_, &index)| self.catalog.get(index).is_some_and(|l| l.id == listing.id))
            .map(|(key, _)| key.as_str())
    }

    /// Assemble the loaded quotes into a market board.
    #[must_use]
    pub fn board(&self) -> MarketBoard {
        MarketBoard {
            quotes: self.quotes.clone(),
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn parse_decimal(raw: &str) -> Result<rust_decimal::Decimal, FixtureError> {
    raw.trim()
        .parse()
        .map_err(|_err| FixtureError::InvalidDecimal(raw.to_string()))
}
