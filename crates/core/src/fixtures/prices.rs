//! Market quote fixtures.

use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    fixtures::{FixtureError, parse_decimal},
    prices::{LocationPrice, MarketQuote},
};

/// Wrapper for quotes in YAML.
#[derive(Debug, Deserialize)]
pub struct QuotesFixture {
    /// Quotes in board order.
    pub quotes: Vec<QuoteFixture>,
}

/// A single market quote fixture entry.
#[derive(Debug, Deserialize)]
pub struct QuoteFixture {
    /// Grade notation (e.g. `RSS-1`).
    pub grade: String,

    /// Current price in rupees per kilogram.
    pub current: String,

    /// Previous fixing in rupees per kilogram.
    pub previous: String,

    /// Per-location observations.
    #[serde(default)]
    pub locations: Vec<LocationFixture>,
}

/// A per-location observation.
#[derive(Debug, Deserialize)]
pub struct LocationFixture {
    /// Market town.
    pub name: String,

    /// Observed price in rupees per kilogram.
    pub price: String,
}

impl TryFrom<QuoteFixture> for MarketQuote {
    type Error = FixtureError;

    fn try_from(fixture: QuoteFixture) -> Result<Self, Self::Error> {
        let locations = fixture
            .locations
            .into_iter()
            .map(|location| {
                Ok(LocationPrice {
                    name: location.name,
                    price: parse_decimal(&location.price)?,
                })
            })
            .collect::<Result<SmallVec<_>, FixtureError>>()?;

        Ok(Self {
            grade: fixture.grade.parse()?,
            current: parse_decimal(&fixture.current)?,
            previous: parse_decimal(&fixture.previous)?,
            locations,
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{grades::RubberGrade, prices::Trend};

    use super::*;

    #[test]
    fn entry_converts_to_quote() -> TestResult {
        let quote: MarketQuote = QuoteFixture {
            grade: "Latex".to_string(),
            current: "192".to_string(),
            previous: "190".to_string(),
            locations: vec![LocationFixture {
                name: "Agartala".to_string(),
                price: "192".to_string(),
            }],
        }
        .try_into()?;

        assert_eq!(quote.grade, RubberGrade::Latex);
        assert_eq!(quote.trend(), Trend::Up);
        assert_eq!(quote.change(), Decimal::from(2));
        assert_eq!(quote.locations.len(), 1);

        Ok(())
    }

    #[test]
    fn bad_price_is_rejected() {
        let result: Result<MarketQuote, _> = QuoteFixture {
            grade: "RSS-1".to_string(),
            current: "cheap".to_string(),
            previous: "185".to_string(),
            locations: vec![],
        }
        .try_into();

        assert!(matches!(result, Err(FixtureError::InvalidDecimal(raw)) if raw == "cheap"));
    }

    #[test]
    fn unknown_grade_is_rejected() {
        let result: Result<MarketQuote, _> = QuoteFixture {
            grade: "RSS-7".to_string(),
            current: "187".to_string(),
            previous: "185".to_string(),
            locations: vec![],
        }
        .try_into();

        assert!(matches!(result, Err(FixtureError::Grade(_))));
    }
}
