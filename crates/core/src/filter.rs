//! Catalog Filter
//!
//! Declarative, conjunctive filter over a listing catalog: free-text
//! search, location substring, exact quality tier, and an inclusive
//! price bracket. Filtering is pure and preserves catalog order.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    grades::{GradeParseError, QualityTier},
    listings::Listing,
};

/// Errors from building a filter out of form values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Price bracket was not of the form `min-max`.
    #[error("invalid price range: {0}")]
    InvalidPriceRange(String),

    /// Quality tier value was not recognised.
    #[error(transparent)]
    Tier(#[from] GradeParseError),
}

/// Inclusive price bracket in rupees per kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound, inclusive.
    pub min: Decimal,

    /// Upper bound, inclusive.
    pub max: Decimal,
}

impl PriceRange {
    /// Whether `price` falls inside the bracket, bounds included.
    #[must_use]
    pub fn contains(self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

impl FromStr for PriceRange {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FilterError::InvalidPriceRange(s.to_string());
        let (min, max) = s.split_once('-').ok_or_else(invalid)?;

        let min = min.trim().parse::<Decimal>().map_err(|_err| invalid())?;
        let max = max.trim().parse::<Decimal>().map_err(|_err| invalid())?;

        Ok(Self { min, max })
    }
}

/// Filter criteria for a listing catalog. The default value matches
/// every listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    /// Free-text needle matched against seller name, grade notation and
    /// seller location. Empty matches everything.
    pub search: String,

    /// Location substring; `None` matches everything.
    pub location: Option<String>,

    /// Exact quality tier; `None` matches everything.
    pub quality: Option<QualityTier>,

    /// Inclusive price bracket; `None` matches everything.
    pub price: Option<PriceRange>,
}

impl ListingFilter {
    /// Filter that matches every listing.
    #[must_use]
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Build a filter from UI-shaped form values, where the empty
    /// string and `all` (any case) both mean "unfiltered".
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] when the quality value is not a known
    /// tier or the price bracket is not of the form `min-max`.
    pub fn from_form(
        search: &str,
        location: &str,
        quality: &str,
        price: &str,
    ) -> Result<Self, FilterError> {
        let quality = form_value(quality)
            .map(str::parse::<QualityTier>)
            .transpose()?;

        let price = form_value(price)
            .map(str::parse::<PriceRange>)
            .transpose()?;

        Ok(Self {
            search: search.trim().to_string(),
            location: form_value(location).map(str::to_string),
            quality,
            price,
        })
    }

    /// Evaluate the filter against a single listing. All present
    /// criteria must hold.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_search(listing)
            && self.matches_location(listing)
            && self.matches_quality(listing)
            && self.matches_price(listing)
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        let needle = self.search.trim().to_lowercase();

        if needle.is_empty() {
            return true;
        }

        [
            listing.seller.name.as_str(),
            listing.grade.notation(),
            listing.seller.location.as_str(),
        ]
        .into_iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    fn matches_location(&self, listing: &Listing) -> bool {
        self.location.as_ref().is_none_or(|location| {
            listing
                .seller
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
        })
    }

    fn matches_quality(&self, listing: &Listing) -> bool {
        self.quality.is_none_or(|quality| listing.quality == quality)
    }

    fn matches_price(&self, listing: &Listing) -> bool {
        self.price.is_none_or(|range| range.contains(listing.price))
    }
}

/// Narrow a catalog to the listings matching `filter`, preserving the
/// input order. Pure: the input collection is untouched.
#[must_use]
pub fn filter_listings<'a>(listings: &'a [Listing], filter: &ListingFilter) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .collect()
}

fn form_value(raw: &str) -> Option<&str> {
    let raw = raw.trim();

    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return None;
    }

    Some(raw)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::listings::{ListingDraft, Seller};

    use super::*;

    fn listing(name: &str, location: &str, grade: &str, quality: &str, price: &str) -> Listing {
        let draft = ListingDraft {
            grade: grade.to_string(),
            quantity: "100".to_string(),
            quality: quality.to_string(),
            moisture: "0.5".to_string(),
            price: price.to_string(),
            description: String::new(),
        };

        let fields = match draft.validate() {
            Ok(fields) => fields,
            Err(error) => unreachable!("test listing must validate: {error}"),
        };

        Listing::create(
            Seller {
                id: format!("{}-farm", name.to_lowercase()),
                name: name.to_string(),
                location: location.to_string(),
                phone: None,
            },
            fields,
            Timestamp::UNIX_EPOCH,
        )
    }

    fn catalog() -> Vec<Listing> {
        vec![
            listing("Rajesh Kumar", "Agartala, West Tripura", "RSS-1", "Premium", "185"),
            listing("Priya Devi", "Udaipur, South Tripura", "RSS-3", "Standard", "175"),
            listing("Mohan Das", "Kailashahar, North Tripura", "Latex", "Premium", "190"),
            listing("Sunita Chakraborty", "Belonia, South Tripura", "RSS-4", "Commercial", "165"),
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let catalog = catalog();
        let matched = filter_listings(&catalog, &ListingFilter::match_all());

        let ids: Vec<_> = matched.iter().map(|listing| listing.id).collect();
        let expected: Vec<_> = catalog.iter().map(|listing| listing.id).collect();

        assert_eq!(ids, expected);
    }

    #[test]
    fn search_matches_seller_name_case_insensitively() {
        let catalog = catalog();
        let filter = ListingFilter {
            search: "rajesh".to_string(),
            ..ListingFilter::match_all()
        };

        let matched = filter_listings(&catalog, &filter);

        assert_eq!(matched.len(), 1);
        assert!(matched.iter().all(|listing| listing.seller.name == "Rajesh Kumar"));
    }

    #[test]
    fn search_matches_grade_notation() {
        let catalog = catalog();
        let filter = ListingFilter {
            search: "rss".to_string(),
            ..ListingFilter::match_all()
        };

        let matched = filter_listings(&catalog, &filter);

        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn search_matches_location() {
        let catalog = catalog();
        let filter = ListingFilter {
            search: "south tripura".to_string(),
            ..ListingFilter::match_all()
        };

        let matched = filter_listings(&catalog, &filter);

        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn location_filter_is_substring_match() {
        let catalog = catalog();
        let filter = ListingFilter {
            location: Some("udaipur".to_string()),
            ..ListingFilter::match_all()
        };

        let matched = filter_listings(&catalog, &filter);

        assert_eq!(matched.len(), 1);
        assert!(matched.iter().all(|listing| listing.seller.name == "Priya Devi"));
    }

    #[test]
    fn quality_filter_is_exact() {
        let catalog = catalog();
        let filter = ListingFilter {
            quality: Some(QualityTier::Premium),
            ..ListingFilter::match_all()
        };

        let matched = filter_listings(&catalog, &filter);

        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|listing| listing.quality == QualityTier::Premium));
    }

    #[test]
    fn price_bracket_is_inclusive() -> TestResult {
        let catalog = vec![
            listing("A", "X", "RSS-1", "Premium", "165"),
            listing("B", "X", "RSS-1", "Premium", "175"),
            listing("C", "X", "RSS-1", "Premium", "185"),
        ];

        let filter = ListingFilter {
            price: Some("170-180".parse()?),
            ..ListingFilter::match_all()
        };

        let matched = filter_listings(&catalog, &filter);

        assert_eq!(matched.len(), 1);
        assert!(matched.iter().all(|listing| listing.price == Decimal::from(175)));

        // Bounds themselves are in.
        let edge = ListingFilter {
            price: Some("165-185".parse()?),
            ..ListingFilter::match_all()
        };

        assert_eq!(filter_listings(&catalog, &edge).len(), 3);

        Ok(())
    }

    #[test]
    fn criteria_are_conjunctive() -> TestResult {
        let catalog = catalog();
        let filter = ListingFilter::from_form("tripura", "all", "Premium", "180-195")?;

        let matched = filter_listings(&catalog, &filter);

        let names: Vec<_> = matched
            .iter()
            .map(|listing| listing.seller.name.as_str())
            .collect();

        assert_eq!(names, vec!["Rajesh Kumar", "Mohan Das"]);

        Ok(())
    }

    #[test]
    fn result_preserves_catalog_order() -> TestResult {
        let catalog = catalog();
        let filter = ListingFilter::from_form("", "all", "all", "160-200")?;

        let matched = filter_listings(&catalog, &filter);
        let ids: Vec<_> = matched.iter().map(|listing| listing.id).collect();
        let expected: Vec<_> = catalog.iter().map(|listing| listing.id).collect();

        assert_eq!(ids, expected);

        Ok(())
    }

    #[test]
    fn from_form_treats_all_and_blank_as_unfiltered() -> TestResult {
        let filter = ListingFilter::from_form("", "ALL", "all", "")?;

        assert_eq!(filter, ListingFilter::match_all());

        Ok(())
    }

    #[test]
    fn from_form_rejects_malformed_price_range() {
        let result = ListingFilter::from_form("", "all", "all", "170");

        assert!(matches!(result, Err(FilterError::InvalidPriceRange(raw)) if raw == "170"));
    }

    #[test]
    fn from_form_rejects_unknown_tier() {
        let result = ListingFilter::from_form("", "all", "Deluxe", "all");

        assert!(matches!(result, Err(FilterError::Tier(_))));
    }

    #[test]
    fn price_range_parses_spaced_input() -> TestResult {
        let range = " 170 - 180 ".trim().parse::<PriceRange>()?;

        assert_eq!(range.min, Decimal::from(170));
        assert_eq!(range.max, Decimal::from(180));

        Ok(())
    }
}
